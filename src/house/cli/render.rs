//! Turns command output into terminal text.
//!
//! Everything here returns a `String` so the shell decides where it goes and
//! tests can compare plain text. Color is applied only when `use_color` is
//! set; widths are measured in terminal columns, so names in any script line
//! up.

use colored::Colorize;
use house_registry::commands::{
    ApartmentGroup, ApartmentSummary, CmdMessage, MessageLevel, Report,
};
use house_registry::model::Resident;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const UNASSIGNED: &str = "-";

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    let mut out = String::new();
    for message in messages {
        let line = if use_color {
            match message.level {
                MessageLevel::Info => message.content.dimmed().to_string(),
                MessageLevel::Success => message.content.green().to_string(),
                MessageLevel::Warning => message.content.yellow().to_string(),
                MessageLevel::Error => message.content.red().to_string(),
            }
        } else {
            message.content.clone()
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn render_error(text: &str, use_color: bool) -> String {
    let line = format!("Error: {}", text);
    if use_color {
        format!("{}\n", line.red())
    } else {
        format!("{}\n", line)
    }
}

pub fn render_report(report: &Report, use_color: bool) -> String {
    match report {
        Report::Residents(rows) => render_residents(rows, use_color),
        Report::Apartments(rows) => render_apartments(rows, use_color),
        Report::ByApartment(groups) => render_groups(groups, use_color),
        Report::Unassigned(rows) => render_unassigned(rows, use_color),
    }
}

fn heading(title: &str, use_color: bool) -> String {
    if use_color {
        format!("\n{}\n", title.bold())
    } else {
        format!("\n{}\n", title)
    }
}

fn render_residents(rows: &[Resident], use_color: bool) -> String {
    let mut out = heading("Residents:", use_color);
    if rows.is_empty() {
        out.push_str("No residents.\n");
        return out;
    }
    out.push_str(&format!(
        "{} {:<9}  {}\n",
        pad_to_width("Name", NAME_WIDTH),
        "Tax ID",
        "Apartment"
    ));
    for resident in rows {
        let apartment = match resident.apartment.as_deref() {
            Some(number) if !number.is_empty() => number,
            _ => UNASSIGNED,
        };
        out.push_str(&format!(
            "{} {:<9}  {}\n",
            pad_to_width(&resident.name, NAME_WIDTH),
            resident.tax_id,
            apartment
        ));
    }
    out
}

fn render_apartments(rows: &[ApartmentSummary], use_color: bool) -> String {
    let mut out = heading("Apartments (ascending by number):", use_color);
    if rows.is_empty() {
        out.push_str("No apartments.\n");
        return out;
    }
    out.push_str(&format!(
        "{:>8} {:>9} {:>7} {:>6} {:>6} {:>10}\n",
        "Number", "Entrance", "Floors", "Floor", "Rooms", "Residents"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:>8} {:>9} {:>7} {:>6} {:>6} {:>10}\n",
            row.number, row.entrance, row.floors, row.floor, row.rooms, row.resident_count
        ));
    }
    out
}

fn render_groups(groups: &[ApartmentGroup], use_color: bool) -> String {
    let mut out = heading("Residents by apartment:", use_color);
    if groups.is_empty() {
        out.push_str("No apartments.\n");
        return out;
    }
    for group in groups {
        out.push_str(&format!("Apartment {}:\n", group.number));
        for resident in &group.residents {
            out.push_str(&bullet(resident));
        }
    }
    out
}

fn render_unassigned(rows: &[Resident], use_color: bool) -> String {
    let mut out = heading("Residents without an apartment:", use_color);
    if rows.is_empty() {
        out.push_str("None.\n");
        return out;
    }
    for resident in rows {
        out.push_str(&bullet(resident));
    }
    out
}

fn bullet(resident: &Resident) -> String {
    format!("  - {}, tax ID: {}\n", resident.name, resident.tax_id)
}

/// Truncates or right-pads `s` to exactly `width` columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut text = truncate_to_width(s, width);
    let used = text.width();
    text.push_str(&" ".repeat(width.saturating_sub(used)));
    text
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
