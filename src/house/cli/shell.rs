//! The interactive menu loop.
//!
//! The shell reads choices and fields, runs the cheap entry guards, and hands
//! everything else to [`HouseApi`]. A failed guard drops the current action
//! and returns to the menu; a failed save is printed and the loop goes on.

use super::menu::{MainChoice, ReportChoice, CHOICE_PROMPT, MAIN_MENU, REPORTS_MENU};
use super::prompt::Prompter;
use super::render::{render_error, render_messages, render_report};
use house_registry::api::{HouseApi, NewApartment, NewResident};
use house_registry::commands::CmdResult;
use house_registry::error::Result;
use house_registry::store::DocumentStore;
use house_registry::validate::{
    is_digits, validate_date, validate_email, validate_phone, validate_tax_id,
};
use log::{debug, error};
use std::io::{BufRead, Write};

/// Outcome of a single guarded prompt.
enum Field {
    Value(String),
    Rejected,
    Eof,
}

/// Control flow out of one menu action.
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<S: DocumentStore, R, W> {
    api: HouseApi<S>,
    io: Prompter<R, W>,
    use_color: bool,
}

impl<S: DocumentStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(api: HouseApi<S>, input: R, output: W, use_color: bool) -> Self {
        Self {
            api,
            io: Prompter::new(input, output),
            use_color,
        }
    }

    /// Runs until choice 10 or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.io.say("")?;
            self.io.say(MAIN_MENU)?;
            let Some(line) = self.io.ask(CHOICE_PROMPT)? else {
                break;
            };

            let flow = match MainChoice::parse(&line) {
                Some(choice) => {
                    debug!("event=menu_choice module=shell status=ok choice={:?}", choice);
                    self.dispatch(choice)?
                }
                None => {
                    self.io.say("Invalid choice, try again.")?;
                    Flow::Continue
                }
            };
            if let Flow::Quit = flow {
                break;
            }
        }
        self.io.say("Goodbye!")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MainChoice) -> Result<Flow> {
        match choice {
            MainChoice::AddResident => self.add_resident(),
            MainChoice::RemoveResident => self.remove_resident(),
            MainChoice::AddApartment => self.add_apartment(),
            MainChoice::RemoveApartment => self.remove_apartment(),
            MainChoice::Assign => self.assign(),
            MainChoice::Unassign => self.unassign(),
            MainChoice::SaveBackup => {
                let outcome = self.api.save_backup();
                self.show(outcome)?;
                Ok(Flow::Continue)
            }
            MainChoice::LoadBackup => {
                let outcome = self.api.load_backup();
                self.show(outcome)?;
                Ok(Flow::Continue)
            }
            MainChoice::Reports => self.reports(),
            MainChoice::Exit => Ok(Flow::Quit),
        }
    }

    fn add_resident(&mut self) -> Result<Flow> {
        let name = match self.field("Name: ", |s| !s.trim().is_empty(), "Name cannot be empty.")? {
            Field::Value(v) => v,
            Field::Rejected => return Ok(Flow::Continue),
            Field::Eof => return Ok(Flow::Quit),
        };
        let tax_id = match self.field("Tax ID: ", validate_tax_id, "Tax ID must consist of 9 digits.")? {
            Field::Value(v) => v,
            Field::Rejected => return Ok(Flow::Continue),
            Field::Eof => return Ok(Flow::Quit),
        };
        let birthdate = match self.field(
            "Birthdate (YYYY-MM-DD): ",
            validate_date,
            "Invalid date format. Use YYYY-MM-DD.",
        )? {
            Field::Value(v) => v,
            Field::Rejected => return Ok(Flow::Continue),
            Field::Eof => return Ok(Flow::Quit),
        };
        let phone = match self.field(
            "Phone (+38-050-123-45-67 or 050-123-45-67): ",
            validate_phone,
            "Invalid phone format.",
        )? {
            Field::Value(v) => v,
            Field::Rejected => return Ok(Flow::Continue),
            Field::Eof => return Ok(Flow::Quit),
        };
        let email = match self.field("Email: ", validate_email, "Invalid email.")? {
            Field::Value(v) => v,
            Field::Rejected => return Ok(Flow::Continue),
            Field::Eof => return Ok(Flow::Quit),
        };
        let Some(additional_info) = self.io.ask("Additional info: ")? else {
            return Ok(Flow::Quit);
        };

        let outcome = self.api.add_resident(NewResident {
            name: name.trim().to_string(),
            tax_id,
            birthdate,
            phone,
            email,
            additional_info,
        });
        self.show(outcome)?;
        Ok(Flow::Continue)
    }

    fn remove_resident(&mut self) -> Result<Flow> {
        match self.field("Resident tax ID: ", validate_tax_id, "Tax ID must consist of 9 digits.")? {
            Field::Value(tax_id) => {
                let outcome = self.api.remove_resident(&tax_id);
                self.show(outcome)?;
                Ok(Flow::Continue)
            }
            Field::Rejected => Ok(Flow::Continue),
            Field::Eof => Ok(Flow::Quit),
        }
    }

    fn add_apartment(&mut self) -> Result<Flow> {
        let prompts = [
            ("Apartment number: ", "Invalid apartment number. Enter a number."),
            ("Entrance: ", "Invalid entrance number. Enter a number."),
            ("Number of floors: ", "Invalid number of floors. Enter a number."),
            ("Floor: ", "Invalid floor. Enter a number."),
            ("Number of rooms: ", "Invalid number of rooms. Enter a number."),
        ];
        let mut values = Vec::with_capacity(prompts.len());
        for (label, reason) in prompts {
            match self.field(label, is_digits, reason)? {
                Field::Value(v) => values.push(v),
                Field::Rejected => return Ok(Flow::Continue),
                Field::Eof => return Ok(Flow::Quit),
            }
        }

        let mut values = values.into_iter();
        let mut next = || values.next().unwrap_or_default();
        let input = NewApartment {
            number: next(),
            entrance: next(),
            floors: next(),
            floor: next(),
            rooms: next(),
        };
        let outcome = self.api.add_apartment(input);
        self.show(outcome)?;
        Ok(Flow::Continue)
    }

    fn remove_apartment(&mut self) -> Result<Flow> {
        match self.field("Apartment number: ", is_digits, "Invalid apartment number.")? {
            Field::Value(number) => {
                let outcome = self.api.remove_apartment(&number);
                self.show(outcome)?;
                Ok(Flow::Continue)
            }
            Field::Rejected => Ok(Flow::Continue),
            Field::Eof => Ok(Flow::Quit),
        }
    }

    fn assign(&mut self) -> Result<Flow> {
        let Some(tax_id) = self.io.ask("Resident tax ID: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(number) = self.io.ask("Apartment number: ")? else {
            return Ok(Flow::Quit);
        };
        let outcome = self.api.assign(tax_id.trim(), number.trim());
        self.show(outcome)?;
        Ok(Flow::Continue)
    }

    fn unassign(&mut self) -> Result<Flow> {
        let Some(tax_id) = self.io.ask("Resident tax ID: ")? else {
            return Ok(Flow::Quit);
        };
        let outcome = self.api.unassign(tax_id.trim());
        self.show(outcome)?;
        Ok(Flow::Continue)
    }

    fn reports(&mut self) -> Result<Flow> {
        loop {
            self.io.say("")?;
            self.io.say(REPORTS_MENU)?;
            let Some(line) = self.io.ask(CHOICE_PROMPT)? else {
                return Ok(Flow::Quit);
            };
            match ReportChoice::parse(&line) {
                Some(ReportChoice::Show(kind)) => {
                    let result = self.api.report(kind);
                    self.show(Ok(result))?;
                }
                Some(ReportChoice::Back) => return Ok(Flow::Continue),
                None => self.io.say("Invalid choice in reports menu.")?,
            }
        }
    }

    /// Asks for one value and checks it with `valid`. A failed check prints
    /// `reason` and aborts the action.
    fn field(
        &mut self,
        label: &str,
        valid: impl Fn(&str) -> bool,
        reason: &str,
    ) -> Result<Field> {
        let Some(value) = self.io.ask(label)? else {
            return Ok(Field::Eof);
        };
        let value = value.trim().to_string();
        if valid(&value) {
            return Ok(Field::Value(value));
        }
        let text = render_error(reason, self.use_color);
        self.io.say(text.trim_end())?;
        Ok(Field::Rejected)
    }

    /// Prints a command outcome. A failed save is shown, not propagated.
    fn show(&mut self, outcome: Result<CmdResult>) -> Result<()> {
        match outcome {
            Ok(result) => {
                let mut text = render_messages(&result.messages, self.use_color);
                if let Some(report) = &result.report {
                    text.push_str(&render_report(report, self.use_color));
                }
                self.io.say(text.trim_end())?;
            }
            Err(err) => {
                error!("event=command module=shell status=error error={}", err);
                let text = render_error(&err.to_string(), self.use_color);
                self.io.say(text.trim_end())?;
            }
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_parts(self) -> (HouseApi<S>, W) {
        (self.api, self.io.into_output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use house_registry::store::memory::InMemoryStore;
    use std::io::Cursor;

    fn run_script(script: &str) -> (HouseApi<InMemoryStore>, String) {
        let api = HouseApi::new(InMemoryStore::new(), "unused-backup.json");
        let mut shell = Shell::new(api, Cursor::new(script.to_string()), Vec::new(), false);
        shell.run().unwrap();
        let (api, out) = shell.into_parts();
        (api, String::from_utf8(out).unwrap())
    }

    const ADD_JOHN: &str =
        "1\nJohn Doe\n123456789\n1985-05-15\n050-123-45-67\njohn.doe@example.com\nAdditional info\n";
    const ADD_APARTMENT_ONE: &str = "3\n1\n1\n5\n1\n2\n";

    #[test]
    fn exit_choice_says_goodbye() {
        let (_, out) = run_script("10\n");
        assert!(out.contains("--- Main menu ---"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (_, out) = run_script("");
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn unknown_choice_shows_menu_again() {
        let (_, out) = run_script("42\n10\n");
        assert!(out.contains("Invalid choice, try again."));
        assert_eq!(out.matches("--- Main menu ---").count(), 2);
    }

    #[test]
    fn add_resident_flow() {
        let (api, out) = run_script(&format!("{}10\n", ADD_JOHN));
        assert!(out.contains("Resident John Doe added."));
        assert!(out.contains("Residents:"));
        assert!(api.repository().find_resident("123456789").is_some());
    }

    #[test]
    fn blank_name_aborts_action() {
        let (api, out) = run_script("1\n   \n10\n");
        assert!(out.contains("Error: Name cannot be empty."));
        assert!(api.repository().residents().is_empty());
    }

    #[test]
    fn bad_field_stops_prompting() {
        let (api, out) = run_script("1\nJohn\n123\n10\n");
        assert!(out.contains("Tax ID must consist of 9 digits."));
        assert!(!out.contains("Birthdate"));
        assert!(api.repository().residents().is_empty());
    }

    #[test]
    fn entrance_must_be_digits() {
        let (api, out) = run_script("3\n1\nA\n10\n");
        assert!(out.contains("Invalid entrance number."));
        assert!(api.repository().apartments().is_empty());
    }

    #[test]
    fn full_scenario_through_menu() {
        let script = format!(
            "{}{}5\n123456789\n1\n6\n123456789\n2\n123456789\n4\n1\n10\n",
            ADD_JOHN, ADD_APARTMENT_ONE
        );
        let (api, out) = run_script(&script);

        assert!(out.contains("Apartment number 1 added."));
        assert!(out.contains("Resident with tax ID 123456789 assigned to apartment 1."));
        assert!(out.contains("Resident with tax ID 123456789 unassigned from apartment."));
        assert!(out.contains("Resident with tax ID 123456789 removed."));
        assert!(out.contains("Apartment number 1 removed."));
        assert!(api.repository().document().is_empty());
    }

    #[test]
    fn reports_submenu_loops_until_back() {
        let script = format!("{}9\n1\n4\n7\n5\n10\n", ADD_JOHN);
        let (_, out) = run_script(&script);

        assert!(out.contains("Residents without an apartment:\n  - John Doe, tax ID: 123456789"));
        assert!(out.contains("Invalid choice in reports menu."));
        assert_eq!(out.matches("--- Reports ---").count(), 4);
    }

    #[test]
    fn failed_save_is_printed_and_loop_continues() {
        let api = HouseApi::new(InMemoryStore::new().failing(), "unused-backup.json");
        let script = format!("{}10\n", ADD_APARTMENT_ONE);
        let mut shell = Shell::new(api, Cursor::new(script), Vec::new(), false);
        shell.run().unwrap();
        let (api, out) = shell.into_parts();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Error: IO error"));
        assert!(out.ends_with("Goodbye!\n"));
        assert_eq!(api.repository().apartments().len(), 1);
    }
}
