use house_registry::commands::ReportKind;

pub const MAIN_MENU: &str = "\
--- Main menu ---
1. Add resident.
2. Remove resident.
3. Add apartment.
4. Remove apartment.
5. Assign resident to apartment.
6. Unassign resident from apartment.
7. Save data to backup file.
8. Load data from backup file.
9. Reports.
10. Exit.";

pub const REPORTS_MENU: &str = "\
--- Reports ---
1. Residents.
2. Apartments (ascending by number).
3. Residents by apartment.
4. Residents without an apartment.
5. Back to main menu.";

pub const CHOICE_PROMPT: &str = "Choose an action: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    AddResident,
    RemoveResident,
    AddApartment,
    RemoveApartment,
    Assign,
    Unassign,
    SaveBackup,
    LoadBackup,
    Reports,
    Exit,
}

impl MainChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MainChoice::AddResident,
            "2" => MainChoice::RemoveResident,
            "3" => MainChoice::AddApartment,
            "4" => MainChoice::RemoveApartment,
            "5" => MainChoice::Assign,
            "6" => MainChoice::Unassign,
            "7" => MainChoice::SaveBackup,
            "8" => MainChoice::LoadBackup,
            "9" => MainChoice::Reports,
            "10" => MainChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportChoice {
    Show(ReportKind),
    Back,
}

impl ReportChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => ReportChoice::Show(ReportKind::Residents),
            "2" => ReportChoice::Show(ReportKind::Apartments),
            "3" => ReportChoice::Show(ReportKind::ByApartment),
            "4" => ReportChoice::Show(ReportKind::Unassigned),
            "5" => ReportChoice::Back,
            _ => return None,
        };
        Some(choice)
    }
}
