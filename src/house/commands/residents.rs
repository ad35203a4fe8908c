use super::{finish, CmdResult, ReportKind};
use crate::error::Result;
use crate::model::Resident;
use crate::repository::HouseRepository;
use crate::store::DocumentStore;
use crate::validate::{validate_date, validate_email, validate_phone, validate_tax_id};

/// Raw resident fields as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct NewResident {
    pub name: String,
    pub tax_id: String,
    pub birthdate: String,
    pub phone: String,
    pub email: String,
    pub additional_info: String,
}

impl NewResident {
    /// First failing check, in the order tax id, birthdate, phone, email.
    fn invalid_field(&self) -> Option<&'static str> {
        if !validate_tax_id(&self.tax_id) {
            return Some("Tax ID must consist of exactly 9 digits.");
        }
        if !validate_date(&self.birthdate) {
            return Some("Invalid date format. Use 'YYYY-MM-DD'.");
        }
        if !validate_phone(&self.phone) {
            return Some("Invalid phone format. Use '+38-050-123-45-67' or '050-123-45-67'.");
        }
        if !validate_email(&self.email) {
            return Some("Invalid email format.");
        }
        None
    }
}

pub fn add<S: DocumentStore>(
    repo: &mut HouseRepository<S>,
    input: NewResident,
) -> Result<CmdResult> {
    if let Some(reason) = input.invalid_field() {
        return Ok(CmdResult::rejected(reason));
    }

    let name = input.name.clone();
    let resident = Resident::new(
        input.name,
        input.tax_id,
        input.birthdate,
        input.phone,
        input.email,
        input.additional_info,
    );
    let change = repo.add_resident(resident)?;

    let mut result = CmdResult::default();
    result.record(change, format!("Resident {} added.", name));
    Ok(finish(repo, result, ReportKind::Residents))
}

pub fn remove<S: DocumentStore>(repo: &mut HouseRepository<S>, tax_id: &str) -> Result<CmdResult> {
    if repo.find_resident(tax_id).is_none() {
        return Ok(CmdResult::rejected(format!(
            "Resident with tax ID {} not found.",
            tax_id
        )));
    }

    let change = repo.remove_resident(tax_id)?;
    let mut result = CmdResult::default();
    result.record(change, format!("Resident with tax ID {} removed.", tax_id));
    Ok(finish(repo, result, ReportKind::Residents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{MessageLevel, Report};
    use crate::store::memory::fixtures::RegistryFixture;

    fn valid_input() -> NewResident {
        NewResident {
            name: "John Doe".into(),
            tax_id: "123456789".into(),
            birthdate: "1985-05-15".into(),
            phone: "050-123-45-67".into(),
            email: "john.doe@example.com".into(),
            additional_info: "Additional info".into(),
        }
    }

    #[test]
    fn adds_valid_resident_and_reports() {
        let mut repo = RegistryFixture::new().build();
        let result = add(&mut repo, valid_input()).unwrap();

        assert!(!result.has_errors());
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(repo.find_resident("123456789").is_some());
        assert!(matches!(result.report, Some(Report::Residents(ref rows)) if rows.len() == 1));
        assert_eq!(repo.store().save_count(), 1);
    }

    #[test]
    fn new_resident_starts_unassigned() {
        let mut repo = RegistryFixture::new().build();
        add(&mut repo, valid_input()).unwrap();
        assert_eq!(repo.find_resident("123456789").unwrap().apartment, None);
    }

    #[test]
    fn rejects_invalid_fields_without_touching_repository() {
        let cases = [
            NewResident {
                tax_id: "12345".into(),
                ..valid_input()
            },
            NewResident {
                birthdate: "15-05-1985".into(),
                ..valid_input()
            },
            NewResident {
                birthdate: " 1985-05-15".into(),
                ..valid_input()
            },
            NewResident {
                phone: "+38-050-1234567".into(),
                ..valid_input()
            },
            NewResident {
                email: "user@domain".into(),
                ..valid_input()
            },
        ];

        for input in cases {
            let mut repo = RegistryFixture::new().build();
            let result = add(&mut repo, input).unwrap();
            assert!(result.has_errors());
            assert!(result.report.is_none());
            assert!(repo.residents().is_empty());
            assert_eq!(repo.store().save_count(), 0);
        }
    }

    #[test]
    fn tax_id_is_checked_before_other_fields() {
        let mut repo = RegistryFixture::new().build();
        let input = NewResident {
            tax_id: "bad".into(),
            email: "bad".into(),
            ..valid_input()
        };
        let result = add(&mut repo, input).unwrap();
        assert!(result.messages[0].content.contains("Tax ID"));
    }

    #[test]
    fn duplicate_tax_id_warns_and_keeps_original() {
        let mut repo = RegistryFixture::new()
            .with_resident("Original", "123456789")
            .build();
        let result = add(&mut repo, valid_input()).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(repo.residents().len(), 1);
        assert_eq!(repo.residents()[0].name, "Original");
        assert_eq!(repo.store().save_count(), 0);
    }

    #[test]
    fn remove_unknown_resident_is_rejected() {
        let mut repo = RegistryFixture::new().build();
        let result = remove(&mut repo, "123456789").unwrap();
        assert!(result.has_errors());
        assert!(result.report.is_none());
    }

    #[test]
    fn remove_deletes_resident_and_snapshot() {
        let mut repo = RegistryFixture::new()
            .with_resident("John", "123456789")
            .with_apartment("5")
            .build();
        repo.assign("123456789", "5").unwrap();

        let result = remove(&mut repo, "123456789").unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(repo.residents().is_empty());
        assert!(repo.find_apartment("5").unwrap().residents().is_empty());
    }
}
