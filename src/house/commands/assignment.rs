use super::{finish, CmdResult, ReportKind};
use crate::error::Result;
use crate::repository::HouseRepository;
use crate::store::DocumentStore;
use crate::validate::{is_digits, validate_apartment};

/// Links a resident to an apartment, then orders residents by apartment.
pub fn assign<S: DocumentStore>(
    repo: &mut HouseRepository<S>,
    tax_id: &str,
    number: &str,
) -> Result<CmdResult> {
    if !is_digits(tax_id) || !validate_apartment(number) {
        return Ok(CmdResult::rejected(
            "Tax ID and apartment number must be numbers.",
        ));
    }
    if repo.find_resident(tax_id).is_none() {
        return Ok(CmdResult::rejected(format!(
            "Resident with tax ID {} not found.",
            tax_id
        )));
    }
    if repo.find_apartment(number).is_none() {
        return Ok(CmdResult::rejected(format!(
            "Apartment number {} not found.",
            number
        )));
    }

    let change = repo.assign(tax_id, number)?;
    repo.sort_residents_by_apartment()?;

    let mut result = CmdResult::default();
    result.record(
        change,
        format!(
            "Resident with tax ID {} assigned to apartment {}.",
            tax_id, number
        ),
    );
    Ok(finish(repo, result, ReportKind::Residents))
}

pub fn unassign<S: DocumentStore>(
    repo: &mut HouseRepository<S>,
    tax_id: &str,
) -> Result<CmdResult> {
    if !is_digits(tax_id) {
        return Ok(CmdResult::rejected("Tax ID must be a number."));
    }
    if repo.find_resident(tax_id).is_none() {
        return Ok(CmdResult::rejected(format!(
            "Resident with tax ID {} not found.",
            tax_id
        )));
    }

    let change = repo.unassign(tax_id)?;
    let mut result = CmdResult::default();
    result.record(
        change,
        format!("Resident with tax ID {} unassigned from apartment.", tax_id),
    );
    Ok(finish(repo, result, ReportKind::Residents))
}
