use super::{finish, CmdResult, ReportKind};
use crate::error::Result;
use crate::model::Apartment;
use crate::repository::HouseRepository;
use crate::store::DocumentStore;
use crate::validate::{is_digits, validate_apartment};

#[derive(Debug, Clone, Default)]
pub struct NewApartment {
    pub number: String,
    pub entrance: String,
    pub floors: String,
    pub floor: String,
    pub rooms: String,
}

impl NewApartment {
    fn numeric_fields_valid(&self) -> bool {
        validate_apartment(&self.number)
            && is_digits(&self.floors)
            && is_digits(&self.floor)
            && is_digits(&self.rooms)
    }
}

/// Adds an apartment and keeps the collection ordered by number.
pub fn add<S: DocumentStore>(
    repo: &mut HouseRepository<S>,
    input: NewApartment,
) -> Result<CmdResult> {
    if !input.numeric_fields_valid() {
        return Ok(CmdResult::rejected(
            "Apartment number, floors, floor and rooms must be numbers.",
        ));
    }

    let number = input.number.clone();
    let apartment = Apartment::new(
        input.number,
        input.entrance,
        input.floors,
        input.floor,
        input.rooms,
    );
    let change = repo.add_apartment(apartment)?;
    repo.sort_apartments_by_number()?;

    let mut result = CmdResult::default();
    result.record(change, format!("Apartment number {} added.", number));
    Ok(finish(repo, result, ReportKind::Apartments))
}

pub fn remove<S: DocumentStore>(repo: &mut HouseRepository<S>, number: &str) -> Result<CmdResult> {
    if !validate_apartment(number) {
        return Ok(CmdResult::rejected("Apartment number must be a number."));
    }
    if repo.find_apartment(number).is_none() {
        return Ok(CmdResult::rejected(format!(
            "Apartment number {} not found.",
            number
        )));
    }

    let change = repo.remove_apartment(number)?;
    let mut result = CmdResult::default();
    result.record(change, format!("Apartment number {} removed.", number));
    Ok(finish(repo, result, ReportKind::Apartments))
}
