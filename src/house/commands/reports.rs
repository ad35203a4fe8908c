//! Read-only views over the current document.
//!
//! Reports carry data, not text. The CLI decides how to lay them out.

use super::CmdResult;
use crate::model::Resident;
use crate::repository::HouseRepository;
use crate::store::DocumentStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Every resident, in stored order.
    Residents,
    /// Every apartment with its resident count.
    Apartments,
    /// Residents grouped under the apartment they reference.
    ByApartment,
    /// Residents without an apartment.
    Unassigned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApartmentSummary {
    pub number: String,
    pub entrance: String,
    pub floors: String,
    pub floor: String,
    pub rooms: String,
    pub resident_count: usize,
}

#[derive(Debug, Clone)]
pub struct ApartmentGroup {
    pub number: String,
    pub residents: Vec<Resident>,
}

#[derive(Debug, Clone)]
pub enum Report {
    Residents(Vec<Resident>),
    Apartments(Vec<ApartmentSummary>),
    ByApartment(Vec<ApartmentGroup>),
    Unassigned(Vec<Resident>),
}

pub fn run<S: DocumentStore>(repo: &HouseRepository<S>, kind: ReportKind) -> CmdResult {
    CmdResult::default().with_report(build(repo, kind))
}

pub fn residents<S: DocumentStore>(repo: &HouseRepository<S>) -> CmdResult {
    run(repo, ReportKind::Residents)
}

pub fn apartments<S: DocumentStore>(repo: &HouseRepository<S>) -> CmdResult {
    run(repo, ReportKind::Apartments)
}

pub fn by_apartment<S: DocumentStore>(repo: &HouseRepository<S>) -> CmdResult {
    run(repo, ReportKind::ByApartment)
}

pub fn unassigned<S: DocumentStore>(repo: &HouseRepository<S>) -> CmdResult {
    run(repo, ReportKind::Unassigned)
}

pub(crate) fn build<S: DocumentStore>(repo: &HouseRepository<S>, kind: ReportKind) -> Report {
    match kind {
        ReportKind::Residents => Report::Residents(repo.residents().to_vec()),
        ReportKind::Apartments => Report::Apartments(
            repo.apartments()
                .iter()
                .map(|a| ApartmentSummary {
                    number: a.number.clone(),
                    entrance: a.entrance.clone(),
                    floors: a.floors.clone(),
                    floor: a.floor.clone(),
                    rooms: a.rooms.clone(),
                    resident_count: a.residents().len(),
                })
                .collect(),
        ),
        ReportKind::ByApartment => Report::ByApartment(
            repo.apartments()
                .iter()
                .map(|a| ApartmentGroup {
                    number: a.number.clone(),
                    residents: repo
                        .residents()
                        .iter()
                        .filter(|r| r.is_assigned_to(&a.number))
                        .cloned()
                        .collect(),
                })
                .collect(),
        ),
        ReportKind::Unassigned => Report::Unassigned(
            repo.residents()
                .iter()
                .filter(|r| !r.is_assigned())
                .cloned()
                .collect(),
        ),
    }
}
