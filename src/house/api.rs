//! # API Facade
//!
//! The single entry point for registry operations. The shell (or any other
//! front end) talks to [`HouseApi`] and nothing else.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Owns** the repository and the backup file location
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not validate, print, or decide anything. Business rules live in
//! `commands/*.rs`; storage rules in `repository.rs` and `store/`.
//!
//! `HouseApi<S: DocumentStore>` runs over a `FileStore` in production and an
//! `InMemoryStore` in tests.

use crate::commands::{self, CmdResult, ReportKind};
use crate::error::Result;
use crate::repository::HouseRepository;
use crate::store::DocumentStore;
use std::path::PathBuf;

pub use crate::commands::apartments::NewApartment;
pub use crate::commands::residents::NewResident;

pub struct HouseApi<S: DocumentStore> {
    repo: HouseRepository<S>,
    backup_path: PathBuf,
}

impl<S: DocumentStore> HouseApi<S> {
    /// Opens the registry from `store`. `backup_path` is where manual saves
    /// and loads go.
    pub fn new(store: S, backup_path: impl Into<PathBuf>) -> Self {
        Self {
            repo: HouseRepository::open(store),
            backup_path: backup_path.into(),
        }
    }

    pub fn repository(&self) -> &HouseRepository<S> {
        &self.repo
    }

    pub fn add_resident(&mut self, input: NewResident) -> Result<CmdResult> {
        commands::residents::add(&mut self.repo, input)
    }

    pub fn remove_resident(&mut self, tax_id: &str) -> Result<CmdResult> {
        commands::residents::remove(&mut self.repo, tax_id)
    }

    pub fn add_apartment(&mut self, input: NewApartment) -> Result<CmdResult> {
        commands::apartments::add(&mut self.repo, input)
    }

    pub fn remove_apartment(&mut self, number: &str) -> Result<CmdResult> {
        commands::apartments::remove(&mut self.repo, number)
    }

    pub fn assign(&mut self, tax_id: &str, number: &str) -> Result<CmdResult> {
        commands::assignment::assign(&mut self.repo, tax_id, number)
    }

    pub fn unassign(&mut self, tax_id: &str) -> Result<CmdResult> {
        commands::assignment::unassign(&mut self.repo, tax_id)
    }

    pub fn report(&self, kind: ReportKind) -> CmdResult {
        match kind {
            ReportKind::Residents => commands::reports::residents(&self.repo),
            ReportKind::Apartments => commands::reports::apartments(&self.repo),
            ReportKind::ByApartment => commands::reports::by_apartment(&self.repo),
            ReportKind::Unassigned => commands::reports::unassigned(&self.repo),
        }
    }

    pub fn save_backup(&self) -> Result<CmdResult> {
        commands::backup::save(&self.repo, &self.backup_path)
    }

    pub fn load_backup(&mut self) -> Result<CmdResult> {
        commands::backup::load(&mut self.repo, &self.backup_path)
    }
}
