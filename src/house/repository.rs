//! # Repository
//!
//! [`HouseRepository`] owns the [`Document`] and the store it came from. It is
//! the only code that mutates the document, and it keeps the two sides of the
//! resident ↔ apartment link in step:
//!
//! - a resident whose `apartment` is `N` has a snapshot in apartment `N`
//! - a snapshot in apartment `N` belongs to a resident whose `apartment` is `N`
//!
//! ## Outcomes
//!
//! Mutators return `Result<Change>`:
//!
//! - `Ok(Change::Applied)`: the document changed and was saved.
//! - `Ok(Change::Skipped(_))`: a domain no-op (missing key, duplicate key,
//!   already assigned...). Nothing changed and nothing was saved.
//! - `Err(_)`: the save failed. The in-memory change stays in place; the
//!   stored copy is behind until the next successful save.
//!
//! Lookups are linear scans. Collections are small and ordered for display,
//! so there is no index to keep consistent.

use crate::error::Result;
use crate::model::{Apartment, Document, Resident};
use crate::store::DocumentStore;
use crate::validate::numeric_key;
use log::{error, info, warn};
use std::cmp::Ordering;
use std::fmt;

/// Result of a repository mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Applied,
    Skipped(Skip),
}

impl Change {
    pub fn is_applied(&self) -> bool {
        matches!(self, Change::Applied)
    }
}

/// Why a mutation was a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    ResidentExists(String),
    ResidentNotFound(String),
    ApartmentExists(String),
    ApartmentNotFound(String),
    AlreadyAssigned { tax_id: String, number: String },
    NotAssigned(String),
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::ResidentExists(tax_id) => {
                write!(f, "Resident with tax ID {} already exists.", tax_id)
            }
            Skip::ResidentNotFound(tax_id) => {
                write!(f, "Resident with tax ID {} not found.", tax_id)
            }
            Skip::ApartmentExists(number) => {
                write!(f, "Apartment number {} already exists.", number)
            }
            Skip::ApartmentNotFound(number) => {
                write!(f, "Apartment number {} not found.", number)
            }
            Skip::AlreadyAssigned { tax_id, number } => write!(
                f,
                "Resident with tax ID {} is already assigned to apartment {}.",
                tax_id, number
            ),
            Skip::NotAssigned(tax_id) => write!(
                f,
                "Resident with tax ID {} is not assigned to any apartment.",
                tax_id
            ),
        }
    }
}

pub struct HouseRepository<S: DocumentStore> {
    store: S,
    document: Document,
}

impl<S: DocumentStore> HouseRepository<S> {
    /// Loads the document from `store`. Never fails: an unreadable store
    /// yields an empty registry.
    pub fn open(store: S) -> Self {
        let document = store.load();
        info!(
            "event=repository_open module=repo status=ok residents={} apartments={}",
            document.residents.len(),
            document.apartments.len()
        );
        Self { store, document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn residents(&self) -> &[Resident] {
        &self.document.residents
    }

    pub fn apartments(&self) -> &[Apartment] {
        &self.document.apartments
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn find_resident(&self, tax_id: &str) -> Option<&Resident> {
        self.document.residents.iter().find(|r| r.tax_id == tax_id)
    }

    pub fn find_apartment(&self, number: &str) -> Option<&Apartment> {
        self.document.apartments.iter().find(|a| a.number == number)
    }

    pub fn add_resident(&mut self, resident: Resident) -> Result<Change> {
        if self.find_resident(&resident.tax_id).is_some() {
            return Ok(skip(Skip::ResidentExists(resident.tax_id)));
        }
        info!(
            "event=resident_add module=repo status=ok tax_id={}",
            resident.tax_id
        );
        self.document.residents.push(resident);
        self.persist()
    }

    /// Deletes the resident and every snapshot of it. Other residents keep
    /// their apartment references untouched.
    pub fn remove_resident(&mut self, tax_id: &str) -> Result<Change> {
        if self.find_resident(tax_id).is_none() {
            return Ok(skip(Skip::ResidentNotFound(tax_id.to_string())));
        }
        for apartment in &mut self.document.apartments {
            apartment.remove_snapshot(tax_id);
        }
        self.document.residents.retain(|r| r.tax_id != tax_id);
        info!("event=resident_remove module=repo status=ok tax_id={}", tax_id);
        self.persist()
    }

    pub fn add_apartment(&mut self, apartment: Apartment) -> Result<Change> {
        if self.find_apartment(&apartment.number).is_some() {
            return Ok(skip(Skip::ApartmentExists(apartment.number)));
        }
        info!(
            "event=apartment_add module=repo status=ok number={}",
            apartment.number
        );
        self.document.apartments.push(apartment);
        self.persist()
    }

    /// Deletes the apartment after clearing the reference of every resident
    /// that pointed at it.
    pub fn remove_apartment(&mut self, number: &str) -> Result<Change> {
        if self.find_apartment(number).is_none() {
            return Ok(skip(Skip::ApartmentNotFound(number.to_string())));
        }
        let mut released = 0usize;
        for resident in &mut self.document.residents {
            if resident.is_assigned_to(number) {
                resident.apartment = None;
                released += 1;
            }
        }
        self.document.apartments.retain(|a| a.number != number);
        info!(
            "event=apartment_remove module=repo status=ok number={} released={}",
            number, released
        );
        self.persist()
    }

    /// Links a resident to an apartment on both sides.
    ///
    /// A resident already linked elsewhere is moved: its snapshot leaves the
    /// previous apartment before joining the new one.
    pub fn assign(&mut self, tax_id: &str, number: &str) -> Result<Change> {
        let Some(resident_idx) = self.resident_index(tax_id) else {
            return Ok(skip(Skip::ResidentNotFound(tax_id.to_string())));
        };
        let Some(apartment_idx) = self.apartment_index(number) else {
            return Ok(skip(Skip::ApartmentNotFound(number.to_string())));
        };

        let previous = {
            let resident = &self.document.residents[resident_idx];
            if resident.is_assigned_to(number) {
                return Ok(skip(Skip::AlreadyAssigned {
                    tax_id: tax_id.to_string(),
                    number: number.to_string(),
                }));
            }
            resident.apartment.clone()
        };

        if let Some(previous) = previous.as_deref() {
            if let Some(idx) = self.apartment_index(previous) {
                self.document.apartments[idx].remove_snapshot(tax_id);
            }
        }

        let resident = &mut self.document.residents[resident_idx];
        resident.apartment = Some(number.to_string());
        let snapshot = resident.clone();
        self.document.apartments[apartment_idx].add_snapshot(&snapshot);

        info!(
            "event=resident_assign module=repo status=ok tax_id={} number={} previous={}",
            tax_id,
            number,
            previous.as_deref().unwrap_or("-")
        );
        self.persist()
    }

    /// Unlinks a resident from its apartment on both sides. A reference to an
    /// apartment that no longer exists is simply cleared.
    pub fn unassign(&mut self, tax_id: &str) -> Result<Change> {
        let Some(resident_idx) = self.resident_index(tax_id) else {
            return Ok(skip(Skip::ResidentNotFound(tax_id.to_string())));
        };
        let number = match self.document.residents[resident_idx].apartment.clone() {
            Some(number) if !number.is_empty() => number,
            _ => return Ok(skip(Skip::NotAssigned(tax_id.to_string()))),
        };

        if let Some(idx) = self.apartment_index(&number) {
            self.document.apartments[idx].remove_snapshot(tax_id);
        }
        self.document.residents[resident_idx].apartment = None;

        info!(
            "event=resident_unassign module=repo status=ok tax_id={} number={}",
            tax_id, number
        );
        self.persist()
    }

    /// Stable sort of apartments by numeric number. Saves only when the
    /// order actually changed; returns whether it did.
    pub fn sort_apartments_by_number(&mut self) -> Result<bool> {
        let before: Vec<String> = self.apartments().iter().map(|a| a.number.clone()).collect();
        self.document
            .apartments
            .sort_by(|a, b| cmp_numeric(Some(a.number.as_str()), Some(b.number.as_str())));
        let changed = self
            .apartments()
            .iter()
            .map(|a| &a.number)
            .ne(before.iter());
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    /// Stable sort of residents by numeric apartment, unassigned last. Saves
    /// only when the order actually changed; returns whether it did.
    pub fn sort_residents_by_apartment(&mut self) -> Result<bool> {
        let before: Vec<String> = self.residents().iter().map(|r| r.tax_id.clone()).collect();
        self.document
            .residents
            .sort_by(|a, b| cmp_numeric(a.apartment.as_deref(), b.apartment.as_deref()));
        let changed = self
            .residents()
            .iter()
            .map(|r| &r.tax_id)
            .ne(before.iter());
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    /// Swaps in a whole document (explicit reload). Not saved until the
    /// next mutation.
    pub fn replace_document(&mut self, document: Document) {
        info!(
            "event=document_replace module=repo status=ok residents={} apartments={}",
            document.residents.len(),
            document.apartments.len()
        );
        self.document = document;
    }

    fn resident_index(&self, tax_id: &str) -> Option<usize> {
        self.document.residents.iter().position(|r| r.tax_id == tax_id)
    }

    fn apartment_index(&self, number: &str) -> Option<usize> {
        self.document.apartments.iter().position(|a| a.number == number)
    }

    fn persist(&mut self) -> Result<Change> {
        if let Err(err) = self.store.save(&self.document) {
            error!("event=persist module=repo status=error error={}", err);
            return Err(err);
        }
        Ok(Change::Applied)
    }
}

fn skip(reason: Skip) -> Change {
    warn!("event=mutation module=repo status=skip reason=\"{}\"", reason);
    Change::Skipped(reason)
}

/// Orders by integer value; missing or non-numeric keys go last.
fn cmp_numeric(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a.and_then(numeric_key), b.and_then(numeric_key)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
