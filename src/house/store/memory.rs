use super::DocumentStore;
use crate::error::{HouseError, Result};
use crate::model::Document;

/// In-memory store for exercising repository logic without a filesystem.
///
/// Keeps the last saved document and counts how many saves happened, so
/// tests can assert that a no-op really skipped persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Option<Document>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose initial `load` returns `document`.
    pub fn with_document(document: Document) -> Self {
        Self {
            saved: Some(document),
            ..Self::default()
        }
    }

    /// Makes every subsequent save fail with an I/O error.
    pub fn failing(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn saved(&self) -> Option<&Document> {
        self.saved.as_ref()
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self) -> Document {
        self.saved.clone().unwrap_or_default()
    }

    fn save(&mut self, document: &Document) -> Result<()> {
        if self.fail_saves {
            return Err(HouseError::Io(std::io::Error::other(
                "in-memory store configured to fail",
            )));
        }
        self.saved = Some(document.clone());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Apartment, Resident};
    use crate::repository::HouseRepository;

    /// Builds a repository over an in-memory store, seeding the document
    /// directly so the seed itself does not count as a save.
    #[derive(Default)]
    pub struct RegistryFixture {
        document: Document,
    }

    impl RegistryFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_apartment(mut self, number: &str) -> Self {
            self.document
                .apartments
                .push(Apartment::new(number, "1", "9", "3", "2"));
            self
        }

        pub fn with_resident(mut self, name: &str, tax_id: &str) -> Self {
            self.document.residents.push(Resident::new(
                name,
                tax_id,
                "1990-01-01",
                "050-123-45-67",
                "resident@example.com",
                "",
            ));
            self
        }

        pub fn build(self) -> HouseRepository<InMemoryStore> {
            HouseRepository::open(InMemoryStore::with_document(self.document))
        }
    }
}
