//! # Storage Layer
//!
//! The registry persists one [`Document`] as a whole. The [`DocumentStore`]
//! trait abstracts where that document lives so the repository can run
//! against a real file or against memory in tests.
//!
//! ## Contract
//!
//! - `load` never fails. A missing or unreadable source yields an empty
//!   document and a logged warning; the registry starts fresh instead of
//!   refusing to run.
//! - `save` overwrites the whole document. There is no incremental write and
//!   no rollback: if it fails, the caller's in-memory state is already ahead
//!   of the stored copy.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single pretty-printed JSON file.
//! - [`memory::InMemoryStore`]: keeps the last saved copy and counts saves.
//!
//! ## Storage Layout
//!
//! ```text
//! <data-dir>/
//! ├── config.json          # Optional configuration
//! ├── house_data1.json     # Main document, rewritten after every change
//! ├── house_data.json      # Manual backup (menu save/load)
//! └── logs/house.log       # Rotating log
//! ```

use crate::error::Result;
use crate::model::Document;

pub mod fs;
pub mod memory;

/// Abstract interface for document persistence.
pub trait DocumentStore {
    /// Read the stored document, substituting an empty one on any failure.
    fn load(&self) -> Document;

    /// Replace the stored document with `document`.
    fn save(&mut self, document: &Document) -> Result<()>;
}
