use super::DocumentStore;
use crate::error::{HouseError, Result};
use crate::model::Document;
use log::{debug, error, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::PathBuf;

const INDENT: &[u8] = b"    ";

/// JSON file backed store. One file holds the whole document.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Strict read: surfaces missing files and malformed JSON as errors.
    pub fn try_load(&self) -> Result<Document> {
        let content = fs::read_to_string(&self.path).map_err(HouseError::Io)?;
        let document: Document =
            serde_json::from_str(&content).map_err(HouseError::Serialization)?;
        Ok(document)
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(HouseError::Io)?;
            }
        }
        Ok(())
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Document {
        match self.try_load() {
            Ok(document) => {
                debug!(
                    "event=document_load module=store status=ok path={} residents={} apartments={}",
                    self.path.display(),
                    document.residents.len(),
                    document.apartments.len()
                );
                document
            }
            Err(err) => {
                warn!(
                    "event=document_load module=store status=fallback path={} error={}",
                    self.path.display(),
                    err
                );
                Document::default()
            }
        }
    }

    fn save(&mut self, document: &Document) -> Result<()> {
        let written = self.ensure_parent().and_then(|()| {
            let content = to_pretty_json(document)?;
            fs::write(&self.path, content).map_err(HouseError::Io)
        });

        match &written {
            Ok(()) => debug!(
                "event=document_save module=store status=ok path={}",
                self.path.display()
            ),
            Err(err) => error!(
                "event=document_save module=store status=error path={} error={}",
                self.path.display(),
                err
            ),
        }
        written
    }
}

/// Four-space indented JSON with non-ASCII text written as-is.
fn to_pretty_json(document: &Document) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    document
        .serialize(&mut serializer)
        .map_err(HouseError::Serialization)?;
    Ok(buf)
}
