//! Manual copies of the whole document to and from a second file.
//!
//! Loading replaces what is in memory but does not write the main file; the
//! next mutation does.

use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repository::HouseRepository;
use crate::store::fs::FileStore;
use crate::store::DocumentStore;
use log::info;
use std::path::Path;

pub fn save<S: DocumentStore>(repo: &HouseRepository<S>, path: &Path) -> Result<CmdResult> {
    FileStore::new(path).save(repo.document())?;
    info!(
        "event=backup_save module=commands status=ok path={}",
        path.display()
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Data saved to {}.",
        path.display()
    )));
    Ok(result)
}

pub fn load<S: DocumentStore>(repo: &mut HouseRepository<S>, path: &Path) -> Result<CmdResult> {
    let document = FileStore::new(path).load();
    let empty = document.is_empty();
    repo.replace_document(document);
    info!(
        "event=backup_load module=commands status=ok path={} empty={}",
        path.display(),
        empty
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Data loaded from {}.",
        path.display()
    )));
    if empty {
        result.add_message(CmdMessage::info("The loaded registry is empty."));
    }
    Ok(result)
}
