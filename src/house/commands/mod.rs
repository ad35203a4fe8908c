//! # Command Layer
//!
//! Business rules between raw user input and the repository. Each command:
//!
//! 1. validates the raw strings it was handed,
//! 2. checks domain preconditions (keys exist, keys are unique),
//! 3. delegates the mutation to [`HouseRepository`](crate::repository::HouseRepository),
//! 4. re-sorts where the operation calls for it,
//! 5. returns a [`CmdResult`] with messages and, usually, a report to show.
//!
//! A rejected input produces an `Error` message and touches nothing. A
//! repository no-op produces a `Warning`. Only a failed save is returned as
//! `Err`.

use crate::repository::{Change, HouseRepository};
use crate::store::DocumentStore;

pub mod apartments;
pub mod assignment;
pub mod backup;
pub mod reports;
pub mod residents;

pub use reports::{ApartmentGroup, ApartmentSummary, Report, ReportKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub report: Option<Report>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_report(mut self, report: Report) -> Self {
        self.report = Some(report);
        self
    }

    /// A result carrying a single error message and nothing else.
    pub fn rejected(content: impl Into<String>) -> Self {
        let mut result = Self::default();
        result.add_message(CmdMessage::error(content));
        result
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Error)
    }

    /// Records the outcome of a repository mutation: `success` when it was
    /// applied, the skip reason as a warning otherwise.
    pub(crate) fn record(&mut self, change: Change, success: impl Into<String>) {
        match change {
            Change::Applied => self.add_message(CmdMessage::success(success)),
            Change::Skipped(reason) => self.add_message(CmdMessage::warning(reason.to_string())),
        }
    }
}

/// Attaches the report a mutation should be followed by.
pub(crate) fn finish<S: DocumentStore>(
    repo: &HouseRepository<S>,
    result: CmdResult,
    kind: ReportKind,
) -> CmdResult {
    result.with_report(reports::build(repo, kind))
}
