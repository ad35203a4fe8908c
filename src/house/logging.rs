//! File logging for the shell.
//!
//! The library only emits `log` records. The binary starts a `flexi_logger`
//! backend writing to `<data-dir>/logs/house.log`, rotated by size. Lines
//! follow `event=<name> module=<module> status=<ok|skip|error> key=value`.
//!
//! Logging never blocks the registry: if the backend cannot start, the
//! caller reports the error and carries on without a log file.

use crate::error::{HouseError, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use std::fs;
use std::path::Path;

const LOG_FILE_BASENAME: &str = "house";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

/// Starts the file logger. Keep the returned handle alive for as long as
/// records should be written; dropping it flushes and stops the backend.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<LoggerHandle> {
    let level = normalize_level(level)?;

    fs::create_dir_all(log_dir).map_err(|err| {
        HouseError::Logging(format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        ))
    })?;

    let logger = Logger::try_with_str(level)
        .map_err(|err| HouseError::Logging(format!("invalid log level `{level}`: {err}")))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| HouseError::Logging(format!("failed to start logger: {err}")))?;

    info!(
        "event=app_start module=logging status=ok platform={} version={} level={} log_dir={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
        level,
        log_dir.display()
    );
    Ok(logger)
}

/// Maps user-facing level names onto the ones `flexi_logger` accepts.
pub fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(HouseError::Logging(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_level_accepts_known_levels() {
        assert_eq!(normalize_level("info").unwrap(), "info");
        assert_eq!(normalize_level(" DEBUG ").unwrap(), "debug");
        assert_eq!(normalize_level("warning").unwrap(), "warn");
        assert_eq!(normalize_level("Error").unwrap(), "error");
    }

    #[test]
    fn normalize_level_rejects_unknown() {
        let err = normalize_level("loud").unwrap_err();
        assert!(matches!(err, HouseError::Logging(_)));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn init_rejects_bad_level_before_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");
        assert!(init_logging("loud", &log_dir).is_err());
        assert!(!log_dir.exists());
    }
}
