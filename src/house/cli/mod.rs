mod args;
mod menu;
mod prompt;
mod render;
mod shell;

use args::Cli;
use clap::Parser;
use directories::ProjectDirs;
use flexi_logger::LoggerHandle;
use house_registry::api::HouseApi;
use house_registry::config::HouseConfig;
use house_registry::error::Result;
use house_registry::logging::init_logging;
use house_registry::store::fs::FileStore;
use shell::Shell;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir);

    let config = HouseConfig::load(&data_dir).unwrap_or_else(|e| {
        eprintln!("Error: {}. Using default settings.", e);
        HouseConfig::default()
    });

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let _logger: Option<LoggerHandle> = match init_logging(level, &data_dir.join("logs")) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Error: {}. Continuing without a log file.", e);
            None
        }
    };

    let store = FileStore::new(config.data_path(&data_dir));
    let api = HouseApi::new(store, config.backup_path(&data_dir));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let use_color = stdout.is_terminal() && colored::control::SHOULD_COLORIZE.should_colorize();
    let mut shell = Shell::new(api, stdin.lock(), stdout.lock(), use_color);
    shell.run()
}

/// `--data-dir`, else the platform data directory, else the working
/// directory.
fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Some(dirs) = ProjectDirs::from("", "", "house") {
        return dirs.data_dir().to_path_buf();
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
