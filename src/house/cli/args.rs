use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "house", bin_name = "house", version)]
#[command(about = "Console registry of residents and apartments", long_about = None)]
pub struct Cli {
    /// Directory holding the data files, config.json and logs/
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log at debug level regardless of config
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["house"]).unwrap();
        assert!(cli.data_dir.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_data_dir_and_verbose() {
        let cli = Cli::try_parse_from(["house", "--data-dir", "/tmp/house", "-v"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/house")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["house", "list"]).is_err());
    }
}
