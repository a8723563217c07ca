//! CLI argument parsing for teamdraw
//!
//! Global flags: --root, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod format;
pub mod paths;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use teamdraw_core::format::OutputFormat;

/// Teamdraw - draw balanced event teams
#[derive(Parser, Debug)]
#[command(name = "teamdraw")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory that relative file paths resolve against
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Configuration file (default: teamdraw.toml in the root directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: human, json, or records
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug detail for each phase
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, trace, teamdraw_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw teams and write the teams file and updated grading sheet (default)
    Draw(DrawArgs),

    /// Show the effective configuration
    Config,
}

/// Per-run overrides for the draw command
#[derive(Args, Debug, Clone, Default)]
pub struct DrawArgs {
    /// Registration export to read
    #[arg(long)]
    pub registrations: Option<PathBuf>,

    /// Grading sheet to read
    #[arg(long)]
    pub grading: Option<PathBuf>,

    /// Where to write the teams
    #[arg(long)]
    pub teams_out: Option<PathBuf>,

    /// Where to write the updated grading sheet (default: overwrite --grading)
    #[arg(long)]
    pub grading_out: Option<PathBuf>,

    /// Draw and report without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["teamdraw"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Human);
    }

    #[test]
    fn test_draw_overrides_parse() {
        let cli = Cli::try_parse_from([
            "teamdraw",
            "draw",
            "--registrations",
            "in.csv",
            "--teams-out",
            "out.csv",
            "--dry-run",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Draw(args)) => {
                assert_eq!(args.registrations, Some(PathBuf::from("in.csv")));
                assert_eq!(args.teams_out, Some(PathBuf::from("out.csv")));
                assert!(args.grading.is_none());
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
