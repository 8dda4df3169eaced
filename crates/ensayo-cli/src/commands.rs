//! CLI command definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ensayador: CLI for Ensayo - browser test suite for TechGlobal Training
#[derive(Parser, Debug)]
#[command(name = "ensayador")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the suite
    Run(RunArgs),

    /// List the suite's cases and their tags
    List,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Only run cases carrying one of these tags (e.g. --tag regression)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Base URL of the application under test
    #[arg(long, env = "BASE_URL")]
    pub base_url: Option<String>,

    /// JSON fixture file with login credentials
    #[arg(short, long)]
    pub fixture: Option<PathBuf>,

    /// Write a JSON report to this path
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Run against the scripted in-memory application instead of a browser
    #[arg(long)]
    pub mock: bool,

    /// Show the browser window instead of running headless
    #[arg(long)]
    pub headed: bool,

    /// Implicit wait for element resolution, in milliseconds
    #[arg(long, default_value = "5000")]
    pub timeout_ms: u64,

    /// Path to the chromium executable (default: auto-detect)
    #[arg(long)]
    pub chromium_path: Option<String>,

    /// Disable the browser sandbox (for containers/CI)
    #[arg(long)]
    pub no_sandbox: bool,
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
    fn test_run_args_parse() {
        let cli = Cli::parse_from([
            "ensayador",
            "run",
            "--mock",
            "--tag",
            "regression",
            "--timeout-ms",
            "250",
        ]);
        match cli.command {
            Commands::Run(args) => {
                assert!(args.mock);
                assert_eq!(args.tags, ["regression"]);
                assert_eq!(args.timeout_ms, 250);
                assert!(!args.headed);
            }
            Commands::List => panic!("expected run"),
        }
    }
}
