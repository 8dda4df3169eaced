//! Ensayador binary entry point

use clap::Parser;
use ensayador::{output, run, Cli, CliResult, Commands};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match dispatch(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the invocation succeeded outcome-wise: for `run`,
/// that means every selected case passed.
fn dispatch(cli: Cli) -> CliResult<bool> {
    match cli.command {
        Commands::Run(args) => {
            let runtime = tokio::runtime::Runtime::new()?;
            let report = runtime.block_on(run::run_suite(&args))?;
            output::print_report(&report, cli.quiet);
            Ok(report.all_passed())
        }
        Commands::List => {
            output::print_case_list(&run::case_list());
            Ok(true)
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_directive = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
