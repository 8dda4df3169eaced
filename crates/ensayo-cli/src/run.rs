//! Handlers for the run and list subcommands

use crate::commands::RunArgs;
use crate::error::{CliError, CliResult};
use ensayo::driver::DriverConfig;
use ensayo::suites;
use ensayo::{BrowserDriver, CaseContext, Credentials, RunReport, Runner, SuiteConfig, TagFilter};
use std::sync::Arc;
use std::time::Duration;

/// Execute the suite per the run arguments and return the report.
///
/// # Errors
///
/// Returns an error for invalid arguments, a bad fixture, or a driver
/// that fails to start. Case failures are not errors; they land in the
/// report.
pub async fn run_suite(args: &RunArgs) -> CliResult<RunReport> {
    let mut config = SuiteConfig::default()
        .with_timeout(Duration::from_millis(args.timeout_ms))
        .with_headless(!args.headed);
    if let Some(url) = &args.base_url {
        config = config.with_base_url(url.clone());
    }
    config.validate()?;

    let cases = suites::all_cases();
    let filter = TagFilter::new(args.tags.clone());
    if !filter.is_empty() && !cases.iter().any(|c| filter.selects(c)) {
        return Err(CliError::invalid_argument(format!(
            "no case matches tags: {}",
            args.tags.join(", ")
        )));
    }

    // Mock runs default to the credentials the scripted app accepts, so
    // `run --mock` works out of the box
    let credentials = match &args.fixture {
        Some(path) => Some(Credentials::from_file(path)?),
        None if args.mock => Some(suites::demo_credentials()),
        None => None,
    };

    let driver = build_driver(args, &config).await?;
    let mut ctx = CaseContext::new(driver, config);
    if let Some(credentials) = credentials {
        ctx = ctx.with_credentials(credentials);
    }

    let report = Runner::new(suites::SUITE_NAME)
        .with_cases(cases)
        .with_filter(filter)
        .run(&ctx)
        .await;

    if let Some(path) = &args.report {
        report.write_to_file(path)?;
        tracing::info!(path = %path.display(), "report written");
    }

    Ok(report)
}

async fn build_driver(args: &RunArgs, config: &SuiteConfig) -> CliResult<Arc<dyn BrowserDriver>> {
    let mut driver_config = DriverConfig::default()
        .with_headless(config.headless)
        .with_implicit_wait(config.timeout)
        .with_poll_interval(config.poll_interval);
    if let Some(path) = &args.chromium_path {
        driver_config = driver_config.with_chromium_path(path.clone());
    }
    if args.no_sandbox {
        driver_config = driver_config.with_no_sandbox();
    }

    if args.mock {
        return Ok(Arc::new(suites::scripted_driver(config, driver_config)));
    }

    #[cfg(feature = "browser")]
    {
        Ok(Arc::new(ensayo::CdpDriver::launch(driver_config).await?))
    }

    #[cfg(not(feature = "browser"))]
    {
        let _ = driver_config;
        Err(CliError::config(
            "built without browser support; rerun with --mock or rebuild with the browser feature",
        ))
    }
}

/// Case names and tags for the list subcommand.
#[must_use]
pub fn case_list() -> Vec<(String, Vec<String>)> {
    suites::all_cases()
        .iter()
        .map(|c| (c.name().to_string(), c.tags().to_vec()))
        .collect()
}
