//! End-to-end runs of the TechGlobal suite against the scripted driver.

use ensayo::driver::DriverConfig;
use ensayo::suites::{self, scripted_driver};
use ensayo::{CaseContext, Credentials, Runner, SuiteConfig, TagFilter, TestStatus};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn fast_config() -> SuiteConfig {
    SuiteConfig::default()
        .with_timeout(Duration::from_millis(200))
        .with_poll_interval(Duration::from_millis(10))
}

fn scripted_context(config: &SuiteConfig) -> CaseContext {
    let driver = Arc::new(scripted_driver(config, DriverConfig::default()));
    CaseContext::new(driver, config.clone())
}

#[tokio::test]
async fn full_suite_passes_with_valid_credentials() {
    let config = fast_config();
    let ctx = scripted_context(&config).with_credentials(suites::demo_credentials());

    let report = Runner::new(suites::SUITE_NAME)
        .with_cases(suites::all_cases())
        .run(&ctx)
        .await;

    assert!(report.all_passed());
    assert_eq!(report.count(TestStatus::Passed), 3);
    assert_eq!(report.count(TestStatus::Skipped), 0);
}

#[tokio::test]
async fn wrong_credentials_fail_only_the_valid_login_case() {
    let config = fast_config();
    let ctx = scripted_context(&config).with_credentials(Credentials::new("Nobody", "Nothing1"));

    let report = Runner::new(suites::SUITE_NAME)
        .with_cases(suites::all_cases())
        .run(&ctx)
        .await;

    assert!(!report.all_passed());
    assert_eq!(report.count(TestStatus::Failed), 1);
    assert_eq!(report.count(TestStatus::Passed), 2);

    let failed = report
        .cases
        .iter()
        .find(|c| c.status == TestStatus::Failed)
        .unwrap();
    assert_eq!(failed.name, "Validate login with valid credentials");
    assert!(failed
        .failure_message
        .as_deref()
        .unwrap()
        .starts_with("AssertionFailed"));
}

#[tokio::test]
async fn regression_filter_skips_login_cases() {
    let config = fast_config();
    let ctx = scripted_context(&config);

    let report = Runner::new(suites::SUITE_NAME)
        .with_cases(suites::all_cases())
        .with_filter(TagFilter::new(["@regression"]))
        .run(&ctx)
        .await;

    assert!(report.all_passed());
    assert_eq!(report.count(TestStatus::Passed), 1);
    assert_eq!(report.count(TestStatus::Skipped), 2);
}

#[tokio::test]
async fn missing_element_fails_within_the_wait_window() {
    let config = fast_config().with_base_url("https://nowhere.techglobal-training.dev/");
    // No pages scripted for that base URL, so every selector misses
    let ctx = scripted_context(&fast_config());
    let ctx = CaseContext::new(ctx.driver(), config).with_credentials(suites::demo_credentials());

    let start = Instant::now();
    let report = Runner::new(suites::SUITE_NAME)
        .with_cases(vec![ensayo::suites::login::valid_login_case()])
        .run(&ctx)
        .await;

    assert_eq!(report.count(TestStatus::Failed), 1);
    assert!(start.elapsed() < Duration::from_secs(2));
    assert!(report.cases[0]
        .failure_message
        .as_deref()
        .unwrap()
        .starts_with("ElementNotFound"));
}

#[tokio::test]
async fn runs_are_isolated_and_repeatable() {
    let config = fast_config();
    let ctx = scripted_context(&config).with_credentials(suites::demo_credentials());
    let runner = Runner::new(suites::SUITE_NAME).with_cases(suites::all_cases());

    // The invalid-credentials case runs after the valid one against the
    // same driver, so a leaked session would flip its outcome. Running
    // the suite twice over one driver checks the same property.
    let first = runner.run(&ctx).await;
    let second = runner.run(&ctx).await;
    assert!(first.all_passed());
    assert!(second.all_passed());
}

#[tokio::test]
async fn report_serializes_with_case_details() {
    let config = fast_config();
    let ctx = scripted_context(&config).with_credentials(suites::demo_credentials());

    let report = Runner::new(suites::SUITE_NAME)
        .with_cases(suites::all_cases())
        .run(&ctx)
        .await;

    let json = report.to_json().unwrap();
    assert!(json.contains("\"suite\": \"techglobal\""));
    assert!(json.contains("Validate the TechGlobal home page"));
    assert!(json.contains("\"regression\""));
}
