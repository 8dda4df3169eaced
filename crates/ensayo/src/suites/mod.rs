//! The TechGlobal Training suite.
//!
//! Each case is a free function returning a [`TestCase`]; [`all_cases`]
//! collects them in execution order. The module also ships a scripted
//! [`MockDriver`] shaped like the real application, used by the
//! integration tests and by mock-mode CLI runs.

pub mod home;
pub mod login;

use crate::case::TestCase;
use crate::config::SuiteConfig;
use crate::driver::DriverConfig;
use crate::fixture::Credentials;
use crate::mock::{ClickEffect, MockDriver, MockPage, ScriptedElement};
use crate::page::LoginPage;

/// Suite name used in reports
pub const SUITE_NAME: &str = "techglobal";

/// Expected home page title
pub const HOME_TITLE: &str = "TechGlobal Training | Home";

/// Fragment every application URL contains
pub const URL_FRAGMENT: &str = "techglobal-training";

/// Message shown after a successful login
pub const SUCCESS_TEXT: &str = "You are logged in";

/// Every case in the suite, in execution order.
#[must_use]
pub fn all_cases() -> Vec<TestCase> {
    vec![
        home::home_page_case(),
        login::valid_login_case(),
        login::invalid_login_case(),
    ]
}

/// Credentials the scripted application accepts.
#[must_use]
pub fn demo_credentials() -> Credentials {
    Credentials::new("TechGlobal", "Test1234")
}

/// A scripted driver shaped like the real application: a home page with
/// the expected title, and a login form that reveals the success message
/// only for [`demo_credentials`].
#[must_use]
pub fn scripted_driver(config: &SuiteConfig, driver_config: DriverConfig) -> MockDriver {
    let valid = demo_credentials();
    MockDriver::new(driver_config)
        .with_page(MockPage::new(config.url_for("")).with_title(HOME_TITLE))
        .with_page(
            MockPage::new(config.url_for(LoginPage::PATH))
                .with_title("TechGlobal Training | Project 2")
                .with_element(ScriptedElement::new("#username"))
                .with_element(ScriptedElement::new("#password"))
                .with_element(ScriptedElement::new("#login_btn").on_click(
                    ClickEffect::RevealIfValues {
                        conditions: vec![
                            ("#username".to_string(), valid.username),
                            ("#password".to_string(), valid.password),
                        ],
                        reveal: "#success_lgn".to_string(),
                    },
                ))
                .with_element(
                    ScriptedElement::new("#success_lgn")
                        .with_text(SUCCESS_TEXT)
                        .hidden(),
                )
                .with_element(
                    ScriptedElement::new("#logout")
                        .on_click(ClickEffect::Hide("#success_lgn".to_string())),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_cases_are_uniquely_named() {
        let cases = all_cases();
        assert_eq!(cases.len(), 3);
        let mut names: Vec<_> = cases.iter().map(TestCase::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_home_case_carries_regression_tag() {
        let cases = all_cases();
        let home = cases.iter().find(|c| c.has_tag("regression")).unwrap();
        assert!(home.name().to_lowercase().contains("home"));
    }
}
