//! Home page case.

use super::{HOME_TITLE, URL_FRAGMENT};
use crate::assertion::{assert_contains, assert_text_eq};
use crate::case::{CaseContext, TestCase};
use crate::page::{HomePage, PageObject};

/// Open the landing page and check its title and URL.
#[must_use]
pub fn home_page_case() -> TestCase {
    TestCase::new(
        "Validate the TechGlobal home page",
        &["regression"],
        |ctx: CaseContext| async move {
            let page = HomePage::new(ctx.driver(), ctx.config().clone());
            page.open().await?;
            assert_text_eq("page title", &page.title().await?, HOME_TITLE)?;
            assert_contains("page url", &page.current_url().await?, URL_FRAGMENT)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SuiteConfig;
    use crate::driver::DriverConfig;
    use crate::suites::scripted_driver;
    use std::sync::Arc;
    use std::time::Duration;

    fn fast_config() -> SuiteConfig {
        SuiteConfig::default()
            .with_timeout(Duration::from_millis(200))
            .with_poll_interval(Duration::from_millis(10))
    }

    #[tokio::test]
    async fn test_home_case_passes_against_scripted_app() {
        let config = fast_config();
        let driver = Arc::new(scripted_driver(&config, DriverConfig::default()));
        let ctx = CaseContext::new(driver, config);
        home_page_case().run(ctx).await.unwrap();
    }

    #[tokio::test]
    async fn test_home_case_fails_on_wrong_title() {
        let config = fast_config().with_base_url("https://wrong.techglobal-training.dev/");
        // Scripted app served under a different base URL than the one the
        // case visits, so the title comes back empty
        let scripted_config = fast_config();
        let driver = Arc::new(scripted_driver(&scripted_config, DriverConfig::default()));
        let ctx = CaseContext::new(driver, config);
        let err = home_page_case().run(ctx).await.unwrap_err();
        assert_eq!(err.kind(), "AssertionFailed");
    }
}
