//! Test cases and their lifecycle.
//!
//! A [`TestCase`] is a named, tagged async body over a [`CaseContext`].
//! The body runs fail-fast: the first error aborts the case and becomes
//! its failure message. Case status follows a strict state machine,
//! `Pending -> Running -> {Passed, Failed}` or `Pending -> Skipped`,
//! enforced by [`TestStatus::can_transition_to`].

use crate::config::SuiteConfig;
use crate::driver::BrowserDriver;
use crate::fixture::Credentials;
use crate::result::{EnsayoError, EnsayoResult};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;

/// Lifecycle state of a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    /// Not yet started
    Pending,
    /// Currently executing
    Running,
    /// Completed with every step and assertion succeeding
    Passed,
    /// Aborted by an error
    Failed,
    /// Deselected before starting; never executed
    Skipped,
}

impl TestStatus {
    /// Whether the state machine permits this transition.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Running | Self::Skipped)
                | (Self::Running, Self::Passed | Self::Failed)
        )
    }

    /// Whether the status is final.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Passed | Self::Failed | Self::Skipped)
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
        };
        f.write_str(name)
    }
}

/// Everything a case body receives: the driver seam, the suite config,
/// and whatever fixture data the run was given. Contexts are cheap to
/// clone; each case gets its own copy.
#[derive(Clone)]
pub struct CaseContext {
    driver: Arc<dyn BrowserDriver>,
    config: SuiteConfig,
    credentials: Option<Credentials>,
}

impl CaseContext {
    /// Create a context over a driver and config
    #[must_use]
    pub fn new(driver: Arc<dyn BrowserDriver>, config: SuiteConfig) -> Self {
        Self {
            driver,
            config,
            credentials: None,
        }
    }

    /// Attach login credentials
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// The driver seam
    #[must_use]
    pub fn driver(&self) -> Arc<dyn BrowserDriver> {
        Arc::clone(&self.driver)
    }

    /// The suite configuration
    #[must_use]
    pub const fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Credentials for this run.
    ///
    /// # Errors
    ///
    /// Returns `Fixture` if the run was started without credentials.
    pub fn credentials(&self) -> EnsayoResult<Credentials> {
        self.credentials
            .clone()
            .ok_or_else(|| EnsayoError::Fixture {
                message: "no credentials supplied for this run".to_string(),
            })
    }

    /// Navigate to a path under the base URL.
    ///
    /// # Errors
    ///
    /// Returns `NavigationFailed` if the browser cannot reach the URL.
    pub async fn visit(&self, path: &str) -> EnsayoResult<()> {
        self.driver.navigate(&self.config.url_for(path)).await
    }

    /// Title of the current page.
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn title(&self) -> EnsayoResult<String> {
        self.driver.title().await
    }

    /// URL of the current page.
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn current_url(&self) -> EnsayoResult<String> {
        self.driver.current_url().await
    }
}

impl std::fmt::Debug for CaseContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseContext")
            .field("config", &self.config)
            .field("has_credentials", &self.credentials.is_some())
            .finish_non_exhaustive()
    }
}

type CaseBody = Arc<dyn Fn(CaseContext) -> BoxFuture<'static, EnsayoResult<()>> + Send + Sync>;

/// A named, tagged test case.
#[derive(Clone)]
pub struct TestCase {
    name: String,
    tags: Vec<String>,
    body: CaseBody,
}

impl TestCase {
    /// Create a case from a name, tags and an async body.
    pub fn new<F, Fut>(name: impl Into<String>, tags: &[&str], body: F) -> Self
    where
        F: Fn(CaseContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = EnsayoResult<()>> + Send + 'static,
    {
        Self {
            name: name.into(),
            tags: tags.iter().map(|t| t.trim_start_matches('@').to_string()).collect(),
            body: Arc::new(move |ctx| Box::pin(body(ctx))),
        }
    }

    /// Case name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case tags, stored without the `@` prefix
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether the case carries a tag. A leading `@` on the query is
    /// ignored.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim_start_matches('@');
        self.tags.iter().any(|t| t == tag)
    }

    /// Execute the case body against a context.
    ///
    /// # Errors
    ///
    /// Returns the first error the body hit.
    pub async fn run(&self, ctx: CaseContext) -> EnsayoResult<()> {
        (self.body)(ctx).await
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::DriverConfig;
    use crate::mock::MockDriver;

    fn test_context() -> CaseContext {
        CaseContext::new(
            Arc::new(MockDriver::new(DriverConfig::default())),
            SuiteConfig::default().with_base_url("https://app.test/"),
        )
    }

    mod status_tests {
        use super::*;

        #[test]
        fn test_legal_transitions() {
            assert!(TestStatus::Pending.can_transition_to(TestStatus::Running));
            assert!(TestStatus::Pending.can_transition_to(TestStatus::Skipped));
            assert!(TestStatus::Running.can_transition_to(TestStatus::Passed));
            assert!(TestStatus::Running.can_transition_to(TestStatus::Failed));
        }

        #[test]
        fn test_illegal_transitions() {
            assert!(!TestStatus::Pending.can_transition_to(TestStatus::Passed));
            assert!(!TestStatus::Running.can_transition_to(TestStatus::Skipped));
            assert!(!TestStatus::Passed.can_transition_to(TestStatus::Running));
            assert!(!TestStatus::Skipped.can_transition_to(TestStatus::Running));
        }

        #[test]
        fn test_terminal_states() {
            assert!(TestStatus::Passed.is_terminal());
            assert!(TestStatus::Failed.is_terminal());
            assert!(TestStatus::Skipped.is_terminal());
            assert!(!TestStatus::Pending.is_terminal());
            assert!(!TestStatus::Running.is_terminal());
        }
    }

    mod case_tests {
        use super::*;

        #[test]
        fn test_tags_stored_without_at_prefix() {
            let case = TestCase::new("home", &["@regression", "smoke"], |_ctx| async { Ok(()) });
            assert_eq!(case.tags(), ["regression", "smoke"]);
            assert!(case.has_tag("regression"));
            assert!(case.has_tag("@smoke"));
            assert!(!case.has_tag("nightly"));
        }

        #[tokio::test]
        async fn test_body_runs_against_context() {
            let case = TestCase::new("url join", &[], |ctx: CaseContext| async move {
                ctx.visit("frontend/project-2").await?;
                let url = ctx.current_url().await?;
                crate::assertion::assert_contains("url", &url, "frontend/project-2")
            });
            case.run(test_context()).await.unwrap();
        }

        #[tokio::test]
        async fn test_body_error_propagates() {
            let case = TestCase::new("always fails", &[], |_ctx| async {
                Err(EnsayoError::AssertionFailed {
                    message: "boom".to_string(),
                })
            });
            let err = case.run(test_context()).await.unwrap_err();
            assert_eq!(err.kind(), "AssertionFailed");
        }

        #[test]
        fn test_missing_credentials_is_fixture_error() {
            let err = test_context().credentials().unwrap_err();
            assert_eq!(err.kind(), "Fixture");
        }
    }
}
