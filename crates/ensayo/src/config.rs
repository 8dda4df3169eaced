//! Suite configuration.
//!
//! [`SuiteConfig`] carries everything a run needs that is not code: the
//! base URL of the application under test and the wait behavior applied
//! to element resolution. The base URL comes from the `BASE_URL`
//! environment variable when present, so CI and local runs can point the
//! same suite at different deployments.

use crate::locator::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS};
use crate::result::{EnsayoError, EnsayoResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable that overrides the base URL
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Default application base URL
pub const DEFAULT_BASE_URL: &str = "https://www.techglobal-training.com/";

/// Configuration for a suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Base URL of the application under test
    pub base_url: String,
    /// Implicit wait for element resolution
    pub timeout: Duration,
    /// Polling interval while waiting
    pub poll_interval: Duration,
    /// Run the browser headless
    pub headless: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            headless: true,
        }
    }
}

impl SuiteConfig {
    /// Build a config, reading `BASE_URL` from the environment when set.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the resulting base URL is invalid.
    pub fn from_env() -> EnsayoResult<Self> {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config.base_url = url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the implicit wait
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the polling interval
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Check the config for obvious mistakes.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the base URL is empty or not http(s).
    pub fn validate(&self) -> EnsayoResult<()> {
        if self.base_url.is_empty() {
            return Err(EnsayoError::Config {
                message: "base URL must not be empty".to_string(),
            });
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(EnsayoError::Config {
                message: format!("base URL must be http(s): {}", self.base_url),
            });
        }
        Ok(())
    }

    /// Join a path onto the base URL.
    ///
    /// An empty path yields the base URL itself; otherwise exactly one
    /// slash separates the two parts.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return self.base_url.clone();
        }
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SuiteConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_millis(5000));
        assert!(config.headless);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_url_for_joins_with_single_slash() {
        let config = SuiteConfig::default().with_base_url("https://example.test/");
        assert_eq!(
            config.url_for("frontend/project-2"),
            "https://example.test/frontend/project-2"
        );
        assert_eq!(
            config.url_for("/frontend/project-2"),
            "https://example.test/frontend/project-2"
        );
    }

    #[test]
    fn test_url_for_empty_path_is_base() {
        let config = SuiteConfig::default().with_base_url("https://example.test/");
        assert_eq!(config.url_for(""), "https://example.test/");
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let config = SuiteConfig::default().with_base_url("");
        assert!(config.validate().is_err());

        let config = SuiteConfig::default().with_base_url("ftp://example.test");
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind(), "Config");
    }
}
