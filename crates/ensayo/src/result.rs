//! Result and error types for Ensayo.

use thiserror::Error;

/// Result type for Ensayo operations
pub type EnsayoResult<T> = Result<T, EnsayoError>;

/// Errors that can occur while driving or asserting against the browser.
///
/// `ElementNotFound`, `ActionFailed` and `AssertionFailed` are the three
/// kinds a test case can trigger; all of them propagate unrecovered up to
/// the runner, which marks the case failed and skips its remaining steps.
#[derive(Debug, Error)]
pub enum EnsayoError {
    /// Locator did not resolve within the implicit wait window
    #[error("element not found: {selector} (waited {timeout_ms}ms)")]
    ElementNotFound {
        /// Selector that failed to resolve
        selector: String,
        /// Wait window that elapsed
        timeout_ms: u64,
    },

    /// Element resolved but could not be interacted with
    #[error("action failed on {selector}: {message}")]
    ActionFailed {
        /// Selector of the unusable element
        selector: String,
        /// What went wrong
        message: String,
    },

    /// Observed value did not match the expected literal
    #[error("assertion failed: {message}")]
    AssertionFailed {
        /// Expected vs actual description
        message: String,
    },

    /// Browser executable not found or failed to start
    #[error("failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("navigation to {url} failed: {message}")]
    NavigationFailed {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// Fixture data missing or malformed
    #[error("fixture error: {message}")]
    Fixture {
        /// Error message
        message: String,
    },

    /// Invalid configuration
    #[error("config error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EnsayoError {
    /// Short kind name used in failure reports.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ElementNotFound { .. } => "ElementNotFound",
            Self::ActionFailed { .. } => "ActionFailed",
            Self::AssertionFailed { .. } => "AssertionFailed",
            Self::BrowserLaunch { .. } => "BrowserLaunch",
            Self::NavigationFailed { .. } => "NavigationFailed",
            Self::Fixture { .. } => "Fixture",
            Self::Config { .. } => "Config",
            Self::Io(_) => "Io",
            Self::Json(_) => "Json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_not_found_display() {
        let err = EnsayoError::ElementNotFound {
            selector: "#login_btn".to_string(),
            timeout_ms: 5000,
        };
        let msg = err.to_string();
        assert!(msg.contains("#login_btn"));
        assert!(msg.contains("5000ms"));
    }

    #[test]
    fn test_kind_names() {
        let err = EnsayoError::AssertionFailed {
            message: "title mismatch".to_string(),
        };
        assert_eq!(err.kind(), "AssertionFailed");

        let err = EnsayoError::ActionFailed {
            selector: "#username".to_string(),
            message: "disabled".to_string(),
        };
        assert_eq!(err.kind(), "ActionFailed");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: EnsayoError = io.into();
        assert_eq!(err.kind(), "Io");
    }
}
