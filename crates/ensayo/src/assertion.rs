//! Assertion helpers for test cases.
//!
//! Each helper returns `AssertionFailed` with an expected/actual message
//! instead of panicking, so a failed check flows through the same error
//! path as a driver failure and the runner can report it uniformly.

use crate::result::{EnsayoError, EnsayoResult};

/// Assert two strings are equal.
///
/// # Errors
///
/// Returns `AssertionFailed` naming `what` with expected and actual.
pub fn assert_text_eq(what: &str, actual: &str, expected: &str) -> EnsayoResult<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(EnsayoError::AssertionFailed {
            message: format!("{what}: expected {expected:?}, got {actual:?}"),
        })
    }
}

/// Assert a string contains a substring.
///
/// # Errors
///
/// Returns `AssertionFailed` naming `what` with the missing needle.
pub fn assert_contains(what: &str, haystack: &str, needle: &str) -> EnsayoResult<()> {
    if haystack.contains(needle) {
        Ok(())
    } else {
        Err(EnsayoError::AssertionFailed {
            message: format!("{what}: expected {haystack:?} to contain {needle:?}"),
        })
    }
}

/// Assert an element visibility check came back true.
///
/// # Errors
///
/// Returns `AssertionFailed` naming the selector.
pub fn assert_visible(selector: &str, visible: bool) -> EnsayoResult<()> {
    if visible {
        Ok(())
    } else {
        Err(EnsayoError::AssertionFailed {
            message: format!("expected {selector} to be visible"),
        })
    }
}

/// Assert an element visibility check came back false.
///
/// # Errors
///
/// Returns `AssertionFailed` naming the selector.
pub fn assert_not_visible(selector: &str, visible: bool) -> EnsayoResult<()> {
    if visible {
        Err(EnsayoError::AssertionFailed {
            message: format!("expected {selector} to not be visible"),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_eq() {
        assert!(assert_text_eq("title", "Home", "Home").is_ok());
        let err = assert_text_eq("title", "Home", "Login").unwrap_err();
        assert_eq!(err.kind(), "AssertionFailed");
        assert!(err.to_string().contains("title"));
        assert!(err.to_string().contains("Login"));
    }

    #[test]
    fn test_contains() {
        assert!(assert_contains("url", "https://a.test/home", "a.test").is_ok());
        let err = assert_contains("url", "https://a.test/home", "b.test").unwrap_err();
        assert_eq!(err.kind(), "AssertionFailed");
    }

    #[test]
    fn test_visibility() {
        assert!(assert_visible("#success", true).is_ok());
        assert!(assert_visible("#success", false).is_err());
        assert!(assert_not_visible("#success", false).is_ok());
        assert!(assert_not_visible("#success", true).is_err());
    }
}
