//! Fixture data for test cases.
//!
//! Fixtures keep test data out of test code. The only fixture the suite
//! ships is [`Credentials`], loaded from a small JSON document:
//!
//! ```json
//! { "username": "TechGlobal", "password": "Test1234" }
//! ```

use crate::result::{EnsayoError, EnsayoResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Login credentials for the application under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// Create credentials from parts
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load credentials from a JSON fixture file.
    ///
    /// # Errors
    ///
    /// Returns `Fixture` if the file cannot be read or parsed, or if
    /// either field is empty.
    pub fn from_file(path: impl AsRef<Path>) -> EnsayoResult<Self> {
        let credentials: Self = load_fixture(path)?;
        if credentials.username.is_empty() || credentials.password.is_empty() {
            return Err(EnsayoError::Fixture {
                message: "credentials must have a non-empty username and password".to_string(),
            });
        }
        Ok(credentials)
    }
}

/// Load any JSON fixture into a deserializable type.
///
/// # Errors
///
/// Returns `Fixture` if the file cannot be read or is not valid JSON for
/// the target type.
pub fn load_fixture<T: DeserializeOwned>(path: impl AsRef<Path>) -> EnsayoResult<T> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| EnsayoError::Fixture {
        message: format!("cannot read {}: {e}", path.display()),
    })?;
    serde_json::from_str(&raw).map_err(|e| EnsayoError::Fixture {
        message: format!("cannot parse {}: {e}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_credentials() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "username": "TechGlobal", "password": "Test1234" }}"#
        )
        .unwrap();

        let credentials = Credentials::from_file(file.path()).unwrap();
        assert_eq!(credentials.username, "TechGlobal");
        assert_eq!(credentials.password, "Test1234");
    }

    #[test]
    fn test_missing_file_is_fixture_error() {
        let err = Credentials::from_file("/nonexistent/user.json").unwrap_err();
        assert_eq!(err.kind(), "Fixture");
    }

    #[test]
    fn test_malformed_json_is_fixture_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = Credentials::from_file(file.path()).unwrap_err();
        assert_eq!(err.kind(), "Fixture");
    }

    #[test]
    fn test_empty_fields_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "username": "", "password": "x" }}"#).unwrap();
        let err = Credentials::from_file(file.path()).unwrap_err();
        assert_eq!(err.kind(), "Fixture");
    }
}
