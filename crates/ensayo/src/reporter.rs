//! Run reports.
//!
//! The runner produces one [`CaseReport`] per case and wraps them in a
//! [`RunReport`], which serializes to JSON for machine consumption and
//! renders a plain-text summary for terminals. Styling is left to
//! callers.

use crate::case::TestStatus;
use crate::result::EnsayoResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

/// Outcome of a single case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    /// Case name
    pub name: String,
    /// Case tags, without the `@` prefix
    pub tags: Vec<String>,
    /// Terminal status
    pub status: TestStatus,
    /// Wall-clock execution time; zero for skipped cases
    pub duration_ms: u64,
    /// Failure description, present only for failed cases
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Suite name
    pub suite: String,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// One report per case, in execution order
    pub cases: Vec<CaseReport>,
}

impl RunReport {
    /// Create an empty report starting now
    #[must_use]
    pub fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            started_at: Utc::now(),
            cases: Vec::new(),
        }
    }

    /// Append a case outcome
    pub fn push(&mut self, case: CaseReport) {
        self.cases.push(case);
    }

    /// Whether no case failed. Skipped cases do not count against the
    /// run.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(|c| c.status != TestStatus::Failed)
    }

    /// Number of cases with the given status
    #[must_use]
    pub fn count(&self, status: TestStatus) -> usize {
        self.cases.iter().filter(|c| c.status == status).count()
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns `Json` on serialization failure.
    pub fn to_json(&self) -> EnsayoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON report to a file.
    ///
    /// # Errors
    ///
    /// Returns `Json` or `Io`.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> EnsayoResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Plain-text summary, one line per case plus totals.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "suite: {}", self.suite);
        for case in &self.cases {
            let _ = write!(out, "  [{}] {} ({}ms)", case.status, case.name, case.duration_ms);
            if let Some(message) = &case.failure_message {
                let _ = write!(out, "\n      {message}");
            }
            let _ = writeln!(out);
        }
        let _ = writeln!(
            out,
            "{} passed, {} failed, {} skipped",
            self.count(TestStatus::Passed),
            self.count(TestStatus::Failed),
            self.count(TestStatus::Skipped)
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> RunReport {
        let mut report = RunReport::new("techglobal");
        report.push(CaseReport {
            name: "home".to_string(),
            tags: vec!["regression".to_string()],
            status: TestStatus::Passed,
            duration_ms: 12,
            failure_message: None,
        });
        report.push(CaseReport {
            name: "login".to_string(),
            tags: vec!["smoke".to_string()],
            status: TestStatus::Failed,
            duration_ms: 34,
            failure_message: Some("AssertionFailed: title mismatch".to_string()),
        });
        report.push(CaseReport {
            name: "invalid login".to_string(),
            tags: vec![],
            status: TestStatus::Skipped,
            duration_ms: 0,
            failure_message: None,
        });
        report
    }

    #[test]
    fn test_all_passed_ignores_skipped() {
        let mut report = RunReport::new("techglobal");
        report.push(CaseReport {
            name: "a".to_string(),
            tags: vec![],
            status: TestStatus::Passed,
            duration_ms: 1,
            failure_message: None,
        });
        report.push(CaseReport {
            name: "b".to_string(),
            tags: vec![],
            status: TestStatus::Skipped,
            duration_ms: 0,
            failure_message: None,
        });
        assert!(report.all_passed());
    }

    #[test]
    fn test_failed_case_fails_the_run() {
        let report = sample_report();
        assert!(!report.all_passed());
        assert_eq!(report.count(TestStatus::Passed), 1);
        assert_eq!(report.count(TestStatus::Failed), 1);
        assert_eq!(report.count(TestStatus::Skipped), 1);
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample_report();
        let json = report.to_json().unwrap();
        let parsed: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.cases.len(), 3);
        assert_eq!(parsed.cases[1].failure_message.as_deref(), Some("AssertionFailed: title mismatch"));
    }

    #[test]
    fn test_render_mentions_every_case() {
        let text = sample_report().render();
        assert!(text.contains("[passed] home"));
        assert!(text.contains("[failed] login"));
        assert!(text.contains("title mismatch"));
        assert!(text.contains("1 passed, 1 failed, 1 skipped"));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        sample_report().write_to_file(&path).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"suite\": \"techglobal\""));
    }
}
