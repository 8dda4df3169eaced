//! Suite runner.
//!
//! The runner owns the case list and drives each case through its state
//! machine. Cases the tag filter deselects are reported skipped without
//! ever starting; selected cases run sequentially, each against its own
//! clone of the context, and a failure in one case never stops the
//! others.

use crate::case::{CaseContext, TestCase, TestStatus};
use crate::reporter::{CaseReport, RunReport};
use std::time::Instant;

/// Tag-based case selection.
///
/// An empty filter selects everything; otherwise a case is selected when
/// it carries at least one of the filter's tags.
#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    tags: Vec<String>,
}

impl TagFilter {
    /// Build a filter from tags, tolerating a leading `@` on each
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(|t| t.into().trim_start_matches('@').to_string())
                .collect(),
        }
    }

    /// Whether the filter selects everything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Whether the filter selects this case
    #[must_use]
    pub fn selects(&self, case: &TestCase) -> bool {
        self.is_empty() || self.tags.iter().any(|t| case.has_tag(t))
    }
}

/// Sequential suite runner.
#[derive(Debug)]
pub struct Runner {
    suite: String,
    cases: Vec<TestCase>,
    filter: TagFilter,
}

impl Runner {
    /// Create a runner for a named suite
    #[must_use]
    pub fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            cases: Vec::new(),
            filter: TagFilter::default(),
        }
    }

    /// Add a case to the suite
    #[must_use]
    pub fn with_case(mut self, case: TestCase) -> Self {
        self.cases.push(case);
        self
    }

    /// Add every case from an iterator
    #[must_use]
    pub fn with_cases(mut self, cases: impl IntoIterator<Item = TestCase>) -> Self {
        self.cases.extend(cases);
        self
    }

    /// Restrict the run to cases the filter selects
    #[must_use]
    pub fn with_filter(mut self, filter: TagFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The registered cases, in execution order
    #[must_use]
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Run the suite and collect a report.
    ///
    /// Deselected cases go `Pending -> Skipped`; selected cases go
    /// `Pending -> Running -> Passed | Failed`.
    pub async fn run(&self, ctx: &CaseContext) -> RunReport {
        let mut report = RunReport::new(self.suite.clone());
        for case in &self.cases {
            report.push(self.run_case(case, ctx).await);
        }
        tracing::info!(
            suite = %self.suite,
            passed = report.count(TestStatus::Passed),
            failed = report.count(TestStatus::Failed),
            skipped = report.count(TestStatus::Skipped),
            "run complete"
        );
        report
    }

    async fn run_case(&self, case: &TestCase, ctx: &CaseContext) -> CaseReport {
        let mut status = TestStatus::Pending;

        if !self.filter.selects(case) {
            debug_assert!(status.can_transition_to(TestStatus::Skipped));
            status = TestStatus::Skipped;
            tracing::debug!(case = case.name(), "deselected by tag filter");
            return CaseReport {
                name: case.name().to_string(),
                tags: case.tags().to_vec(),
                status,
                duration_ms: 0,
                failure_message: None,
            };
        }

        debug_assert!(status.can_transition_to(TestStatus::Running));
        status = TestStatus::Running;
        tracing::info!(case = case.name(), "running");

        let start = Instant::now();
        let outcome = case.run(ctx.clone()).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let failure_message = match outcome {
            Ok(()) => {
                debug_assert!(status.can_transition_to(TestStatus::Passed));
                status = TestStatus::Passed;
                tracing::info!(case = case.name(), duration_ms, "passed");
                None
            }
            Err(e) => {
                debug_assert!(status.can_transition_to(TestStatus::Failed));
                status = TestStatus::Failed;
                tracing::warn!(case = case.name(), duration_ms, error = %e, "failed");
                Some(format!("{}: {e}", e.kind()))
            }
        };

        CaseReport {
            name: case.name().to_string(),
            tags: case.tags().to_vec(),
            status,
            duration_ms,
            failure_message,
        }
    }
}
