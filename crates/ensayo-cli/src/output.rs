//! Terminal output formatting

use console::style;
use ensayo::{CaseReport, RunReport, TestStatus};

/// Styled one-character marker for a case status
#[must_use]
pub fn status_symbol(status: TestStatus) -> String {
    match status {
        TestStatus::Passed => style("✓").green().bold().to_string(),
        TestStatus::Failed => style("✗").red().bold().to_string(),
        TestStatus::Skipped => style("-").dim().to_string(),
        TestStatus::Pending | TestStatus::Running => style("…").yellow().to_string(),
    }
}

/// Unstyled totals line for a run
#[must_use]
pub fn summary_line(report: &RunReport) -> String {
    format!(
        "{} passed, {} failed, {} skipped",
        report.count(TestStatus::Passed),
        report.count(TestStatus::Failed),
        report.count(TestStatus::Skipped)
    )
}

fn tag_suffix(case: &CaseReport) -> String {
    if case.tags.is_empty() {
        String::new()
    } else {
        let tags: Vec<String> = case.tags.iter().map(|t| format!("@{t}")).collect();
        format!(" [{}]", tags.join(", "))
    }
}

/// Print a full run report to stdout. In quiet mode only failures and
/// the summary are shown.
pub fn print_report(report: &RunReport, quiet: bool) {
    for case in &report.cases {
        if quiet && case.status != TestStatus::Failed {
            continue;
        }
        println!(
            "  {} {}{} ({}ms)",
            status_symbol(case.status),
            case.name,
            style(tag_suffix(case)).dim(),
            case.duration_ms
        );
        if let Some(message) = &case.failure_message {
            println!("      {}", style(message).red());
        }
    }

    let summary = summary_line(report);
    if report.all_passed() {
        println!("{}", style(summary).green());
    } else {
        println!("{}", style(summary).red().bold());
    }
}

/// Print the case list for the `list` subcommand.
pub fn print_case_list(cases: &[(String, Vec<String>)]) {
    for (name, tags) in cases {
        if tags.is_empty() {
            println!("{name}");
        } else {
            let tags: Vec<String> = tags.iter().map(|t| format!("@{t}")).collect();
            println!("{name} {}", style(format!("[{}]", tags.join(", "))).dim());
        }
    }
}
