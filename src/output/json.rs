//! Machine-readable report for CI consumption.

use serde::Serialize;

use crate::engine::{Finding, SeverityCounts, Summary};
use crate::error::Result;

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    summary: SeverityCounts,
    findings: &'a [Finding],
}

/// Render `{ passed, summary, findings }` with the findings in scan
/// order (not regrouped by severity).
pub fn render(findings: &[Finding], summary: &Summary) -> Result<String> {
    let report = JsonReport {
        passed: summary.passed(),
        summary: summary.counts(),
        findings,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
