//! End-to-end scans over the committed fixture task tree.

use std::path::Path;

use pretty_assertions::assert_eq;

use taskscan::output::OutputFormat;
use taskscan::{render_report, scan, ScanOptions};

fn fixture_root() -> &'static Path {
    Path::new("tests/fixtures")
}

#[test]
fn full_scan_flags_the_injected_task() {
    let report = scan(fixture_root(), &ScanOptions::default()).unwrap();

    let ids: Vec<&str> = report.findings.iter().map(|f| f.rule_id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            // notes.sh first (name order within the folder), critical tier
            // before low within each document.
            "MALICIOUS_CMD_001",
            "SUDO_001",
            "PROMPT_INJECTION_001",
            "PROMPT_INJECTION_002",
            "SHELL_INJECT_001",
            "CREDENTIAL_001",
        ]
    );

    assert!(!report.summary.passed());
    let counts = report.summary.counts();
    assert_eq!(counts.critical, 4);
    assert_eq!(counts.high, 1);
    assert_eq!(counts.medium, 0);
    assert_eq!(counts.low, 1);
    assert_eq!(counts.total, 6);
    assert!(report.skipped.is_empty());
}

#[test]
fn findings_carry_file_and_line_attribution() {
    let report = scan(fixture_root(), &ScanOptions::default()).unwrap();

    let injection = report
        .findings
        .iter()
        .find(|f| f.rule_id == "PROMPT_INJECTION_001")
        .unwrap();
    assert_eq!(injection.file, "tasks/injected-task/task.md");
    assert_eq!(injection.line, 9);
    assert_eq!(injection.matched, "Ignore all previous instructions");

    let credential = report
        .findings
        .iter()
        .find(|f| f.rule_id == "CREDENTIAL_001")
        .unwrap();
    assert_eq!(credential.line, 13);
    assert_eq!(credential.matched, "password = \"letmein123\"");

    let sudo = report
        .findings
        .iter()
        .find(|f| f.rule_id == "SUDO_001")
        .unwrap();
    assert_eq!(sudo.file, "tasks/injected-task/notes.sh");
    assert_eq!(sudo.line, 2);
}

#[test]
fn folders_without_task_marker_are_not_scanned() {
    let report = scan(fixture_root(), &ScanOptions::default()).unwrap();
    assert!(report
        .findings
        .iter()
        .all(|f| !f.file.contains("draft-folder")));
}

#[test]
fn targeted_scan_of_the_safe_task_passes() {
    let options = ScanOptions {
        folders: vec!["safe-task".into()],
        ..Default::default()
    };
    let report = scan(fixture_root(), &options).unwrap();
    assert!(report.findings.is_empty());
    assert!(report.summary.passed());
    assert_eq!(report.summary.total(), 0);
}

#[test]
fn repeated_scans_yield_identical_findings() {
    let first = scan(fixture_root(), &ScanOptions::default()).unwrap();
    let second = scan(fixture_root(), &ScanOptions::default()).unwrap();
    assert_eq!(first.findings, second.findings);
}

#[test]
fn json_report_has_the_ci_contract_shape() {
    let report = scan(fixture_root(), &ScanOptions::default()).unwrap();
    let rendered = render_report(&report, OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(json["passed"], false);
    assert_eq!(json["summary"]["critical"], 4);
    assert_eq!(json["summary"]["total"], 6);
    assert_eq!(json["findings"][0]["ruleId"], "MALICIOUS_CMD_001");
    assert_eq!(
        json["findings"][2]["file"],
        "tasks/injected-task/task.md"
    );
}

#[test]
fn markdown_report_fails_loudly() {
    let report = scan(fixture_root(), &ScanOptions::default()).unwrap();
    let rendered = render_report(&report, OutputFormat::Markdown).unwrap();
    assert!(rendered.contains("# Security Scan Report"));
    assert!(rendered.contains("**FAILED**"));
    assert!(rendered.contains("SHELL_INJECT_001"));
}

#[test]
fn format_defaults_to_markdown_and_honors_overrides() {
    let report = scan(fixture_root(), &ScanOptions::default()).unwrap();
    assert_eq!(report.format, OutputFormat::Markdown);

    let options = ScanOptions {
        format_override: Some(OutputFormat::Json),
        ..Default::default()
    };
    let report = scan(fixture_root(), &options).unwrap();
    assert_eq!(report.format, OutputFormat::Json);
}
