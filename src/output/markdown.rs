//! Human-readable tiered markdown report.

use crate::engine::Summary;
use crate::registry::Severity;

fn label(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "🔴 Critical",
        Severity::High => "🟠 High",
        Severity::Medium => "🟡 Medium",
        Severity::Low => "🟢 Low",
    }
}

/// Render the summary table, overall status, and per-severity sections.
pub fn render(summary: &Summary) -> String {
    let mut report = String::from("# Security Scan Report\n\n");

    report.push_str("## Summary\n\n");
    report.push_str("| Severity | Count |\n");
    report.push_str("|----------|-------|\n");
    for severity in Severity::ALL {
        report.push_str(&format!(
            "| {} | {} |\n",
            label(severity),
            summary.count(severity)
        ));
    }
    report.push_str(&format!("| **Total** | **{}** |\n\n", summary.total()));

    if !summary.passed() {
        report.push_str("> ❌ **FAILED**: Critical or high severity issues found\n\n");
    } else if summary.count(Severity::Medium) > 0 {
        report.push_str("> ⚠️ **WARNING**: Medium severity issues found - review recommended\n\n");
    } else if summary.count(Severity::Low) > 0 {
        report.push_str("> ✅ **PASSED with notes**: Low severity issues found\n\n");
    } else {
        report.push_str("> ✅ **PASSED**: No security issues found\n\n");
    }

    for severity in Severity::ALL {
        let findings = summary.group(severity);
        if findings.is_empty() {
            continue;
        }
        report.push_str(&format!("## {} Issues\n\n", label(severity)));
        for finding in findings {
            report.push_str(&format!("### {}: {}\n", finding.rule_id, finding.rule_name));
            report.push_str(&format!("- **File:** {}:{}\n", finding.file, finding.line));
            report.push_str(&format!("- **Description:** {}\n", finding.description));
            report.push_str(&format!("- **Match:** `{}`\n\n", finding.matched));
        }
    }

    report
}
