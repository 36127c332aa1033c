//! Built-in detection rules, one static table per severity tier.
//!
//! Tables are data, not code: the engine never special-cases a rule id.
//! Adding a detector means adding a row here. Patterns are compiled
//! case-insensitively, so they are written in lowercase except where the
//! mixed case aids reading.

use super::{Rule, Severity};

pub static CRITICAL: &[Rule] = &[
    Rule {
        id: "PROMPT_INJECTION_001",
        name: "Instruction Override Attempt",
        severity: Severity::Critical,
        patterns: &[
            r"ignore\s+(all\s+)?(previous|above|prior)\s+(instructions?|prompts?|rules?|guidelines?)",
            r"disregard\s+(all\s+)?(previous|above|prior)",
            r"forget\s+(all\s+)?(previous|above|prior|everything)",
            r"override\s+(all\s+)?(previous|above|prior|system)",
        ],
        skip_patterns: &[],
        description: "Detected attempt to override AI instructions",
    },
    Rule {
        id: "PROMPT_INJECTION_002",
        name: "System Prompt Extraction",
        severity: Severity::Critical,
        patterns: &[
            r"what\s+(is|are)\s+(your|the)\s+(system\s+)?prompt",
            r"show\s+(me\s+)?(your|the)\s+(system\s+)?prompt",
            r"reveal\s+(your|the)\s+(system\s+)?prompt",
            r"print\s+(your|the)\s+(system\s+)?prompt",
        ],
        skip_patterns: &[],
        description: "Detected attempt to extract system prompts",
    },
    Rule {
        id: "MALICIOUS_CMD_001",
        name: "Dangerous System Command",
        severity: Severity::Critical,
        // The rm pattern exempts /tmp via the skip list below; the regex
        // crate has no lookaround, so the exemption goes through the same
        // suppression filter as every other allow-listed form.
        patterns: &[
            r"rm\s+-rf\s+/\S*",
            r"rmdir\s+/s\s+/q\s+[a-z]:\\",
            r"format\s+[a-z]:\s*/[qy]",
            r"del\s+/[fqs]\s+[a-z]:\\",
            r"mkfs\s+",
            r"dd\s+if=.*of=/dev/",
        ],
        skip_patterns: &[r"^rm\s+-rf\s+/tmp"],
        description: "Detected potentially destructive system command",
    },
    Rule {
        id: "DATA_EXFIL_001",
        name: "Data Exfiltration Pattern",
        severity: Severity::Critical,
        patterns: &[
            r"curl\s+.*-d\s+.*\$\(",
            r"wget\s+.*--post-data",
            r"curl\s+.*@.*/etc/passwd",
            r"curl\s+.*@.*\.ssh/id_rsa",
        ],
        skip_patterns: &[],
        description: "Detected potential data exfiltration attempt",
    },
    Rule {
        id: "SHELL_INJECT_001",
        name: "Remote Code Execution",
        severity: Severity::Critical,
        patterns: &[
            r"curl\s+.*\|\s*sh",
            r"wget\s+.*\|\s*sh",
            r"curl\s+.*\|\s*bash",
            r"wget\s+.*\|\s*bash",
            r"\$\(curl\s+",
            r"\$\(wget\s+",
        ],
        skip_patterns: &[],
        description: "Detected remote code execution pattern",
    },
];

pub static HIGH: &[Rule] = &[
    Rule {
        id: "ROLE_HIJACK_001",
        name: "Role Hijacking Attempt",
        severity: Severity::High,
        patterns: &[
            r"you\s+are\s+now\s+(a|an|the)",
            r"from\s+now\s+on,?\s+you\s+(are|will\s+be)",
            r"pretend\s+(you\s+are|to\s+be)",
            r"act\s+as\s+(if\s+you|a|an|the)",
            r"roleplay\s+as",
        ],
        skip_patterns: &[],
        description: "Detected attempt to change AI role",
    },
    Rule {
        id: "JAILBREAK_001",
        name: "Jailbreak Attempt",
        severity: Severity::High,
        patterns: &[
            r"\bDAN\b",
            r"do\s+anything\s+now",
            r"jailbreak",
            r"\bunlocked\s+mode\b",
            r"developer\s+mode\s+(enabled|activated|on)",
        ],
        skip_patterns: &[],
        description: "Detected potential jailbreak attempt",
    },
    Rule {
        id: "CREDENTIAL_001",
        name: "Hardcoded Credentials",
        severity: Severity::High,
        patterns: &[
            r#"password\s*[=:]\s*["'][^"'$<{\[\]]+["']"#,
            r#"api[_-]?key\s*[=:]\s*["'][^"'$<{\[\]]+["']"#,
            r#"secret[_-]?key\s*[=:]\s*["'][^"'$<{\[\]]+["']"#,
            r#"access[_-]?token\s*[=:]\s*["'][^"'$<{\[\]]+["']"#,
            r#"private[_-]?key\s*[=:]\s*["'][^"'$<{\[\]]+["']"#,
        ],
        skip_patterns: &[
            r"<your-",
            r"\$\{",
            r"your-.*-here",
            r"example",
            r"placeholder",
            r"xxx",
            r"\*\*\*",
        ],
        description: "Detected potential hardcoded credentials",
    },
];

pub static MEDIUM: &[Rule] = &[
    Rule {
        id: "ENCODING_001",
        name: "Encoded Content",
        severity: Severity::Medium,
        patterns: &[
            r"base64[_-]?decode",
            r"atob\s*\(",
            r"btoa\s*\(",
            r#"Buffer\.from\s*\([^)]+,\s*['"]base64['"]\)"#,
        ],
        skip_patterns: &[],
        description: "Detected base64 encoding/decoding which could hide malicious content",
    },
    Rule {
        id: "EVAL_001",
        name: "Dynamic Code Execution",
        severity: Severity::Medium,
        patterns: &[
            r"\beval\s*\(",
            r"\bexec\s*\(",
            r#"Function\s*\(\s*["']"#,
            r"new\s+Function\s*\(",
            r#"setTimeout\s*\(\s*["']"#,
            r#"setInterval\s*\(\s*["']"#,
        ],
        skip_patterns: &[],
        description: "Detected dynamic code execution pattern",
    },
];

pub static LOW: &[Rule] = &[
    Rule {
        id: "OVERRIDE_001",
        name: "Configuration Override",
        severity: Severity::Low,
        patterns: &[
            r"--no-verify",
            r"--skip-validation",
            r"-f\s+--force",
            r"--allow-root",
        ],
        skip_patterns: &[],
        description: "Detected security bypass flags",
    },
    Rule {
        id: "SUDO_001",
        name: "Elevated Privilege Request",
        severity: Severity::Low,
        patterns: &[r"\bsudo\s+", r"\bsu\s+-\s+", r"run\s+as\s+administrator"],
        skip_patterns: &[],
        description: "Detected request for elevated privileges",
    },
];

/// Every rule in tier order, critical first, declaration order within a
/// tier. The registry relies on this ordering for deterministic reports.
pub fn all() -> impl Iterator<Item = &'static Rule> {
    CRITICAL
        .iter()
        .chain(HIGH.iter())
        .chain(MEDIUM.iter())
        .chain(LOW.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_carry_their_own_severity() {
        assert!(CRITICAL.iter().all(|r| r.severity == Severity::Critical));
        assert!(HIGH.iter().all(|r| r.severity == Severity::High));
        assert!(MEDIUM.iter().all(|r| r.severity == Severity::Medium));
        assert!(LOW.iter().all(|r| r.severity == Severity::Low));
    }

    #[test]
    fn only_credentials_and_rm_rules_suppress() {
        let with_skips: Vec<&str> = all()
            .filter(|r| !r.skip_patterns.is_empty())
            .map(|r| r.id)
            .collect();
        assert_eq!(with_skips, vec!["MALICIOUS_CMD_001", "CREDENTIAL_001"]);
    }
}
