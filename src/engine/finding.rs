//! Finding construction: line attribution and match truncation.

use serde::{Deserialize, Serialize};

use super::matcher::RawMatch;
use super::Document;
use crate::registry::{CompiledRule, Severity};

/// Maximum number of characters kept from a matched substring.
pub const MATCH_EXCERPT_CHARS: usize = 100;

/// One confirmed (non-suppressed) rule match against one document.
///
/// Serialized field names follow the machine-readable report contract:
/// `ruleId`, `ruleName`, and `match` for the truncated excerpt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub severity: Severity,
    pub rule_id: String,
    pub rule_name: String,
    pub description: String,
    pub file: String,
    /// 1-based line on which the match starts.
    pub line: usize,
    /// Matched text, truncated to [`MATCH_EXCERPT_CHARS`] characters.
    #[serde(rename = "match")]
    pub matched: String,
}

/// Build a [`Finding`] from a surviving match. Pure: copies rule metadata,
/// attributes a line number, truncates the excerpt.
pub fn build(rule: &CompiledRule, doc: &Document, raw: RawMatch<'_>) -> Finding {
    Finding {
        severity: rule.severity(),
        rule_id: rule.id().to_string(),
        rule_name: rule.name().to_string(),
        description: rule.description().to_string(),
        file: doc.identity.clone(),
        line: line_number(&doc.content, raw.start),
        matched: truncate_chars(raw.text, MATCH_EXCERPT_CHARS),
    }
}

/// 1-based line of a byte offset: line breaks strictly before it, plus one.
pub fn line_number(content: &str, offset: usize) -> usize {
    content.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

/// Truncate to at most `max` characters without splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
