//! Content matching and suppression filtering.
//!
//! Every pattern application is stateless: `find_iter` walks the content
//! from the start each time, so no search cursor survives between
//! documents or between concurrent scans of the same rule.

use crate::registry::CompiledRule;

/// A single raw pattern hit within one document's content. Ephemeral:
/// produced and consumed within one document's scan pass.
#[derive(Debug, Clone, Copy)]
pub struct RawMatch<'c> {
    /// Byte offset of the match start within the content.
    pub start: usize,
    /// The exact matched substring.
    pub text: &'c str,
}

/// Every non-overlapping match of one rule against `content`, in pattern
/// declaration order then occurrence order, with suppressed matches
/// already removed.
pub fn rule_matches<'c>(rule: &CompiledRule, content: &'c str) -> Vec<RawMatch<'c>> {
    let mut matches = Vec::new();
    for pattern in rule.patterns() {
        for m in pattern.find_iter(content) {
            let raw = RawMatch {
                start: m.start(),
                text: m.as_str(),
            };
            if is_suppressed(rule, raw.text) {
                continue;
            }
            matches.push(raw);
        }
    }
    matches
}

/// Tests the matched text (never the surrounding context) against the
/// rule's skip patterns. Rules without skip patterns never suppress.
pub fn is_suppressed(rule: &CompiledRule, matched: &str) -> bool {
    rule.skip_patterns().iter().any(|p| p.is_match(matched))
}
