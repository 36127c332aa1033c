//! Severity-tiered rule registry.
//!
//! The catalog of detection rules is compiled into the binary (see
//! [`catalog`]); the registry compiles every pattern once and exposes the
//! rules in report order: critical, high, medium, low, and declaration
//! order within a tier. It is read-only after construction and can be
//! shared freely across threads.

pub mod catalog;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

/// Finding severity. Exactly four variants, in fixed priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// All severities, highest first. Report sections and tier iteration
    /// follow this order.
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "critical" | "crit" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" | "med" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// A rule declaration from the compiled-in catalog.
///
/// `patterns` must be non-empty and `id` unique across all tiers; both are
/// build-time concerns, enforced by tests rather than runtime checks.
#[derive(Debug)]
pub struct Rule {
    pub id: &'static str,
    pub name: &'static str,
    pub severity: Severity,
    pub patterns: &'static [&'static str],
    /// Patterns tested against a match's own text; any hit discards the
    /// match as a known-benign form (placeholders, interpolation, ...).
    pub skip_patterns: &'static [&'static str],
    pub description: &'static str,
}

/// A catalog rule with its patterns compiled.
///
/// All patterns are case-insensitive and Unicode-aware. Matching through
/// `Regex` carries no per-call cursor, so a compiled rule can be applied
/// to any number of documents, concurrently, without state leaking
/// between applications.
pub struct CompiledRule {
    decl: &'static Rule,
    patterns: Vec<Regex>,
    skip_patterns: Vec<Regex>,
}

impl CompiledRule {
    fn compile(decl: &'static Rule) -> Result<Self> {
        let patterns = decl
            .patterns
            .iter()
            .map(|p| compile_pattern(decl.id, p))
            .collect::<Result<Vec<_>>>()?;
        let skip_patterns = decl
            .skip_patterns
            .iter()
            .map(|p| compile_pattern(decl.id, p))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            decl,
            patterns,
            skip_patterns,
        })
    }

    pub fn id(&self) -> &'static str {
        self.decl.id
    }

    pub fn name(&self) -> &'static str {
        self.decl.name
    }

    pub fn severity(&self) -> Severity {
        self.decl.severity
    }

    pub fn description(&self) -> &'static str {
        self.decl.description
    }

    /// Compiled detection patterns, in declaration order.
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    /// Compiled suppression patterns; empty for rules that never suppress.
    pub fn skip_patterns(&self) -> &[Regex] {
        &self.skip_patterns
    }
}

impl std::fmt::Debug for CompiledRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledRule")
            .field("id", &self.decl.id)
            .field("patterns", &self.decl.patterns.len())
            .field("skip_patterns", &self.decl.skip_patterns.len())
            .finish()
    }
}

fn compile_pattern(rule_id: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ScanError::Rule {
            rule_id: rule_id.to_string(),
            message: format!("pattern `{pattern}` failed to compile: {e}"),
        })
}

/// Summary metadata for one rule, used by `list-rules` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleInfo {
    pub id: String,
    pub name: String,
    pub severity: Severity,
    pub description: String,
}

/// The compiled rule catalog. Immutable once built.
pub struct Registry {
    rules: Vec<CompiledRule>,
}

impl Registry {
    /// Compile the built-in catalog. A pattern that fails to compile is a
    /// fatal configuration error, never a skipped rule.
    pub fn builtin() -> Result<Self> {
        let rules = catalog::all()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Shared process-wide registry, compiled on first use.
    pub fn shared() -> Result<&'static Registry> {
        static BUILTIN: Lazy<std::result::Result<Registry, String>> =
            Lazy::new(|| Registry::builtin().map_err(|e| e.to_string()));
        BUILTIN
            .as_ref()
            .map_err(|msg| ScanError::Config(msg.clone()))
    }

    /// Every rule, in tier order (critical first), declaration order
    /// within a tier.
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Rules of one tier, in declaration order.
    pub fn rules_for(&self, severity: Severity) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter().filter(move |r| r.severity() == severity)
    }

    pub fn list_rules(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|r| RuleInfo {
                id: r.id().to_string(),
                name: r.name().to_string(),
                severity: r.severity(),
                description: r.description().to_string(),
            })
            .collect()
    }
}
