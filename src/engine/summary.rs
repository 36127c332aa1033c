//! Summarization: per-severity grouping, counts, and the pass verdict.

use serde::{Deserialize, Serialize};

use super::Finding;
use crate::registry::Severity;

/// Per-severity finding counts plus the total, as serialized into the
/// machine-readable report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

/// Findings for one scan, partitioned by severity with relative order
/// preserved. Recomputed per scan; nothing is retained across scans.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    critical: Vec<Finding>,
    high: Vec<Finding>,
    medium: Vec<Finding>,
    low: Vec<Finding>,
}

impl Summary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Self::default();
        for finding in findings {
            match finding.severity {
                Severity::Critical => summary.critical.push(finding.clone()),
                Severity::High => summary.high.push(finding.clone()),
                Severity::Medium => summary.medium.push(finding.clone()),
                Severity::Low => summary.low.push(finding.clone()),
            }
        }
        summary
    }

    /// Findings of one severity, in their original relative order.
    pub fn group(&self, severity: Severity) -> &[Finding] {
        match severity {
            Severity::Critical => &self.critical,
            Severity::High => &self.high,
            Severity::Medium => &self.medium,
            Severity::Low => &self.low,
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.group(severity).len()
    }

    pub fn total(&self) -> usize {
        Severity::ALL.iter().map(|&s| self.count(s)).sum()
    }

    pub fn counts(&self) -> SeverityCounts {
        SeverityCounts {
            critical: self.count(Severity::Critical),
            high: self.count(Severity::High),
            medium: self.count(Severity::Medium),
            low: self.count(Severity::Low),
            total: self.total(),
        }
    }

    /// Fixed pass rule: critical and high findings fail a scan; medium
    /// and low only inform it.
    pub fn passed(&self) -> bool {
        self.critical.is_empty() && self.high.is_empty()
    }
}
