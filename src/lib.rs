//! taskscan — rule-based content-security scanner for task repositories.
//!
//! Scans task definition folders (front-matter plus free-form body text)
//! for known-dangerous content: prompt-injection phrasing, destructive
//! shell commands, data-exfiltration idioms, hardcoded credentials,
//! dynamic code execution, and privilege-escalation flags. Findings are
//! severity-tiered; critical or high findings fail the scan.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use taskscan::{scan, ScanOptions};
//!
//! let options = ScanOptions::default();
//! let report = scan(Path::new("."), &options).unwrap();
//! println!("passed: {}, findings: {}", report.summary.passed(), report.findings.len());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod registry;
pub mod walker;

use std::path::Path;

use config::Config;
use error::Result;
use output::OutputFormat;
use registry::Registry;
use walker::SkippedFile;

pub use engine::{Document, Finding, SeverityCounts, Summary};
pub use registry::Severity;

/// Options for a scan invocation.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Path to config file (defaults to `.taskscan.toml` in the scan root).
    pub config_path: Option<std::path::PathBuf>,
    /// Specific task folders to scan; empty means all.
    pub folders: Vec<String>,
    /// CLI override for the report format.
    pub format_override: Option<OutputFormat>,
}

/// Complete scan report.
#[derive(Debug)]
pub struct ScanReport {
    /// All findings in scan order (document, then severity tier, then
    /// rule and occurrence order).
    pub findings: Vec<Finding>,
    pub summary: Summary,
    /// Files that could not be read, reported separately from findings.
    pub skipped: Vec<SkippedFile>,
    /// Resolved report format (override or config default).
    pub format: OutputFormat,
}

/// Run a complete scan: load config, discover and read task documents,
/// apply every rule, summarize.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<ScanReport> {
    let config_path = options
        .config_path
        .clone()
        .unwrap_or_else(|| root.join(".taskscan.toml"));
    let config = Config::load(&config_path)?;

    let registry = Registry::shared()?;

    let set = if options.folders.is_empty() {
        walker::collect_all(root, &config.tasks_dir)
    } else {
        walker::collect_folders(root, &config.tasks_dir, &options.folders)
    };

    let findings = engine::scanner::scan_documents(registry, &set.documents);
    let summary = Summary::from_findings(&findings);

    Ok(ScanReport {
        findings,
        summary,
        skipped: set.skipped,
        format: options.format_override.unwrap_or(config.default_format),
    })
}

/// Render a scan report in the specified format.
pub fn render_report(report: &ScanReport, format: OutputFormat) -> Result<String> {
    output::render(&report.findings, &report.summary, format)
}
