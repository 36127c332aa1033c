pub mod console;
pub mod json;
pub mod markdown;

use serde::{Deserialize, Serialize};

use crate::engine::{Finding, Summary};
use crate::error::Result;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Markdown,
    Json,
    Console,
}

impl OutputFormat {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            "console" | "text" => Some(Self::Console),
            _ => None,
        }
    }
}

/// Render the ordered finding sequence plus its summary.
pub fn render(findings: &[Finding], summary: &Summary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(markdown::render(summary)),
        OutputFormat::Json => json::render(findings, summary),
        OutputFormat::Console => Ok(console::render(summary)),
    }
}
