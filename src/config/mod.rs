use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::output::OutputFormat;

/// Collaborator-level configuration from `.taskscan.toml`.
///
/// Only I/O and presentation knobs live here; the rule catalog is
/// compiled in and not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory under the scan root that holds task folders.
    #[serde(default = "default_tasks_dir")]
    pub tasks_dir: String,
    /// Report format used when the CLI does not specify one.
    #[serde(default = "default_format")]
    pub default_format: OutputFormat,
}

fn default_tasks_dir() -> String {
    "tasks".to_string()
}

fn default_format() -> OutputFormat {
    OutputFormat::Markdown
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_dir: default_tasks_dir(),
            default_format: default_format(),
        }
    }
}

impl Config {
    /// Load config from a TOML file. Returns the default if the file
    /// doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# taskscan configuration

# Directory under the scan root that holds task folders.
tasks_dir = "tasks"

# Default report format (markdown, json, console).
default_format = "markdown"
"#
    }
}
