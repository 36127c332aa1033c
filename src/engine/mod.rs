//! The scanning pipeline: match, suppress, build findings, summarize.
//!
//! Data flows one way: documents go through the matcher and suppression
//! filter, surviving matches become [`Finding`]s, the orchestrator
//! collects them, and [`Summary`] derives counts and the pass verdict.
//! Nothing in this module touches the filesystem; documents arrive
//! already loaded (see [`crate::walker`]).

pub mod finding;
pub mod matcher;
pub mod scanner;
pub mod summary;

pub use finding::Finding;
pub use summary::{SeverityCounts, Summary};

/// One text document handed to the scanner by the I/O collaborator.
///
/// `identity` is a stable external reference (a path relative to the scan
/// root); the engine treats it as an opaque label.
#[derive(Debug, Clone)]
pub struct Document {
    pub identity: String,
    pub content: String,
}

impl Document {
    pub fn new(identity: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            content: content.into(),
        }
    }
}
