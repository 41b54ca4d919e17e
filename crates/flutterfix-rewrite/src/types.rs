//! Core types for the rewriting pipeline.

use serde::Serialize;

/// Result of applying a rule set to one file's content.
///
/// Holds both sides so callers can derive whether anything changed.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteResult {
    /// Content before any rule ran.
    pub original: String,
    /// Content after the full rule set ran.
    pub modified: String,
}

impl RewriteResult {
    /// Whether the rule set changed the content at all.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.original != self.modified
    }
}

/// Configuration for rewrite operations.
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Maximum readable file size in bytes (default 1MB).
    pub max_file_size: u64,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            max_file_size: 1024 * 1024, // 1MB
        }
    }
}
