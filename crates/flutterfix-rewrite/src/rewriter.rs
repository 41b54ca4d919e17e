//! Core rewriter implementation.
//!
//! Read a file, run the rule set over it in memory, write back only when
//! the content actually changed.

use std::path::Path;

use crate::error::RewriteError;
use crate::rule::Rule;
use crate::types::{RewriteConfig, RewriteResult};

/// Rewriter - ordered rule application over file content.
///
/// # Example
///
/// ```rust,ignore
/// use flutterfix_rewrite::{Rewriter, Rule};
///
/// let rules = [Rule::substitute(r"old", "new")];
/// let result = Rewriter::apply("old old", &rules);
/// assert_eq!(result.modified, "new new");
/// ```
pub struct Rewriter;

impl Rewriter {
    /// Apply an ordered rule set to in-memory content.
    ///
    /// Each rule transforms the output of the previous one; the original
    /// content is kept alongside for change detection.
    #[must_use]
    pub fn apply(content: &str, rules: &[Rule]) -> RewriteResult {
        let mut modified = content.to_string();
        for rule in rules {
            modified = rule.apply(&modified);
        }

        RewriteResult {
            original: content.to_string(),
            modified,
        }
    }

    /// Apply an ordered rule set to a file, writing back on change.
    ///
    /// The file is read fully, transformed in memory, and overwritten in
    /// place only when the final content differs from the original. There
    /// is no atomic-replace step; that is part of the contract.
    ///
    /// # Errors
    /// Any read, decode, or write failure; the caller treats the file as
    /// unmodified and continues with the next one.
    pub fn apply_to_file<P: AsRef<Path>>(
        path: P,
        rules: &[Rule],
        config: &RewriteConfig,
    ) -> Result<RewriteResult, RewriteError> {
        let path = path.as_ref();
        let content = flutterfix_io::read_text_safe(path, config.max_file_size)?;

        let result = Self::apply(&content, rules);

        if result.changed() {
            tracing::debug!(path = %path.display(), "writing rewritten content");
            flutterfix_io::write_text(path, &result.modified).map_err(RewriteError::Write)?;
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_rule_set_changes_nothing() {
        let result = Rewriter::apply("content", &[]);
        assert!(!result.changed());
        assert_eq!(result.modified, "content");
    }

    #[test]
    fn test_later_rules_see_earlier_output() {
        let rules = [Rule::substitute("a", "b"), Rule::substitute("b", "c")];
        let result = Rewriter::apply("a", &rules);
        assert_eq!(result.modified, "c");
    }

    #[test]
    fn test_apply_to_file_writes_on_change() {
        let dir = TempDir::new().expect("Create temp dir");
        let path = dir.path().join("widget.dart");
        std::fs::write(&path, "old();\n").expect("Write fixture");

        let rules = [Rule::substitute("old", "new")];
        let result = Rewriter::apply_to_file(&path, &rules, &RewriteConfig::default())
            .expect("Should rewrite");

        assert!(result.changed());
        let on_disk = std::fs::read_to_string(&path).expect("Read back");
        assert_eq!(on_disk, "new();\n");
    }

    #[test]
    fn test_apply_to_file_skips_write_without_change() {
        let dir = TempDir::new().expect("Create temp dir");
        let path = dir.path().join("widget.dart");
        std::fs::write(&path, "untouched();\n").expect("Write fixture");

        let rules = [Rule::substitute("absent", "x")];
        let result = Rewriter::apply_to_file(&path, &rules, &RewriteConfig::default())
            .expect("Should read fine");

        assert!(!result.changed());
        let on_disk = std::fs::read_to_string(&path).expect("Read back");
        assert_eq!(on_disk, "untouched();\n");
    }

    #[test]
    fn test_apply_to_file_missing_file_is_error() {
        let result = Rewriter::apply_to_file(
            "/nonexistent/widget.dart",
            &[],
            &RewriteConfig::default(),
        );
        assert!(matches!(result, Err(RewriteError::Io(_))));
    }
}
