//! Sequential per-fix runner.
//!
//! Files are processed one at a time in enumeration order. A failure on
//! one file is printed and contained; the run always continues.

use std::path::{Path, PathBuf};

use crate::fixes::Fix;
use crate::report::RunReport;
use crate::rewriter::Rewriter;
use crate::types::RewriteConfig;

/// Run one fix across its target set under `root`.
///
/// Emits a progress line per modified file and an `Error processing` line
/// per failed file, both on stdout. Returns the accumulated report; the
/// caller renders the summary.
pub fn run_fix(root: &Path, fix: &Fix, config: &RewriteConfig) -> RunReport {
    let mut report = RunReport::new();

    for path in fix.targets.resolve(root) {
        match Rewriter::apply_to_file(&path, &fix.rules, config) {
            Ok(result) => {
                if result.changed() {
                    let rel = display_path(&path, root);
                    println!("{}: {}", fix.per_file_label, rel.display());
                    report.record(rel);
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "file skipped");
                println!("Error processing {}: {err}", path.display());
            }
        }
    }

    report
}

/// Paths are reported relative to the root where possible.
fn display_path(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}
