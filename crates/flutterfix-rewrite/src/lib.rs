#![allow(clippy::doc_markdown)]

//! flutterfix-rewrite - Rule-based source rewriting for Flutter/Dart trees
//!
//! Regex-level maintenance fixes applied file-by-file: read, transform in
//! memory, write back only when something changed.
//!
//! # Features
//!
//! - **Ordered rules**: later rules see the output of earlier rules
//! - **Per-file containment**: a failing file is reported and skipped,
//!   never aborting the run
//! - **Conditional writes**: untouched files are never rewritten
//! - **Built-in fixes**: mounted guards, print comment-out, withOpacity
//!   deprecation rename
//!
//! # Architecture
//!
//! ```text
//! flutterfix-rewrite/src/
//! ├── lib.rs       # Re-exports (this file)
//! ├── error.rs     # RewriteError enum (thiserror)
//! ├── types.rs     # RewriteResult, RewriteConfig
//! ├── rule.rs      # Rule: substitution & comment-out variants
//! ├── rewriter.rs  # Rewriter implementation
//! ├── select.rs    # TargetSet: explicit list / recursive scan
//! ├── report.rs    # RunReport accumulator
//! ├── batch.rs     # Sequential per-fix runner
//! └── fixes.rs     # The three fix definitions
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use flutterfix_rewrite::{fixes, run_fix, RewriteConfig};
//!
//! let fix = fixes::opacity_deprecations();
//! let report = run_fix(project_root, &fix, &RewriteConfig::default());
//! println!("{}", fix.summary(&report));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod batch;
mod error;
mod report;
mod rewriter;
mod rule;
mod select;
mod types;

pub mod fixes;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use batch::run_fix;
pub use error::RewriteError;
pub use fixes::Fix;
pub use report::RunReport;
pub use rewriter::Rewriter;
pub use rule::Rule;
pub use select::TargetSet;
pub use types::{RewriteConfig, RewriteResult};
