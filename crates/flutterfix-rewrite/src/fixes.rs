//! The built-in fixes.
//!
//! Each fix bundles a target set, an ordered rule list, and the console
//! wording of its run. The regexes operate on raw source text; see each
//! constructor for the limits that come with that.

use std::path::PathBuf;

use crate::report::RunReport;
use crate::rule::Rule;
use crate::select::TargetSet;

/// A named maintenance fix: targets, rules, and console wording.
#[derive(Debug, Clone)]
pub struct Fix {
    /// Stable fix name (matches the CLI subcommand).
    pub name: &'static str,
    /// Files this fix operates on.
    pub targets: TargetSet,
    /// Rules, applied in order.
    pub rules: Vec<Rule>,
    /// Label for the per-file progress line.
    pub per_file_label: &'static str,
    /// Label for the summary count line.
    pub total_label: &'static str,
    /// Summary line when at least one file changed.
    pub done_message: &'static str,
    /// Summary line when nothing changed, if the fix has one.
    pub empty_message: Option<&'static str>,
}

impl Fix {
    /// Render the end-of-run summary for this fix.
    #[must_use]
    pub fn summary(&self, report: &RunReport) -> String {
        let mut out = format!("\n{}: {}", self.total_label, report.count());

        if report.is_empty() {
            if let Some(empty) = self.empty_message {
                out.push('\n');
                out.push_str(empty);
            }
        } else {
            out.push('\n');
            out.push_str(self.done_message);
        }

        out
    }
}

/// Wrap Navigator/ScaffoldMessenger calls that use `context` in
/// `if (mounted)` guards.
///
/// The wrap is a purely textual, indentation-preserving insertion around
/// the regex's view of a single statement. It does not parse the
/// surrounding block structure, and it does not detect an existing guard:
/// running the fix twice nests a second guard inside the first. Tests pin
/// that limitation.
#[must_use]
pub fn context_guards() -> Fix {
    Fix {
        name: "context-guards",
        // Screens known to use context after an await.
        targets: TargetSet::Explicit(vec![
            PathBuf::from("lib/main-screens/documents_screen.dart"),
            PathBuf::from("lib/other-screens/camera.dart"),
            PathBuf::from("lib/other-screens/result_screen.dart"),
            PathBuf::from("lib/other-screens/multiple_results_screen.dart"),
        ]),
        rules: vec![
            // Open a guard block before the call. The leading \s+ capture
            // can span the preceding newline.
            Rule::substitute(
                r"(\s+)(Navigator\.[a-zA-Z]+\(\s*context)",
                "${1}if (mounted) {\n${1}  ${2}",
            ),
            // Close the block after the statement. Fixed indentation.
            Rule::substitute(r"(Navigator\.[a-zA-Z]+\([^;]*context[^;]*;)", "${1}\n    }"),
            Rule::substitute(
                r"(\s+)(ScaffoldMessenger\.of\(context\))",
                "${1}if (mounted) {\n${1}  ${2}",
            ),
            Rule::substitute(r"(ScaffoldMessenger\.of\(context\)[^;]*\);)", "${1}\n      }"),
        ],
        per_file_label: "Added mounted checks to",
        total_label: "Total files fixed",
        done_message: "Mounted checks have been added!",
        empty_message: None,
    }
}

/// Comment out `print(...)` calls across `lib/` with a `// DEBUG:` marker.
///
/// The trigger is deliberately unanchored and also catches `debugPrint(`.
/// Only the line containing the call keyword is rewritten, so a call
/// spanning several lines is commented out partially. The `//` check on
/// already-commented lines makes reruns a no-op.
#[must_use]
pub fn debug_prints() -> Fix {
    Fix {
        name: "debug-prints",
        targets: TargetSet::Recursive {
            dir: PathBuf::from("lib"),
            extension: "dart".to_string(),
        },
        rules: vec![Rule::comment_out(r"print\s*\(", "// DEBUG: ")],
        per_file_label: "Fixed print statements in",
        total_label: "Total files with print statements fixed",
        done_message: "Print statements have been commented out for production!",
        empty_message: Some("No print statements found to fix."),
    }
}

/// Rewrite `.withOpacity(<number>)` to `.withValues(alpha: <number>)`
/// across `lib/`.
///
/// Matches a bare numeric literal argument only; variables, expressions,
/// and multi-argument calls are left untouched. Once rewritten, the
/// legacy pattern no longer matches, so the fix is idempotent.
#[must_use]
pub fn opacity_deprecations() -> Fix {
    Fix {
        name: "deprecations",
        targets: TargetSet::Recursive {
            dir: PathBuf::from("lib"),
            extension: "dart".to_string(),
        },
        rules: vec![Rule::substitute(
            r"\.withOpacity\(([0-9]*\.?[0-9]+)\)",
            ".withValues(alpha: ${1})",
        )],
        per_file_label: "Fixed",
        total_label: "Total files fixed",
        done_message: "withOpacity deprecations have been fixed!",
        empty_message: Some("No withOpacity calls found to fix."),
    }
}
