//! Rewrite rules: pattern/replacement pairs applied to file text.
//!
//! Rules are purely textual. None of them parse Dart; a rule sees exactly
//! what its regex sees, one match or one line at a time.

use regex::Regex;

/// Line comment prefix that marks a line as already handled.
const LINE_COMMENT: &str = "//";

/// A single source-text rewrite.
///
/// Rules are applied in caller-defined order; later rules see the output
/// of earlier rules.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Regex substitution over the whole file content.
    ///
    /// The replacement template may reference capture groups (`${1}`,
    /// `${2}`, ...). Every non-overlapping match is replaced.
    Substitute {
        /// Pattern with capture groups.
        pattern: Regex,
        /// Replacement template.
        replacement: String,
    },

    /// Line-scoped comment-out.
    ///
    /// Each line matching `trigger` is replaced by an identically-indented
    /// line prefixed with `marker`; lines already starting with `//` are
    /// left untouched, which is what makes a second pass a no-op.
    /// Indentation is re-emitted as spaces of the original width.
    CommentOut {
        /// Pattern selecting lines to comment out.
        trigger: Regex,
        /// Comment marker inserted between the indentation and the line.
        marker: String,
    },
}

impl Rule {
    /// Build a whole-content substitution rule.
    #[must_use]
    pub fn substitute(pattern: &str, replacement: &str) -> Self {
        Self::Substitute {
            pattern: compile_pattern(pattern),
            replacement: replacement.to_string(),
        }
    }

    /// Build a line-scoped comment-out rule.
    #[must_use]
    pub fn comment_out(trigger: &str, marker: &str) -> Self {
        Self::CommentOut {
            trigger: compile_pattern(trigger),
            marker: marker.to_string(),
        }
    }

    /// Apply this rule to `content`, returning the rewritten text.
    #[must_use]
    pub fn apply(&self, content: &str) -> String {
        match self {
            Self::Substitute {
                pattern,
                replacement,
            } => pattern.replace_all(content, replacement.as_str()).into_owned(),
            Self::CommentOut { trigger, marker } => comment_out_lines(trigger, marker, content),
        }
    }
}

/// Comment out every triggering line, preserving the rest byte-for-byte.
fn comment_out_lines(trigger: &Regex, marker: &str, content: &str) -> String {
    let mut out = String::with_capacity(content.len());

    for line in content.split_inclusive('\n') {
        let stripped = line.trim_start();
        if trigger.is_match(line) && !stripped.starts_with(LINE_COMMENT) {
            // Indentation width is counted in characters and re-emitted as
            // spaces, tabs included.
            let indent = line.chars().count() - stripped.chars().count();
            out.push_str(&" ".repeat(indent));
            out.push_str(marker);
            out.push_str(stripped);
        } else {
            out.push_str(line);
        }
    }

    out
}

/// Compile a fixed rule pattern.
///
/// The rule tables are hardcoded, so a pattern failing to compile cannot
/// happen for shipped rules; the fallback degrades to a never-matching
/// regex rather than unwinding mid-run.
fn compile_pattern(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_pattern_err) => match Regex::new(r"$^") {
            Ok(fallback) => fallback,
            Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
        },
    }
}
