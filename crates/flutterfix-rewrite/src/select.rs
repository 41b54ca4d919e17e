//! Target file selection.
//!
//! A fix either names its files outright or scans a subdirectory for an
//! extension. Enumeration order of the scan is filesystem-dependent and
//! not guaranteed sorted.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// The set of files a fix operates on.
#[derive(Debug, Clone)]
pub enum TargetSet {
    /// A fixed list of root-relative paths.
    ///
    /// Entries that do not exist are silently skipped, not reported as
    /// errors.
    Explicit(Vec<PathBuf>),

    /// Every file under `dir` (recursively) with the given extension.
    Recursive {
        /// Root-relative directory to scan.
        dir: PathBuf,
        /// Extension filter, without the leading dot (e.g. `dart`).
        extension: String,
    },
}

impl TargetSet {
    /// Resolve this set against a project root into concrete paths.
    #[must_use]
    pub fn resolve(&self, root: &Path) -> Vec<PathBuf> {
        match self {
            Self::Explicit(paths) => paths
                .iter()
                .map(|rel| root.join(rel))
                .filter(|path| path.exists())
                .collect(),
            Self::Recursive { dir, extension } => {
                let base = root.join(dir);
                tracing::debug!(dir = %base.display(), extension = %extension, "scanning for targets");

                ignore::WalkBuilder::new(&base)
                    .build()
                    .filter_map(|result| {
                        let entry = match result {
                            Ok(e) => e,
                            Err(_) => return None,
                        };
                        let path = entry.path();
                        if !path.is_file() {
                            return None;
                        }
                        if path.extension().and_then(OsStr::to_str) != Some(extension.as_str()) {
                            return None;
                        }
                        Some(path.to_path_buf())
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_skips_missing_entries() {
        let dir = TempDir::new().expect("Create temp dir");
        std::fs::write(dir.path().join("present.dart"), "").expect("Write fixture");

        let targets = TargetSet::Explicit(vec![
            PathBuf::from("present.dart"),
            PathBuf::from("missing.dart"),
        ]);

        let resolved = targets.resolve(dir.path());
        assert_eq!(resolved, vec![dir.path().join("present.dart")]);
    }

    #[test]
    fn test_recursive_filters_by_extension() {
        let dir = TempDir::new().expect("Create temp dir");
        let lib = dir.path().join("lib");
        std::fs::create_dir_all(lib.join("screens")).expect("Create tree");
        std::fs::write(lib.join("main.dart"), "").expect("Write fixture");
        std::fs::write(lib.join("screens/home.dart"), "").expect("Write fixture");
        std::fs::write(lib.join("notes.txt"), "").expect("Write fixture");

        let targets = TargetSet::Recursive {
            dir: PathBuf::from("lib"),
            extension: "dart".to_string(),
        };

        let mut resolved = targets.resolve(dir.path());
        resolved.sort();
        assert_eq!(
            resolved,
            vec![lib.join("main.dart"), lib.join("screens/home.dart")]
        );
    }

    #[test]
    fn test_recursive_missing_dir_is_empty() {
        let dir = TempDir::new().expect("Create temp dir");
        let targets = TargetSet::Recursive {
            dir: PathBuf::from("lib"),
            extension: "dart".to_string(),
        };
        assert!(targets.resolve(dir.path()).is_empty());
    }
}
