//! # jvmetrics-walk
//!
//! **Tier 2 (Utilities)**
//!
//! Lists the Java and Kotlin files directly inside a directory.
//!
//! ## What belongs here
//! * Validating the root directory
//! * Non-recursive listing filtered by extension
//! * Deterministic ordering of the listing
//!
//! ## What does NOT belong here
//! * Reading file contents (use jvmetrics-scan)
//! * Recursive traversal or ignore-file handling

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use jvmetrics_types::Language;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("Invalid directory path: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to list {}: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
}

/// Fail unless `root` is an existing directory.
pub fn ensure_directory(root: &Path) -> Result<(), WalkError> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(WalkError::NotADirectory(root.to_path_buf()))
    }
}

/// List `.java` then `.kt` files directly inside `root`.
///
/// Subdirectories are not entered and ignore files are not consulted.
/// Within each language group files are sorted by name, so repeated runs
/// see the same order.
pub fn list_source_files(root: &Path) -> Result<Vec<PathBuf>, WalkError> {
    ensure_directory(root)?;

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.max_depth(Some(1));
    builder.follow_links(false);

    let mut files: Vec<(Language, PathBuf)> = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth().unwrap_or(0) == 0 => {
                return Err(WalkError::List {
                    path: root.to_path_buf(),
                    source,
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let path = entry.into_path();
        if !path.is_file() {
            continue;
        }
        if let Some(lang) = Language::from_path(&path) {
            files.push((lang, path));
        }
    }

    files.sort_by(|(la, a), (lb, b)| {
        la.cmp(lb)
            .then_with(|| a.file_name().cmp(&b.file_name()))
    });
    tracing::info!(root = %root.display(), files = files.len(), "source files listed");
    Ok(files.into_iter().map(|(_, path)| path).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn lists_java_before_kotlin_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.kt", "Z.java", "a.kt", "A.java", "notes.md"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let files = list_source_files(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["A.java", "Z.java", "a.kt", "b.kt"]);
    }

    #[test]
    fn does_not_recurse() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("Deep.java"), "").unwrap();
        fs::write(dir.path().join("Top.java"), "").unwrap();
        let files = list_source_files(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["Top.java"]);
    }

    #[test]
    fn includes_hidden_and_ignored_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "*.java\n").unwrap();
        fs::write(dir.path().join(".Hidden.java"), "").unwrap();
        fs::write(dir.path().join("Seen.java"), "").unwrap();
        let files = list_source_files(dir.path()).unwrap();
        assert_eq!(names(&files), vec![".Hidden.java", "Seen.java"]);
    }

    #[test]
    fn skips_directories_named_like_sources() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("pkg.java")).unwrap();
        let files = list_source_files(dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn rejects_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_source_files(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, WalkError::NotADirectory(_)));
        assert!(err.to_string().starts_with("Invalid directory path"));
    }

    #[test]
    fn rejects_file_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("One.java");
        fs::write(&file, "").unwrap();
        assert!(matches!(
            ensure_directory(&file),
            Err(WalkError::NotADirectory(_))
        ));
    }
}
