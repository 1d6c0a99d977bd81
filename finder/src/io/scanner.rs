//! Recursive directory scan for skip markers.

use std::fs;
use std::path::Path;

use anyhow::{Result, anyhow, bail};
use tracing::{debug, info, instrument, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::matcher::SkipMatcher;
use crate::core::patterns::{SUPPORTED_EXTENSIONS, has_supported_extension};
use crate::core::types::SkippedTest;
use crate::io::config::FinderConfig;

/// What to scan: file suffixes to read and directory names to prune.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub extensions: Vec<String>,
    pub exclude_dirs: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: SUPPORTED_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            exclude_dirs: Vec::new(),
        }
    }
}

impl From<&FinderConfig> for ScanOptions {
    fn from(cfg: &FinderConfig) -> Self {
        Self {
            extensions: cfg.active_extensions(),
            exclude_dirs: cfg.exclude_dirs.clone(),
        }
    }
}

/// Walk `dir` recursively and collect every skip marker in supported files.
///
/// Files are visited in file-name order so results are stable across runs.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn find_skipped_tests(dir: &Path, options: &ScanOptions) -> Result<Vec<SkippedTest>> {
    if !dir.exists() {
        bail!("The directory does not exist. Please enter a valid directory path.");
    }
    if !dir.is_dir() {
        return Err(access_error(format!("{} is not a directory", dir.display())));
    }

    let matcher = SkipMatcher::builtin();
    let mut skipped = Vec::new();
    let mut files_scanned = 0usize;

    let walker = WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry, &options.exclude_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.loop_ancestor().is_some() => {
                warn!(error = %err, "skipping symlink loop");
                continue;
            }
            Err(err) => return Err(access_error(err)),
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !has_supported_extension(&name, &options.extensions) {
            continue;
        }

        let bytes = fs::read(entry.path()).map_err(access_error)?;
        let content = String::from_utf8_lossy(&bytes);
        files_scanned += 1;

        let matches = matcher.find(&content);
        if !matches.is_empty() {
            debug!(file = %entry.path().display(), count = matches.len(), "skip markers found");
        }
        skipped.extend(matches.into_iter().map(|m| SkippedTest {
            test_name: m.test_name,
            file_path: entry.path().to_path_buf(),
            line: m.text,
            line_number: m.line_number,
            reason: m.reason,
            pattern: m.pattern,
        }));
    }

    info!(files_scanned, skipped = skipped.len(), "scan complete");
    Ok(skipped)
}

fn is_excluded(entry: &DirEntry, exclude_dirs: &[String]) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    exclude_dirs.iter().any(|dir| *dir == name)
}

fn access_error(err: impl std::fmt::Display) -> anyhow::Error {
    anyhow!("An error occurred while accessing the directory: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, contents).expect("write file");
    }

    #[test]
    fn finds_markers_recursively_in_name_order() {
        let temp = tempdir().expect("tempdir");
        write(temp.path(), "b/suite.test.js", "it.skip('from b', () => {});\n");
        write(
            temp.path(),
            "a/deep/test_x.py",
            "\n@unittest.skip(\"from a\")\ndef test_x(self): pass\n",
        );
        write(temp.path(), "notes.md", "it.skip('ignored', () => {});\n");

        let found = find_skipped_tests(temp.path(), &ScanOptions::default()).expect("scan");
        let names: Vec<&str> = found.iter().map(|t| t.display_name()).collect();
        assert_eq!(names, vec!["from a", "from b"]);
        assert_eq!(found[0].line_number, 2);
        assert!(found[0].file_path.ends_with("a/deep/test_x.py"));
        assert_eq!(found[1].pattern, "jest_skip");
    }

    #[test]
    fn excluded_directories_are_pruned() {
        let temp = tempdir().expect("tempdir");
        write(temp.path(), "node_modules/dep/index.js", "xit('vendored', () => {});\n");
        write(temp.path(), "src/app.test.js", "xit('ours', () => {});\n");

        let options = ScanOptions {
            exclude_dirs: vec!["node_modules".to_string()],
            ..ScanOptions::default()
        };
        let found = find_skipped_tests(temp.path(), &options).expect("scan");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].display_name(), "ours");
    }

    #[test]
    fn custom_extensions_limit_the_scan() {
        let temp = tempdir().expect("tempdir");
        write(temp.path(), "a.rs", "#[ignore]\nfn a() {}\n");
        write(temp.path(), "b.js", "xit('b', () => {});\n");

        let options = ScanOptions {
            extensions: vec![".rs".to_string()],
            exclude_dirs: Vec::new(),
        };
        let found = find_skipped_tests(temp.path(), &options).expect("scan");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].display_name(), "a");
    }

    #[test]
    fn directory_without_markers_is_empty() {
        let temp = tempdir().expect("tempdir");
        write(temp.path(), "lib.rs", "pub fn add(a: u8, b: u8) -> u8 { a + b }\n");
        let found = find_skipped_tests(temp.path(), &ScanOptions::default()).expect("scan");
        assert!(found.is_empty());
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let temp = tempdir().expect("tempdir");
        let mut bytes = b"\xff\xfe garbage\n".to_vec();
        bytes.extend_from_slice(b"xit('still found', () => {});\n");
        fs::write(temp.path().join("bin.js"), bytes).expect("write");
        let found = find_skipped_tests(temp.path(), &ScanOptions::default()).expect("scan");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line_number, 2);
    }

    #[test]
    fn missing_directory_reports_friendly_error() {
        let temp = tempdir().expect("tempdir");
        let err = find_skipped_tests(&temp.path().join("nope"), &ScanOptions::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The directory does not exist. Please enter a valid directory path."
        );
    }

    #[test]
    fn file_root_is_an_access_error() {
        let temp = tempdir().expect("tempdir");
        write(temp.path(), "single.js", "");
        let err = find_skipped_tests(&temp.path().join("single.js"), &ScanOptions::default())
            .unwrap_err();
        assert!(
            err.to_string()
                .starts_with("An error occurred while accessing the directory:")
        );
    }
}
