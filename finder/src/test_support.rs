//! Test-only helpers for constructing scan results and locating fixtures.

use std::path::{Path, PathBuf};

use crate::core::types::SkippedTest;

/// A deterministic finding with no reason.
pub fn skipped(name: &str, path: &str, line_number: usize) -> SkippedTest {
    SkippedTest {
        test_name: Some(name.to_string()),
        file_path: PathBuf::from(path),
        line: format!("skip({name:?})"),
        line_number,
        reason: None,
        pattern: "fixture",
    }
}

/// Three findings across JavaScript, Python and Ruby files.
pub fn sample_tests() -> Vec<SkippedTest> {
    vec![
        SkippedTest {
            line: "it.skip(\"should skip this test\", () => {})".to_string(),
            reason: Some("Test skipped for refactoring".to_string()),
            pattern: "jest_skip_double",
            ..skipped("should skip this test", "/path/to/test.js", 10)
        },
        SkippedTest {
            line: "@unittest.skip(\"reason\")\ndef test_skipped(self):".to_string(),
            reason: Some("Not implemented yet".to_string()),
            pattern: "unittest_skip",
            ..skipped("another skipped test", "/path/to/test.py", 25)
        },
        SkippedTest {
            line: "it \"ruby test\", skip: true do".to_string(),
            pattern: "rspec_skip_double",
            ..skipped("ruby test", "/path/to/test.rb", 5)
        },
    ]
}

/// `finder/tests/fixtures`, the per-language sample sources.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// A `locked/` directory under `parent` with mode `0o555`.
///
/// Returns `None` when the current user can still write there (e.g. root),
/// since permission bits do not restrict privileged users.
#[cfg(unix)]
pub fn read_only_dir(parent: &Path) -> Option<PathBuf> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let dir = parent.join("locked");
    fs::create_dir(&dir).expect("create locked dir");
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).expect("chmod locked dir");
    if fs::write(dir.join("canary"), "x").is_ok() {
        return None;
    }
    Some(dir)
}
