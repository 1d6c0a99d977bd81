//! Filesystem checks used before scanning and writing reports.

use std::fs;
use std::path::Path;

/// Whether `path` exists and can be stat'ed.
pub fn validate_directory(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// Whether the current user can create files in `path`.
///
/// Checked by creating an anonymous temporary file there, which is removed
/// again on drop.
pub fn is_directory_writable(path: &Path) -> bool {
    path.is_dir() && tempfile::tempfile_in(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(unix)]
    use crate::test_support::read_only_dir;

    #[test]
    fn existing_directory_is_valid_and_writable() {
        let temp = tempfile::tempdir().expect("tempdir");
        assert!(validate_directory(temp.path()));
        assert!(is_directory_writable(temp.path()));
    }

    #[test]
    fn missing_path_is_neither() {
        let temp = tempfile::tempdir().expect("tempdir");
        let missing = temp.path().join("missing");
        assert!(!validate_directory(&missing));
        assert!(!is_directory_writable(&missing));
    }

    #[cfg(unix)]
    #[test]
    fn directory_without_write_access_is_not_writable() {
        let temp = tempfile::tempdir().expect("tempdir");
        let Some(locked) = read_only_dir(temp.path()) else {
            return;
        };
        assert!(validate_directory(&locked));
        assert!(!is_directory_writable(&locked));
    }

    #[test]
    fn regular_file_is_not_a_writable_directory() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("file.txt");
        fs::write(&file, "x").expect("write");
        assert!(validate_directory(&file));
        assert!(!is_directory_writable(&file));
    }
}
