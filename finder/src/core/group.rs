//! Grouping of scan results for the reports.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::core::language::console_language;
use crate::core::types::SkippedTest;

/// Findings grouped by file path, preserving scan order within each file.
pub fn group_by_file(tests: &[SkippedTest]) -> BTreeMap<&Path, Vec<&SkippedTest>> {
    let mut groups: BTreeMap<&Path, Vec<&SkippedTest>> = BTreeMap::new();
    for test in tests {
        groups.entry(test.file_path.as_path()).or_default().push(test);
    }
    groups
}

/// Findings grouped by console language label, keys sorted.
pub fn group_by_language(tests: &[SkippedTest]) -> BTreeMap<String, Vec<&SkippedTest>> {
    let mut groups: BTreeMap<String, Vec<&SkippedTest>> = BTreeMap::new();
    for test in tests {
        groups
            .entry(console_language(&test.file_path))
            .or_default()
            .push(test);
    }
    groups
}

pub fn distinct_files(tests: &[SkippedTest]) -> usize {
    tests
        .iter()
        .map(|test| test.file_path.as_path())
        .collect::<BTreeSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::skipped;

    #[test]
    fn groups_by_file_and_language() {
        let tests = vec![
            skipped("one", "/repo/b.js", 3),
            skipped("two", "/repo/a.py", 1),
            skipped("three", "/repo/b.js", 9),
            skipped("four", "/repo/c.ts", 2),
        ];

        let by_file = group_by_file(&tests);
        let files: Vec<&Path> = by_file.keys().copied().collect();
        assert_eq!(
            files,
            vec![
                Path::new("/repo/a.py"),
                Path::new("/repo/b.js"),
                Path::new("/repo/c.ts")
            ]
        );
        let names: Vec<&str> = by_file[Path::new("/repo/b.js")]
            .iter()
            .map(|test| test.display_name())
            .collect();
        assert_eq!(names, vec!["one", "three"]);

        let by_language = group_by_language(&tests);
        let languages: Vec<&str> = by_language.keys().map(String::as_str).collect();
        assert_eq!(languages, vec!["JavaScript", "Python", "TypeScript"]);
        assert_eq!(distinct_files(&tests), 3);
    }

    #[test]
    fn empty_input_groups_to_nothing() {
        assert!(group_by_file(&[]).is_empty());
        assert!(group_by_language(&[]).is_empty());
        assert_eq!(distinct_files(&[]), 0);
    }
}
