//! Single-pass matching of the skip catalog over file contents.

use std::ops::Range;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::{Captures, Regex, RegexBuilder};

use crate::core::patterns::{SKIP_PATTERNS, SkipPattern};

const SIZE_LIMIT_BYTES: usize = 64 * (1 << 20);

/// A raw match of one catalog entry within a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipMatch {
    pub pattern: &'static str,
    pub test_name: Option<String>,
    pub reason: Option<String>,
    pub text: String,
    pub line_number: usize,
}

#[derive(Debug)]
struct Entry {
    pattern: &'static SkipPattern,
    /// Index of the named group wrapping this entry.
    group: usize,
    /// Capture groups belonging to this entry's own source.
    inner: Range<usize>,
}

/// Catalog compiled into one alternation of named groups.
#[derive(Debug)]
pub struct SkipMatcher {
    regex: Regex,
    entries: Vec<Entry>,
}

impl SkipMatcher {
    /// Compile `patterns` in order into a single leftmost-first regex.
    pub fn new(patterns: &'static [SkipPattern]) -> Result<Self> {
        let mut entries = Vec::with_capacity(patterns.len());
        let mut alternatives = Vec::with_capacity(patterns.len());
        let mut next_group = 1;

        for (index, pattern) in patterns.iter().enumerate() {
            let scoped = pattern.scoped_source();
            let inner_count = Regex::new(&scoped)
                .with_context(|| format!("compile pattern {}", pattern.id))?
                .captures_len()
                - 1;
            entries.push(Entry {
                pattern,
                group: next_group,
                inner: next_group + 1..next_group + 1 + inner_count,
            });
            alternatives.push(format!("(?P<p{index}>{scoped})"));
            next_group += inner_count + 1;
        }

        let regex = RegexBuilder::new(&alternatives.join("|"))
            .size_limit(SIZE_LIMIT_BYTES)
            .build()
            .context("compile combined skip pattern")?;
        Ok(Self { regex, entries })
    }

    /// Matcher over the built-in catalog.
    pub fn builtin() -> &'static SkipMatcher {
        static BUILTIN: LazyLock<SkipMatcher> =
            LazyLock::new(|| SkipMatcher::new(SKIP_PATTERNS).expect("built-in catalog compiles"));
        &*BUILTIN
    }

    /// All non-overlapping matches in `content`, in source order.
    pub fn find(&self, content: &str) -> Vec<SkipMatch> {
        let mut matches = Vec::new();
        let mut line_number = 1;
        let mut cursor = 0;

        for caps in self.regex.captures_iter(content) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            line_number += count_newlines(&content.as_bytes()[cursor..whole.start()]);
            cursor = whole.start();

            let Some(entry) = self.entries.iter().find(|e| caps.get(e.group).is_some()) else {
                continue;
            };
            matches.push(SkipMatch {
                pattern: entry.pattern.id,
                test_name: first_non_empty(&caps, entry.inner.clone()),
                reason: entry
                    .pattern
                    .reason_group
                    .and_then(|group| non_empty(&caps, entry.group + group)),
                text: whole.as_str().to_string(),
                line_number,
            });
        }

        matches
    }
}

fn first_non_empty(caps: &Captures<'_>, mut groups: Range<usize>) -> Option<String> {
    groups.find_map(|group| non_empty(caps, group))
}

fn non_empty(caps: &Captures<'_>, group: usize) -> Option<String> {
    caps.get(group)
        .map(|m| m.as_str())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn count_newlines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == b'\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(content: &str) -> Vec<SkipMatch> {
        SkipMatcher::builtin().find(content)
    }

    fn names(matches: &[SkipMatch]) -> Vec<Option<&str>> {
        matches.iter().map(|m| m.test_name.as_deref()).collect()
    }

    #[test]
    fn builtin_catalog_compiles() {
        let matcher = SkipMatcher::builtin();
        assert_eq!(matcher.entries.len(), SKIP_PATTERNS.len());
    }

    #[test]
    fn javascript_skips_report_names_and_lines() {
        let content = "describe('suite', () => {\n  it('runs', () => {});\n  it.skip('skipped one', () => {});\n  test.skip(\"skipped two\", () => {});\n});\n\nxdescribe('whole suite', () => {});\n";
        let matches = find(content);
        assert_eq!(
            names(&matches),
            vec![Some("skipped one"), Some("skipped two"), Some("whole suite")]
        );
        let lines: Vec<usize> = matches.iter().map(|m| m.line_number).collect();
        assert_eq!(lines, vec![3, 4, 7]);
        assert_eq!(matches[0].pattern, "jest_skip");
        assert_eq!(matches[0].text, "it.skip('skipped one',");
    }

    #[test]
    fn earlier_catalog_entry_wins_at_same_offset() {
        let matches = find("it.skip('named', fn)");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].pattern, "jest_skip");

        let matches = find("it.skip(variable)");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].pattern, "mocha_skip");
        assert_eq!(matches[0].test_name, None);
    }

    #[test]
    fn escaped_quotes_stay_in_the_name() {
        let matches = find(r"it.skip('it\'s skipped', () => {})");
        assert_eq!(names(&matches), vec![Some(r"it\'s skipped")]);
    }

    #[test]
    fn empty_names_are_treated_as_missing() {
        let matches = find("it.skip('', () => {})");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].test_name, None);
    }

    #[test]
    fn rspec_reason_is_captured_separately() {
        let content = "it 'waits', skip: 'not ready' do\nend\nit 'pends' do\n  pending 'blocked upstream'\nend\n";
        let matches = find(content);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].test_name.as_deref(), Some("waits"));
        assert_eq!(matches[0].reason.as_deref(), Some("not ready"));
        assert_eq!(matches[1].pattern, "rspec_pending_inside");
        assert_eq!(matches[1].test_name.as_deref(), Some("pends"));
        assert_eq!(matches[1].reason.as_deref(), Some("blocked upstream"));
        assert_eq!(matches[1].line_number, 3);
    }

    #[test]
    fn line_end_markers_match_mid_file() {
        let content = "class Suite {\n    @Disabled\n    @Test\n    void off() {}\n}\n";
        let matches = find(content);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].pattern, "junit5_disabled_simple");
        assert_eq!(matches[0].line_number, 2);
        assert_eq!(matches[0].test_name, None);
    }

    #[test]
    fn rust_ignore_attributes() {
        let content = "#[test]\n#[ignore]\nfn slow() {}\n\n#[test]\n#[ignore = \"needs network\"]\nfn online() {}\n";
        let matches = find(content);
        assert_eq!(names(&matches), vec![Some("slow"), Some("needs network")]);
        assert_eq!(matches[0].line_number, 2);
        assert_eq!(matches[1].line_number, 6);
    }

    #[test]
    fn go_skip_variants() {
        let content = "func TestA(t *testing.T) {\n\tt.Skip(\"flaky\")\n}\n\nfunc TestB(t *testing.T) {\n\tt.SkipNow()\n}\n";
        let matches = find(content);
        assert_eq!(names(&matches), vec![Some("flaky"), Some("TestB")]);
        assert_eq!(matches[1].pattern, "go_skip_now");
        assert_eq!(matches[1].line_number, 5);
    }

    #[test]
    fn gtest_disabled_uses_suite_as_name() {
        let matches = find("DISABLED_TEST(Suite, Case) {\n}\n");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].test_name.as_deref(), Some("Suite"));
        assert_eq!(matches[0].reason, None);
    }

    #[test]
    fn comment_markers_ignore_case() {
        let matches = find("let a = 1;\n// skip: flaky test on CI\n");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].pattern, "skip_comment");
        assert_eq!(matches[0].line_number, 2);
    }

    #[test]
    fn plain_code_has_no_matches() {
        let content = "fn add(a: i32, b: i32) -> i32 {\n    a + b\n}\n";
        assert!(find(content).is_empty());
    }
}
