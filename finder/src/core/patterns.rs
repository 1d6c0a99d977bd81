//! Catalog of skip markers recognised across test frameworks.
//!
//! Order matters: the catalog is compiled into a single leftmost-first
//! alternation, so when two entries match at the same offset the earlier one
//! wins. Framework-specific entries therefore precede the generic ones.

/// Regex flags applied to a single catalog entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternFlags {
    /// `^`/`$` match at line boundaries.
    pub multi_line: bool,
    pub case_insensitive: bool,
}

/// One skip marker recognised by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipPattern {
    pub id: &'static str,
    pub source: &'static str,
    pub flags: PatternFlags,
    /// 1-based capture (within this pattern) holding the skip reason.
    pub reason_group: Option<usize>,
}

impl SkipPattern {
    const fn plain(id: &'static str, source: &'static str) -> Self {
        Self {
            id,
            source,
            flags: PatternFlags {
                multi_line: false,
                case_insensitive: false,
            },
            reason_group: None,
        }
    }

    const fn line_end(id: &'static str, source: &'static str) -> Self {
        let mut pattern = Self::plain(id, source);
        pattern.flags.multi_line = true;
        pattern
    }

    const fn any_case(id: &'static str, source: &'static str) -> Self {
        let mut pattern = Self::plain(id, source);
        pattern.flags.case_insensitive = true;
        pattern
    }

    const fn with_reason(id: &'static str, source: &'static str, group: usize) -> Self {
        let mut pattern = Self::plain(id, source);
        pattern.reason_group = Some(group);
        pattern
    }

    /// Source wrapped in a non-capturing group carrying this entry's flags.
    pub fn scoped_source(&self) -> String {
        let mut flags = String::new();
        if self.flags.multi_line {
            flags.push('m');
        }
        if self.flags.case_insensitive {
            flags.push('i');
        }
        format!("(?{}:{})", flags, self.source)
    }
}

pub const SKIP_PATTERNS: &[SkipPattern] = &[
    // JavaScript / TypeScript (Jest, Mocha, Jasmine, Vitest, Cypress, Puppeteer)
    SkipPattern::plain("jest_skip", r"it\.skip\('((?:\\.|[^'\\])*)',"),
    SkipPattern::plain("jest_skip_double", r#"it\.skip\("((?:\\.|[^"\\])*)","#),
    SkipPattern::plain("jest_skip_template", r"it\.skip\(`((?:\\.|[^`\\])*)`"),
    SkipPattern::plain("test_skip", r"test\.skip\('((?:\\.|[^'\\])*)',"),
    SkipPattern::plain("test_skip_double", r#"test\.skip\("((?:\\.|[^"\\])*)","#),
    SkipPattern::plain("test_skip_template", r"test\.skip\(`((?:\\.|[^`\\])*)`"),
    SkipPattern::plain("xtest", r"xtest\('((?:\\.|[^'\\])*)',"),
    SkipPattern::plain("xtest_double", r#"xtest\("((?:\\.|[^"\\])*)","#),
    SkipPattern::plain("xit", r"xit\('((?:\\.|[^'\\])*)',"),
    SkipPattern::plain("xit_double", r#"xit\("((?:\\.|[^"\\])*)","#),
    SkipPattern::plain("xdescribe", r"xdescribe\('((?:\\.|[^'\\])*)',"),
    SkipPattern::plain("xdescribe_double", r#"xdescribe\("((?:\\.|[^"\\])*)","#),
    SkipPattern::plain("describe_skip", r"describe\.skip\('((?:\\.|[^'\\])*)',"),
    SkipPattern::plain("describe_skip_double", r#"describe\.skip\("((?:\\.|[^"\\])*)","#),
    SkipPattern::plain("mocha_skip", r"it\.skip\("),
    SkipPattern::plain("jasmine_xdescribe", r"xdescribe\("),
    SkipPattern::plain("jasmine_xit", r"xit\("),
    SkipPattern::plain("skip_attribute", r"\.skip\s*=\s*true"),
    SkipPattern::plain("it_todo", r"it\.todo\('((?:\\.|[^'\\])*)',"),
    SkipPattern::plain("it_todo_double", r#"it\.todo\("((?:\\.|[^"\\])*)","#),
    SkipPattern::plain("test_todo", r"test\.todo\('((?:\\.|[^'\\])*)',"),
    SkipPattern::plain("test_todo_double", r#"test\.todo\("((?:\\.|[^"\\])*)","#),
    // Python (unittest, pytest, nose)
    SkipPattern::plain("unittest_skip", r#"@unittest\.skip\("((?:\\.|[^"\\])*)"\)"#),
    SkipPattern::plain("unittest_skip_single", r"@unittest\.skip\('((?:\\.|[^'\\])*)'\)"),
    SkipPattern::plain("unittest_skip_if", r#"@unittest\.skipIf\([^,]+,\s*"((?:\\.|[^"\\])*)"\)"#),
    SkipPattern::plain(
        "unittest_skip_unless",
        r#"@unittest\.skipUnless\([^,]+,\s*"((?:\\.|[^"\\])*)"\)"#,
    ),
    SkipPattern::plain("pytest_skip", r#"@pytest\.mark\.skip\(reason="((?:\\.|[^"\\])*)"\)"#),
    SkipPattern::line_end("pytest_skip_simple", r"@pytest\.mark\.skip\s*$"),
    SkipPattern::plain(
        "pytest_skipif",
        r#"@pytest\.mark\.skipif\([^,]+,\s*reason="((?:\\.|[^"\\])*)"\)"#,
    ),
    SkipPattern::plain("pytest_xfail", r#"@pytest\.mark\.xfail\(reason="((?:\\.|[^"\\])*)"\)"#),
    SkipPattern::line_end("pytest_xfail_simple", r"@pytest\.mark\.xfail\s*$"),
    SkipPattern::plain("nose_skip", r#"@skip\("((?:\\.|[^"\\])*)"\)"#),
    SkipPattern::plain("nose_skip_if", r#"@skipIf\([^,]+,\s*"((?:\\.|[^"\\])*)"\)"#),
    SkipPattern::plain("nose_skip_unless", r#"@skipUnless\([^,]+,\s*"((?:\\.|[^"\\])*)"\)"#),
    // Ruby (RSpec, Minitest)
    SkipPattern::plain("rspec_skip", r"it\s+'([^']*)',\s*skip:\s*true"),
    SkipPattern::plain("rspec_skip_double", r#"it\s+"([^"]*)",\s*skip:\s*true"#),
    SkipPattern::with_reason("rspec_skip_reason", r"it\s+'([^']*)',\s*skip:\s*'([^']*)'", 2),
    SkipPattern::with_reason(
        "rspec_skip_reason_double",
        r#"it\s+"([^"]*)",\s*skip:\s*"([^"]*)""#,
        2,
    ),
    SkipPattern::with_reason(
        "rspec_pending_inside",
        r"it\s+'([^']*)'\s+do\s*\n\s*pending\s+'([^']*)'",
        2,
    ),
    SkipPattern::plain("rspec_xdescribe", r"xdescribe\s+'([^']*)'"),
    SkipPattern::plain("rspec_xdescribe_double", r#"xdescribe\s+"([^"]*)""#),
    SkipPattern::plain("rspec_xit", r"xit\s+'([^']*)'"),
    SkipPattern::plain("rspec_xit_double", r#"xit\s+"([^"]*)""#),
    SkipPattern::plain("minitest_skip", r#"skip\("((?:\\.|[^"\\])*)"\)"#),
    SkipPattern::line_end("minitest_skip_simple", r"skip\s*$"),
    // Java (JUnit 4, JUnit 5, TestNG); also covers Kotlin, Groovy and Selenium suites
    SkipPattern::plain("junit4_ignore", r#"@Ignore\("((?:\\.|[^"\\])*)"\)"#),
    SkipPattern::line_end("junit4_ignore_simple", r"@Ignore\s*$"),
    SkipPattern::plain("junit5_disabled", r#"@Disabled\("((?:\\.|[^"\\])*)"\)"#),
    SkipPattern::line_end("junit5_disabled_simple", r"@Disabled\s*$"),
    SkipPattern::plain("junit5_disabled_if", r"@DisabledIf\([^)]+\)"),
    SkipPattern::plain("junit5_disabled_unless", r"@DisabledUnless\([^)]+\)"),
    SkipPattern::plain("junit5_disabled_on_os", r"@DisabledOnOs\([^)]+\)"),
    SkipPattern::plain("junit5_disabled_on_jre", r"@DisabledOnJre\([^)]+\)"),
    SkipPattern::plain("testng_ignore", r"@Test\([^)]*enabled\s*=\s*false[^)]*\)"),
    // C# (NUnit, MSTest, xUnit)
    SkipPattern::plain("nunit_ignore", r#"\[Ignore\("((?:\\.|[^"\\])*)"\)\]"#),
    SkipPattern::plain("nunit_ignore_simple", r"\[Ignore\]\s*\n\s*public\s+void\s+(\w+)"),
    SkipPattern::plain("nunit_ignore_attribute", r#"\[IgnoreAttribute\("((?:\\.|[^"\\])*)"\)\]"#),
    SkipPattern::plain("xunit_fact_skip", r#"\[Fact\(Skip\s*=\s*"((?:\\.|[^"\\])*)"\)\]"#),
    SkipPattern::plain("xunit_theory_skip", r#"\[Theory\(Skip\s*=\s*"((?:\\.|[^"\\])*)"\)\]"#),
    // C++ (GoogleTest, Catch2)
    SkipPattern::plain("gtest_disabled", r"DISABLED_TEST\(((?:\\.|[^,)])*),\s*((?:\\.|[^)])*)\)"),
    SkipPattern::plain("gtest_skip", r#"SKIP_TEST\("((?:\\.|[^"\\])*)"\)"#),
    SkipPattern::plain("catch2_skip", r"TEST_CASE\([^)]*\[\.skip\]"),
    SkipPattern::plain("catch2_hide", r"TEST_CASE\([^)]*\[\.hide\]"),
    // Go
    SkipPattern::plain("go_skip", r#"t\.Skip\("([^"]*)"\)"#),
    SkipPattern::plain("go_skip_simple", r"func\s+(\w+)\([^)]*\)\s*\{[^}]*t\.Skip\(\)"),
    SkipPattern::plain("go_skipf", r#"t\.Skipf\("([^"]*)""#),
    SkipPattern::plain("go_skip_now", r"func\s+(\w+)\([^)]*\)\s*\{[^}]*t\.SkipNow\(\)"),
    // PHP (PHPUnit)
    SkipPattern::plain("phpunit_skip", r"\$this->markTestSkipped\('((?:\\.|[^'\\])*)'\)"),
    SkipPattern::plain("phpunit_skip_double", r#"\$this->markTestSkipped\("((?:\\.|[^"\\])*)"\)"#),
    SkipPattern::plain("phpunit_incomplete", r"\$this->markTestIncomplete\('((?:\\.|[^'\\])*)'\)"),
    SkipPattern::plain(
        "phpunit_incomplete_double",
        r#"\$this->markTestIncomplete\("((?:\\.|[^"\\])*)"\)"#,
    ),
    SkipPattern::plain("phpunit_skip_annotation", r"@skip\s+(.*)"),
    // Rust
    SkipPattern::plain("rust_ignore", r"#\[ignore\]\s*\n\s*fn\s+(\w+)"),
    SkipPattern::plain("rust_ignore_reason", r#"#\[ignore\s*=\s*"([^"]*)"\]"#),
    // Swift (XCTest)
    SkipPattern::plain("xct_skip", r#"XCTSkip\("((?:\\.|[^"\\])*)"\)"#),
    SkipPattern::plain("xct_skip_simple", r"XCTSkip\(\)"),
    // Scala (ScalaTest)
    SkipPattern::plain("scalatest_ignore", r#"ignore\("((?:\\.|[^"\\])*)"\)"#),
    SkipPattern::plain("scalatest_pending", r"pending"),
    // Dart
    SkipPattern::plain("dart_skip", r#"skip:\s*"((?:\\.|[^"\\])*)""#),
    SkipPattern::plain("dart_skip_simple", r"skip:\s*true"),
    // Groovy (Spock, Geb)
    SkipPattern::plain("spock_ignore_rest", r"@IgnoreRest"),
    SkipPattern::plain("groovy_xscenario", r#"\.xscenario\("((?:\\.|[^"\\])*)"?\)"#),
    // Perl (Test::More)
    SkipPattern::plain("perl_skip", r#"SKIP:\s*\{\s*skip\s+"((?:\\.|[^"\\])*)""#),
    SkipPattern::plain("perl_todo", r#"TODO:\s*\{\s*local\s+\$TODO\s*=\s*"((?:\\.|[^"\\])*)""#),
    // Elixir (ExUnit)
    SkipPattern::plain("exunit_skip", r"@tag\s+:skip"),
    SkipPattern::plain("exunit_skip_reason", r#"@tag\s+skip:\s*"((?:\\.|[^"\\])*)""#),
    // Clojure
    SkipPattern::plain("clojure_skip", r"\^:skip"),
    // Playwright
    SkipPattern::plain("playwright_fixme", r"test\.fixme\('((?:\\.|[^'\\])*)',"),
    SkipPattern::plain("playwright_fixme_double", r#"test\.fixme\("((?:\\.|[^"\\])*)","#),
    // Robot Framework
    SkipPattern::any_case("robot_skip", r"\[Tags\]\s+skip"),
    // Generic markers
    SkipPattern::plain("test_ignore_call", r"Test\.(Ignore|Ignored)\(\)"),
    SkipPattern::any_case("skip_comment", r"//\s*SKIP:?\s*.*test.*|//\s*.*test.*SKIP:?"),
    SkipPattern::any_case("todo_comment", r"//\s*TODO:?\s*.*test.*|//\s*.*test.*TODO:?"),
    SkipPattern::any_case("fixme_comment", r"//\s*FIXME:?\s*.*test.*|//\s*.*test.*FIXME:?"),
    SkipPattern::any_case("hash_skip_comment", r"#\s*SKIP:?\s*.*test.*|#\s*.*test.*SKIP:?"),
    SkipPattern::any_case("hash_todo_comment", r"#\s*TODO:?\s*.*test.*|#\s*.*test.*TODO:?"),
    SkipPattern::any_case("hash_fixme_comment", r"#\s*FIXME:?\s*.*test.*|#\s*.*test.*FIXME:?"),
];

/// File name suffixes selected for scanning.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    // JavaScript/TypeScript
    ".js", ".ts", ".jsx", ".tsx", ".mjs", ".cjs", ".coffee",
    // Python
    ".py", ".pyi", ".pyw",
    // Ruby
    ".rb", ".rbw",
    // JVM
    ".java", ".kt", ".kts", ".scala", ".groovy", ".gradle",
    // C/C++
    ".c", ".cpp", ".cxx", ".cc", ".c++", ".h", ".hpp", ".hxx",
    // C#
    ".cs", ".csx",
    ".go",
    // PHP
    ".php", ".phtml", ".php3", ".php4", ".php5", ".phps",
    ".rs",
    ".swift",
    ".dart",
    // Perl
    ".pl", ".pm", ".t",
    // Elixir
    ".ex", ".exs",
    // Clojure
    ".clj", ".cljs", ".cljc", ".edn",
    // Robot Framework
    ".robot", ".resource",
    ".feature", ".spec", ".test",
];

/// Whether `file_name` ends with one of `extensions`.
pub fn has_supported_extension<S: AsRef<str>>(file_name: &str, extensions: &[S]) -> bool {
    extensions
        .iter()
        .any(|ext| file_name.ends_with(ext.as_ref()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_and_sources_are_unique() {
        let mut ids = HashSet::new();
        let mut sources = HashSet::new();
        for pattern in SKIP_PATTERNS {
            assert!(ids.insert(pattern.id), "duplicate id {}", pattern.id);
            assert!(
                sources.insert(pattern.source),
                "duplicate source for {}",
                pattern.id
            );
        }
    }

    #[test]
    fn every_pattern_compiles_on_its_own() {
        for pattern in SKIP_PATTERNS {
            regex::Regex::new(&pattern.scoped_source())
                .unwrap_or_else(|err| panic!("{} failed to compile: {err}", pattern.id));
        }
    }

    #[test]
    fn reason_groups_exist() {
        for pattern in SKIP_PATTERNS {
            if let Some(group) = pattern.reason_group {
                let regex = regex::Regex::new(pattern.source).expect("compile");
                assert!(group < regex.captures_len(), "{}", pattern.id);
            }
        }
    }

    #[test]
    fn scoped_source_carries_flags() {
        let pattern = SkipPattern::line_end("x", "a$");
        assert_eq!(pattern.scoped_source(), "(?m:a$)");
        let pattern = SkipPattern::any_case("x", "a");
        assert_eq!(pattern.scoped_source(), "(?i:a)");
        let pattern = SkipPattern::plain("x", "a|b");
        assert_eq!(pattern.scoped_source(), "(?:a|b)");
    }

    #[test]
    fn extension_match_is_suffix_based() {
        assert!(has_supported_extension("suite.spec.js", SUPPORTED_EXTENSIONS));
        assert!(has_supported_extension("basic.t", SUPPORTED_EXTENSIONS));
        assert!(has_supported_extension("lib.c++", SUPPORTED_EXTENSIONS));
        assert!(!has_supported_extension("README.md", SUPPORTED_EXTENSIONS));
        assert!(!has_supported_extension("Cargo.toml", SUPPORTED_EXTENSIONS));
    }
}
