//! Shared types for scan results and report formats.
//!
//! These types carry no I/O and are shared by the scanner, the report
//! renderers and the CLI.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Error, bail};

/// A single skip marker found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTest {
    /// First non-empty capture of the matching pattern, if any.
    pub test_name: Option<String>,
    pub file_path: PathBuf,
    /// Full matched text (may span several lines).
    pub line: String,
    /// 1-based line of the match start.
    pub line_number: usize,
    /// Reason capture, only for patterns that capture both a name and a reason.
    pub reason: Option<String>,
    /// Id of the catalog pattern that matched.
    pub pattern: &'static str,
}

impl SkippedTest {
    /// Display name, falling back to a placeholder for unnamed markers.
    pub fn display_name(&self) -> &str {
        match self.test_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNNAMED_TEST,
        }
    }

    /// File name component of `file_path`, or the full path if it has none.
    pub fn file_name(&self) -> String {
        file_name_of(&self.file_path)
    }
}

pub const UNNAMED_TEST: &str = "(unnamed test)";

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// File report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// File extension including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => ".txt",
            OutputFormat::Json => ".json",
            OutputFormat::Markdown => ".md",
        }
    }

    /// Name of the report file written for this format.
    pub fn file_name(self) -> String {
        format!("skipped_tests{}", self.extension())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" => Ok(OutputFormat::Markdown),
            other => {
                let supported: Vec<&str> = OutputFormat::ALL.iter().map(|f| f.as_str()).collect();
                bail!(
                    "Invalid format '{}'. Supported formats: {}",
                    other,
                    supported.join(", ")
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_formats() {
        for format in OutputFormat::ALL {
            let parsed: OutputFormat = format.as_str().parse().expect("parse");
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn rejects_unknown_formats_with_supported_list() {
        for value in ["html", "csv", "xml", "yaml", "invalid", "JSON"] {
            let err = value.parse::<OutputFormat>().unwrap_err().to_string();
            assert!(err.contains(&format!("Invalid format '{value}'")));
            assert!(err.contains("Supported formats: text, json, markdown"));
        }
    }

    #[test]
    fn file_names_follow_extension() {
        assert_eq!(OutputFormat::Text.file_name(), "skipped_tests.txt");
        assert_eq!(OutputFormat::Json.file_name(), "skipped_tests.json");
        assert_eq!(OutputFormat::Markdown.file_name(), "skipped_tests.md");
    }

    #[test]
    fn display_name_falls_back_for_missing_or_empty_names() {
        let mut test = SkippedTest {
            test_name: None,
            file_path: PathBuf::from("a/b.rs"),
            line: "#[ignore]".to_string(),
            line_number: 1,
            reason: None,
            pattern: "rust_ignore",
        };
        assert_eq!(test.display_name(), UNNAMED_TEST);
        test.test_name = Some(String::new());
        assert_eq!(test.display_name(), UNNAMED_TEST);
        test.test_name = Some("named".to_string());
        assert_eq!(test.display_name(), "named");
        assert_eq!(test.file_name(), "b.rs");
    }
}
