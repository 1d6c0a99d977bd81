//! JSON report grouped by file.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::core::group::group_by_file;
use crate::core::types::{SkippedTest, file_name_of};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    total_skipped_tests: usize,
    files_with_skipped_tests: usize,
    generated_at: String,
    /// Keyed by file name; a later file sharing a name is keyed by its full path.
    summary: BTreeMap<String, FileSummary<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FileSummary<'a> {
    file_path: String,
    skipped_tests_count: usize,
    tests: Vec<JsonTest<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonTest<'a> {
    test_name: Option<&'a str>,
    line_number: usize,
    line: &'a str,
    reason: Option<&'a str>,
    pattern: &'a str,
}

pub fn generate_json_output(tests: &[SkippedTest]) -> Result<String> {
    generate_json_output_at(tests, Utc::now())
}

/// Same as [`generate_json_output`] with a fixed timestamp.
pub fn generate_json_output_at(
    tests: &[SkippedTest],
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let grouped = group_by_file(tests);
    let mut summary = BTreeMap::new();

    for (path, file_tests) in &grouped {
        let name = file_name_of(path);
        let key = if summary.contains_key(&name) {
            path.display().to_string()
        } else {
            name
        };
        summary.insert(
            key,
            FileSummary {
                file_path: path.display().to_string(),
                skipped_tests_count: file_tests.len(),
                tests: file_tests
                    .iter()
                    .map(|test| JsonTest {
                        test_name: test.test_name.as_deref(),
                        line_number: test.line_number,
                        line: &test.line,
                        reason: test.reason.as_deref(),
                        pattern: test.pattern,
                    })
                    .collect(),
            },
        );
    }

    let report = JsonReport {
        total_skipped_tests: tests.len(),
        files_with_skipped_tests: grouped.len(),
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        summary,
    };
    serde_json::to_string_pretty(&report).context("serialize json report")
}
