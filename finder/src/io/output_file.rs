//! Persisting reports to `skipped_tests.<ext>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::types::{OutputFormat, SkippedTest};
use crate::report;

/// Render `tests` in `format` and write them next to the scanned tests.
///
/// The file lands in `output_dir` when given, otherwise in `tests_dir`.
/// Returns the written path.
pub fn write_results_to_file(
    tests: &[SkippedTest],
    tests_dir: &Path,
    output_dir: Option<&Path>,
    format: OutputFormat,
) -> Result<PathBuf> {
    let dir = output_dir.unwrap_or(tests_dir);
    let path = dir.join(format.file_name());
    let contents = report::render(tests, format)?;
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), %format, count = tests.len(), "report written");
    Ok(path)
}
