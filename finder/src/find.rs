//! One scan from start banner to report, shared by the CLI and the prompts.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::types::OutputFormat;
use crate::io::output_file::write_results_to_file;
use crate::io::scanner::{ScanOptions, find_skipped_tests};
use crate::report::console::{
    render_file_written, render_nothing_written, render_results, render_scan_start,
};

/// Where the results go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Console,
    File(OutputFormat),
}

#[derive(Debug, Clone)]
pub struct FindRequest {
    pub tests_dir: PathBuf,
    pub mode: OutputMode,
    /// File reports only; defaults to `tests_dir`.
    pub output_dir: Option<PathBuf>,
    pub scan: ScanOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindOutcome {
    Printed { found: usize },
    Written { path: PathBuf, found: usize },
    /// File mode with no findings: no file is created.
    NothingToWrite,
}

/// Scan `request.tests_dir` and deliver the results, narrating to `out`.
pub fn run_find<W: Write>(request: &FindRequest, out: &mut W) -> Result<FindOutcome> {
    write!(out, "{}", render_scan_start(&request.tests_dir)).context("write console output")?;

    let tests = find_skipped_tests(&request.tests_dir, &request.scan)?;

    let outcome = match request.mode {
        OutputMode::Console => {
            write!(out, "{}", render_results(&tests)).context("write console output")?;
            FindOutcome::Printed { found: tests.len() }
        }
        OutputMode::File(_) if tests.is_empty() => {
            write!(out, "{}", render_nothing_written()).context("write console output")?;
            FindOutcome::NothingToWrite
        }
        OutputMode::File(format) => {
            let path = write_results_to_file(
                &tests,
                &request.tests_dir,
                request.output_dir.as_deref(),
                format,
            )?;
            write!(out, "{}", render_file_written(&path, format, tests.len()))
                .context("write console output")?;
            info!(path = %path.display(), %format, "report saved");
            FindOutcome::Written {
                path,
                found: tests.len(),
            }
        }
    };

    out.flush().context("flush console output")?;
    Ok(outcome)
}
