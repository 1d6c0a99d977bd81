//! Report renderers.
//!
//! File formats (`text`, `json`, `markdown`) are plain strings ready to be
//! written to disk. `console` renders colored output for the terminal.

pub mod console;
pub mod json;
pub mod markdown;
pub mod text;

use anyhow::Result;

use crate::core::types::{OutputFormat, SkippedTest};

/// Render `tests` in the given file format.
pub fn render(tests: &[SkippedTest], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::generate_text_output(tests)),
        OutputFormat::Json => json::generate_json_output(tests),
        OutputFormat::Markdown => Ok(markdown::generate_markdown_output(tests)),
    }
}
