//! Find skipped, ignored and disabled tests across a source tree.
//!
//! A catalog of per-framework skip markers is compiled into a single regex and
//! run over every supported file below a directory. The crate keeps a strict
//! separation:
//!
//! - **[`core`]**: Pure logic (pattern catalog, matching, grouping, language
//!   names). No I/O.
//! - **[`io`]**: Filesystem work (directory walk, config loading, report files).
//! - **[`report`]**: Renderers for console, text, JSON and Markdown output.
//!
//! [`find`] ties a scan to its output mode; [`interactive`] supplies the prompts
//! the CLI falls back to when arguments are missing.

pub mod core;
pub mod exit_codes;
pub mod find;
pub mod interactive;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
