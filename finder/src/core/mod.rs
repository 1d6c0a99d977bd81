//! Pure logic: the skip catalog, matching, grouping and formatting helpers.
//!
//! Nothing under `core` touches the filesystem or the terminal.

pub mod ansi;
pub mod group;
pub mod language;
pub mod matcher;
pub mod patterns;
pub mod types;
