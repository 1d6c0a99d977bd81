//! Stable exit codes for the finder CLI.

/// Scan completed (whether or not skipped tests were found).
pub const OK: i32 = 0;
/// Invalid arguments, unreadable directory, or failure writing the report.
pub const INVALID: i32 = 1;
