//! I/O helpers: directory scanning, config loading and report files.

pub mod config;
pub mod output_file;
pub mod paths;
pub mod scanner;
