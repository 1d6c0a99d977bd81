//! Optional scan configuration stored in `.skipped-tests.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::patterns::SUPPORTED_EXTENSIONS;

/// File name looked up in the scanned directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".skipped-tests.toml";

/// Finder configuration (TOML).
///
/// Every field is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FinderConfig {
    /// Replaces the built-in extension list when non-empty.
    pub extensions: Vec<String>,

    /// Appended to the active extension list.
    pub extra_extensions: Vec<String>,

    /// Directory names that are never descended into (e.g. `node_modules`).
    pub exclude_dirs: Vec<String>,

    /// Default output directory for file reports.
    pub output_dir: Option<PathBuf>,
}

impl FinderConfig {
    pub fn validate(&self) -> Result<()> {
        for ext in self.extensions.iter().chain(&self.extra_extensions) {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(anyhow!(
                    "extension {ext:?} must start with '.' and name a suffix"
                ));
            }
        }
        if self.exclude_dirs.iter().any(|dir| dir.trim().is_empty()) {
            return Err(anyhow!("exclude_dirs entries must be non-empty"));
        }
        Ok(())
    }

    /// Extension list in effect after applying overrides.
    pub fn active_extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = if self.extensions.is_empty() {
            SUPPORTED_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
        } else {
            self.extensions.clone()
        };
        for ext in &self.extra_extensions {
            if !extensions.contains(ext) {
                extensions.push(ext.clone());
            }
        }
        extensions
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `FinderConfig::default()`.
pub fn load_config(path: &Path) -> Result<FinderConfig> {
    if !path.exists() {
        return Ok(FinderConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FinderConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Resolve the config for a scan: explicit path first, then the scanned directory.
pub fn resolve_config(explicit: Option<&Path>, scan_dir: &Path) -> Result<FinderConfig> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(anyhow!("config file {} not found", path.display()));
            }
            load_config(path)
        }
        None => load_config(&scan_dir.join(CONFIG_FILE_NAME)),
    }
}
