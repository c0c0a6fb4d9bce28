//! Review configuration schema.
//!
//! A config file customizes which checks run and which paths are skipped.
//! Checker thresholds and pattern tables are not configurable.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::check::CheckName;

/// Default config file names to search for.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["pyreview.yaml", ".pyreview.yaml"];

/// Review configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReviewConfig {
    #[serde(default)]
    pub version: String,
    /// Per-check enable flags. Checks not listed stay enabled.
    #[serde(default)]
    pub checks: HashMap<CheckName, bool>,
    /// Glob patterns for paths to exclude from review (e.g., "**/migrations/**").
    #[serde(default)]
    pub excluded_paths: Vec<String>,
}

impl ReviewConfig {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ReviewConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Whether a check should run.
    pub fn is_check_enabled(&self, check: CheckName) -> bool {
        self.checks.get(&check).copied().unwrap_or(true)
    }

    /// Check if a path should be excluded based on excluded_paths patterns.
    /// `**` matches recursively.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();

        for pattern in &self.excluded_paths {
            if let Ok(glob) = globset::Glob::new(pattern) {
                if glob.compile_matcher().is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }
}

/// Validate a parsed config: every exclude glob must compile.
pub fn validate(config: &ReviewConfig) -> anyhow::Result<()> {
    for pattern in &config.excluded_paths {
        globset::Glob::new(pattern)
            .map_err(|e| anyhow::anyhow!("invalid exclude pattern {:?}: {}", pattern, e))?;
    }
    Ok(())
}

/// Discover a config file in the current directory.
pub fn discover() -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}
