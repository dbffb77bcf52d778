//! Configuration file schema for codegauge.
//!
//! A config file sets the quality threshold and controls which files a
//! directory scan picks up. Every field is optional.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::language::Language;
use crate::score::DEFAULT_THRESHOLD;

/// File names searched for, in order, when no config path is given.
pub const CONFIG_FILE_NAMES: &[&str] = &["codegauge.yaml", ".codegauge.yaml", "codegauge.yml"];

/// Extensions collected from directories when the config names none.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "py", "c", "h", "cpp", "cc", "cxx", "hpp", "hh", "js", "mjs", "cjs", "jsx",
];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub name: String,
    /// Minimum acceptable quality score (default: 60)
    #[serde(default = "default_threshold")]
    pub threshold: i32,
    /// Forced language, or "auto" (default) to detect per file
    #[serde(default)]
    pub language: Option<String>,
    /// With a forced language, treat a detection mismatch as an error
    #[serde(default)]
    pub strict: bool,
    /// File extensions collected from directories (without the dot)
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Glob patterns for paths to exclude (e.g., "**/third_party/**")
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    /// Include identifier counts in JSON output (default: false)
    #[serde(default)]
    pub token_frequency: bool,
}

fn default_threshold() -> i32 {
    DEFAULT_THRESHOLD
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: String::new(),
            name: String::new(),
            threshold: DEFAULT_THRESHOLD,
            language: None,
            strict: false,
            extensions: Vec::new(),
            excluded_paths: Vec::new(),
            token_frequency: false,
        }
    }
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Find a config file in `dir` by the well-known names.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// The forced language, or `None` for automatic detection.
    pub fn language(&self) -> anyhow::Result<Option<Language>> {
        match self.language.as_deref() {
            None | Some("auto") | Some("") => Ok(None),
            Some(name) => name
                .parse::<Language>()
                .map(Some)
                .map_err(|e| anyhow::anyhow!("invalid language {:?}: {}", name, e)),
        }
    }

    /// Extensions to collect, falling back to [`DEFAULT_EXTENSIONS`].
    pub fn extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            return DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect();
        }
        self.extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .collect()
    }

    /// Check if a path should be excluded based on excluded_paths patterns.
    /// Uses globset for matching, which supports `**` for recursive directory matching.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();

        for pattern in &self.excluded_paths {
            if let Ok(glob) = globset::Glob::new(pattern) {
                let matcher = glob.compile_matcher();
                if matcher.is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }
}

/// Validate a config for correctness.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    if !(0..=100).contains(&config.threshold) {
        anyhow::bail!(
            "invalid threshold {}, must be between 0 and 100",
            config.threshold
        );
    }

    config.language()?;

    for pattern in &config.excluded_paths {
        globset::Glob::new(pattern)
            .map_err(|e| anyhow::anyhow!("invalid excluded_paths pattern {:?}: {}", pattern, e))?;
    }

    Ok(())
}
