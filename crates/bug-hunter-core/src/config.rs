//! Settings loading for Bug Hunter.
//!
//! Settings live in a YAML file at the project root (`bug-hunter.yml`). A
//! missing file is not an error: every field has a default, so a fresh
//! checkout loads a usable configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Default settings file name, resolved relative to the project root.
pub const DEFAULT_SETTINGS_FILE: &str = "bug-hunter.yml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Top-level Bug Hunter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HunterConfig {
    /// Application version the installation reports.
    pub version: String,
    pub similarity: SimilaritySettings,
    pub performance: PerformanceSettings,
}

impl Default for HunterConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            similarity: SimilaritySettings::default(),
            performance: PerformanceSettings::default(),
        }
    }
}

/// Tuning for the duplicate-detection similarity engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilaritySettings {
    /// Scores at or above this value mark two reports as duplicates.
    pub min_score: f64,
    /// Upper bound on cached score entries.
    pub max_cache_entries: usize,
}

impl Default for SimilaritySettings {
    fn default() -> Self {
        Self {
            min_score: 0.5,
            max_cache_entries: 10_000,
        }
    }
}

/// Performance toggles for the triage pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceSettings {
    pub enable_similarity_cache: bool,
    pub enable_async_processing: bool,
    pub enable_batch_processing: bool,
}

impl Default for PerformanceSettings {
    fn default() -> Self {
        Self {
            enable_similarity_cache: true,
            enable_async_processing: true,
            enable_batch_processing: false,
        }
    }
}

impl HunterConfig {
    /// Loads settings from `path`, falling back to defaults when the file
    /// does not exist. Read and parse failures are reported as errors.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "settings file absent, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), version = %config.version, "loaded settings");
        Ok(config)
    }
}

/// Narrow contract through which the checkup engine obtains settings.
///
/// Probes hold a shared handle to a provider instead of reading files
/// themselves, so tests can substitute fixed settings.
pub trait SettingsProvider: Send + Sync {
    fn load(&self) -> anyhow::Result<HunterConfig>;
}

/// Loads settings from a YAML file on every call.
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsProvider for FileSettings {
    fn load(&self) -> anyhow::Result<HunterConfig> {
        Ok(HunterConfig::load(&self.path)?)
    }
}

/// Fixed in-memory settings, used by tests and fallbacks.
pub struct StaticSettings(pub HunterConfig);

impl SettingsProvider for StaticSettings {
    fn load(&self) -> anyhow::Result<HunterConfig> {
        Ok(self.0.clone())
    }
}
