//! # bug-hunter-core
//!
//! Core functionality for Bug Hunter, a duplicate bug triage tool.
//!
//! This crate provides:
//! - Settings loading and management
//! - The bug report data model
//! - The text-similarity engine used for duplicate detection
//! - The installation checkup engine (`checkup` / `probes`)

mod bug_report;
mod checkup;
mod config;
mod probes;
mod similarity;

pub use bug_report::BugReport;
pub use checkup::{
    CheckupEnv, CheckupRunner, HealthTier, OsFamily, Probe, ProbeResult, RunSummary,
};
pub use config::{
    ConfigError, DEFAULT_SETTINGS_FILE, FileSettings, HunterConfig, PerformanceSettings,
    SettingsProvider, SimilaritySettings, StaticSettings,
};
pub use probes::{
    ConfigLoadProbe, CoreComponentsProbe, DirectoryProbe, EnvFileProbe, McpConfigProbe,
    PerformanceFlagsProbe, ServerEntrypointProbe, SimilarityProbe, ToolchainVersionProbe,
    mcp_config_path,
};
pub use similarity::{SimilarityEngine, SimilarityScorer};
