//! The nine concrete installation probes.
//!
//! Each probe is a boundary check: it inspects one aspect of the local
//! environment and reports a single pass/fail result. Probes never mutate
//! the environment they inspect.

use crate::bug_report::BugReport;
use crate::checkup::{CheckupEnv, OsFamily, Probe, ProbeResult};
use crate::config::SettingsProvider;
use crate::similarity::SimilarityScorer;
use anyhow::Context;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;
use std::time::Instant;

/// Minimum supported Rust toolchain for building the server from source.
pub const MIN_TOOLCHAIN: (u32, u32) = (1, 75);

/// Secrets file expected at the project root.
pub const ENV_FILE: &str = ".env";

/// Tracker credentials the secrets file must configure.
pub const REQUIRED_TRACKER_VARS: [&str; 4] = [
    "JIRA_BASE_URL",
    "JIRA_USERNAME",
    "JIRA_API_TOKEN",
    "JIRA_PROJECT_KEY",
];

/// Installer templates ship values like `your-api-token`; a value carrying
/// this prefix counts as unconfigured.
pub const PLACEHOLDER_PREFIX: &str = "your-";

/// Server entry point expected at the project root.
pub const SERVER_ENTRYPOINT: &str = "bug-hunter-server";

/// Per-user application directory under the home directory.
pub const APP_DIR: &str = ".bug-hunter";

const REQUIRED_SUBDIRS: [&str; 3] = ["logs", "cache", "config"];

/// File name of the editor's MCP configuration document.
pub const MCP_CONFIG_FILE: &str = "claude_desktop_config.json";

/// Identifier under which Bug Hunter registers its MCP server.
pub const MCP_SERVER_ID: &str = "bug-hunter";

/// Checks that the host `rustc` meets the minimum supported version.
pub struct ToolchainVersionProbe {
    minimum: (u32, u32),
}

impl Default for ToolchainVersionProbe {
    fn default() -> Self {
        Self {
            minimum: MIN_TOOLCHAIN,
        }
    }
}

impl Probe for ToolchainVersionProbe {
    fn name(&self) -> &'static str {
        "Toolchain Version"
    }

    fn run(&self, _env: &CheckupEnv) -> anyhow::Result<ProbeResult> {
        let output = Command::new("rustc")
            .arg("--version")
            .output()
            .context("failed to invoke rustc")?;
        if !output.status.success() {
            anyhow::bail!("rustc --version exited with {}", output.status);
        }

        let raw = String::from_utf8_lossy(&output.stdout);
        let Some((major, minor, patch)) = parse_rustc_version(&raw) else {
            anyhow::bail!("could not parse rustc version from {:?}", raw.trim());
        };

        let (min_major, min_minor) = self.minimum;
        if (major, minor) >= (min_major, min_minor) {
            Ok(ProbeResult::pass(
                self.name(),
                format!("rustc {major}.{minor}.{patch}"),
            ))
        } else {
            Ok(ProbeResult::fail(
                self.name(),
                format!("rustc {min_major}.{min_minor}+ required, found {major}.{minor}.{patch}"),
            ))
        }
    }
}

fn parse_rustc_version(raw: &str) -> Option<(u32, u32, u32)> {
    // Expected shape: "rustc 1.82.0 (f6e511eec 2024-10-15)", possibly with
    // a -nightly or +build suffix on the version.
    let version = raw.split_whitespace().nth(1)?;
    let version = version.split(['-', '+']).next()?;
    let mut parts = version.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = parts.next().and_then(|part| part.parse().ok()).unwrap_or(0);
    Some((major, minor, patch))
}

/// Sample tracker document the core-components probe feeds the model.
const SAMPLE_REPORT: &str = r#"{
    "id": "PROJ-1",
    "summary": "Login button unresponsive",
    "description": "Clicking login does nothing on Firefox",
    "labels": ["ui"]
}"#;

/// Verifies that the core collaborators answer at all: settings load, the
/// bug-report model parses a known document, and the similarity scorer
/// responds. The Rust analog of the original's import check.
pub struct CoreComponentsProbe {
    settings: Arc<dyn SettingsProvider>,
    scorer: Arc<dyn SimilarityScorer>,
}

impl CoreComponentsProbe {
    pub fn new(settings: Arc<dyn SettingsProvider>, scorer: Arc<dyn SimilarityScorer>) -> Self {
        Self { settings, scorer }
    }
}

impl Probe for CoreComponentsProbe {
    fn name(&self) -> &'static str {
        "Core Components"
    }

    fn run(&self, _env: &CheckupEnv) -> anyhow::Result<ProbeResult> {
        self.settings.load().context("settings loader failed")?;

        let report: BugReport = serde_json::from_str(SAMPLE_REPORT)
            .context("bug report model rejected sample document")?;

        self.scorer
            .score(&report.corpus_text(), &report.summary)
            .context("similarity scorer failed")?;

        Ok(ProbeResult::pass(
            self.name(),
            "All core components responding",
        ))
    }
}

/// Verifies that loaded settings expose a version.
pub struct ConfigLoadProbe {
    settings: Arc<dyn SettingsProvider>,
}

impl ConfigLoadProbe {
    pub fn new(settings: Arc<dyn SettingsProvider>) -> Self {
        Self { settings }
    }
}

impl Probe for ConfigLoadProbe {
    fn name(&self) -> &'static str {
        "Configuration Loading"
    }

    fn run(&self, _env: &CheckupEnv) -> anyhow::Result<ProbeResult> {
        let config = self.settings.load()?;
        if config.version.trim().is_empty() {
            return Ok(ProbeResult::fail(
                self.name(),
                "Settings loaded but the version field is empty",
            ));
        }
        Ok(ProbeResult::pass(
            self.name(),
            format!("Loaded Bug Hunter v{}", config.version),
        ))
    }
}

/// Checks the secrets file for the required tracker credentials.
pub struct EnvFileProbe;

impl Probe for EnvFileProbe {
    fn name(&self) -> &'static str {
        "Environment File"
    }

    fn run(&self, env: &CheckupEnv) -> anyhow::Result<ProbeResult> {
        let path = env.project_root.join(ENV_FILE);
        if !path.exists() {
            return Ok(ProbeResult::fail(self.name(), ".env file not found"));
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let vars = parse_env_file(&content);

        let missing: Vec<&str> = REQUIRED_TRACKER_VARS
            .iter()
            .copied()
            .filter(|var| !is_configured(vars.get(*var).map(String::as_str)))
            .collect();

        if missing.is_empty() {
            Ok(ProbeResult::pass(
                self.name(),
                "All required variables configured",
            ))
        } else {
            Ok(ProbeResult::fail(
                self.name(),
                format!("Missing or unconfigured: {}", missing.join(", ")),
            ))
        }
    }
}

fn parse_env_file(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

/// A credential counts as configured only when present, non-empty, and not
/// still carrying the installer's placeholder prefix. Partial configuration
/// must not read as healthy.
fn is_configured(value: Option<&str>) -> bool {
    match value {
        Some(value) => !value.is_empty() && !value.starts_with(PLACEHOLDER_PREFIX),
        None => false,
    }
}

/// Checks that the server entry point exists at the project root.
pub struct ServerEntrypointProbe;

impl Probe for ServerEntrypointProbe {
    fn name(&self) -> &'static str {
        "Server Entrypoint"
    }

    fn run(&self, env: &CheckupEnv) -> anyhow::Result<ProbeResult> {
        let path = env.project_root.join(SERVER_ENTRYPOINT);
        if path.is_file() {
            Ok(ProbeResult::pass(
                self.name(),
                format!("{SERVER_ENTRYPOINT} found"),
            ))
        } else {
            Ok(ProbeResult::fail(
                self.name(),
                format!("{SERVER_ENTRYPOINT} not found"),
            ))
        }
    }
}

/// Checks that the per-user application directories exist.
pub struct DirectoryProbe;

impl Probe for DirectoryProbe {
    fn name(&self) -> &'static str {
        "Directory Structure"
    }

    fn run(&self, env: &CheckupEnv) -> anyhow::Result<ProbeResult> {
        let app_dir = env.home_dir.join(APP_DIR);
        let missing: Vec<String> = REQUIRED_SUBDIRS
            .iter()
            .map(|sub| app_dir.join(sub))
            .filter(|path| !path.is_dir())
            .map(|path| path.display().to_string())
            .collect();

        if missing.is_empty() {
            Ok(ProbeResult::pass(
                self.name(),
                "All required directories exist",
            ))
        } else {
            Ok(ProbeResult::fail(
                self.name(),
                format!("Missing: {}", missing.join(", ")),
            ))
        }
    }
}

/// Fixed pair of semantically related reports the smoke test scores.
const SMOKE_TEXT_A: &str = "Application error in user authentication module";
const SMOKE_TEXT_B: &str = "Authentication service throwing errors for user login";

/// Correctness floor for the smoke-test score.
pub const SMOKE_MIN_SCORE: f64 = 0.5;

/// Latency ceiling for a single scoring call, in milliseconds.
pub const SMOKE_MAX_MILLIS: f64 = 500.0;

/// Functional and performance smoke test of the similarity engine.
///
/// The engine is a performance-sensitive component, so the probe enforces
/// both a correctness floor and a latency ceiling; the message reports both
/// measured values whichever threshold failed.
pub struct SimilarityProbe {
    scorer: Arc<dyn SimilarityScorer>,
}

impl SimilarityProbe {
    pub fn new(scorer: Arc<dyn SimilarityScorer>) -> Self {
        Self { scorer }
    }
}

impl Probe for SimilarityProbe {
    fn name(&self) -> &'static str {
        "Similarity Engine"
    }

    fn run(&self, _env: &CheckupEnv) -> anyhow::Result<ProbeResult> {
        let start = Instant::now();
        let score = self
            .scorer
            .score(SMOKE_TEXT_A, SMOKE_TEXT_B)
            .context("similarity engine failed")?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let message = format!("Score: {score:.2}, Time: {elapsed_ms:.1}ms");
        if score > SMOKE_MIN_SCORE && elapsed_ms < SMOKE_MAX_MILLIS {
            Ok(ProbeResult::pass(self.name(), message))
        } else {
            Ok(ProbeResult::fail(self.name(), message))
        }
    }
}

/// Resolves the editor's MCP configuration path for an OS family.
///
/// Pure so the three branches are testable without touching the real
/// filesystem.
pub fn mcp_config_path(os: OsFamily, home_dir: &Path, appdata: Option<&Path>) -> PathBuf {
    match os {
        OsFamily::MacOs => home_dir
            .join("Library")
            .join("Application Support")
            .join("Claude")
            .join(MCP_CONFIG_FILE),
        OsFamily::Windows => appdata
            .map_or_else(PathBuf::new, Path::to_path_buf)
            .join("Claude")
            .join(MCP_CONFIG_FILE),
        OsFamily::Other => home_dir
            .join(".config")
            .join("Claude")
            .join(MCP_CONFIG_FILE),
    }
}

/// Checks that the editor's MCP configuration registers Bug Hunter.
pub struct McpConfigProbe;

impl Probe for McpConfigProbe {
    fn name(&self) -> &'static str {
        "MCP Configuration"
    }

    fn run(&self, env: &CheckupEnv) -> anyhow::Result<ProbeResult> {
        let path = mcp_config_path(env.os, &env.home_dir, env.appdata.as_deref());
        if !path.exists() {
            return Ok(ProbeResult::fail(
                self.name(),
                format!("Config not found at: {}", path.display()),
            ));
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("invalid JSON in {}", path.display()))?;

        match config.get("mcpServers").and_then(|servers| servers.get(MCP_SERVER_ID)) {
            Some(_) => Ok(ProbeResult::pass(
                self.name(),
                "Bug Hunter MCP server configured",
            )),
            None => Ok(ProbeResult::fail(
                self.name(),
                format!("'{MCP_SERVER_ID}' not registered under mcpServers"),
            )),
        }
    }
}

/// Audits the performance toggles; at least two must be enabled.
pub struct PerformanceFlagsProbe {
    settings: Arc<dyn SettingsProvider>,
}

impl PerformanceFlagsProbe {
    pub fn new(settings: Arc<dyn SettingsProvider>) -> Self {
        Self { settings }
    }
}

impl Probe for PerformanceFlagsProbe {
    fn name(&self) -> &'static str {
        "Performance Optimization"
    }

    fn run(&self, _env: &CheckupEnv) -> anyhow::Result<ProbeResult> {
        let config = self.settings.load().context("settings loader failed")?;
        let perf = &config.performance;

        let mut enabled = Vec::new();
        if perf.enable_similarity_cache {
            enabled.push("Similarity Cache");
        }
        if perf.enable_async_processing {
            enabled.push("Async Processing");
        }
        if perf.enable_batch_processing {
            enabled.push("Batch Processing");
        }

        if enabled.len() >= 2 {
            Ok(ProbeResult::pass(
                self.name(),
                format!("Enabled: {}", enabled.join(", ")),
            ))
        } else if enabled.is_empty() {
            Ok(ProbeResult::fail(
                self.name(),
                "No performance optimizations enabled",
            ))
        } else {
            Ok(ProbeResult::fail(
                self.name(),
                format!("Only enabled: {}", enabled.join(", ")),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HunterConfig, PerformanceSettings, StaticSettings};
    use std::time::Duration;

    fn env_at(root: &Path, home: &Path) -> CheckupEnv {
        CheckupEnv {
            project_root: root.to_path_buf(),
            home_dir: home.to_path_buf(),
            appdata: None,
            os: OsFamily::Other,
        }
    }

    fn static_settings(config: HunterConfig) -> Arc<dyn SettingsProvider> {
        Arc::new(StaticSettings(config))
    }

    struct FixedScorer(f64);

    impl SimilarityScorer for FixedScorer {
        fn score(&self, _a: &str, _b: &str) -> anyhow::Result<f64> {
            Ok(self.0)
        }
    }

    struct SlowScorer;

    impl SimilarityScorer for SlowScorer {
        fn score(&self, _a: &str, _b: &str) -> anyhow::Result<f64> {
            std::thread::sleep(Duration::from_millis(550));
            Ok(0.9)
        }
    }

    struct BrokenScorer;

    impl SimilarityScorer for BrokenScorer {
        fn score(&self, _a: &str, _b: &str) -> anyhow::Result<f64> {
            anyhow::bail!("model file missing")
        }
    }

    #[test]
    fn parses_release_rustc_version() {
        assert_eq!(
            parse_rustc_version("rustc 1.82.0 (f6e511eec 2024-10-15)"),
            Some((1, 82, 0)),
        );
    }

    #[test]
    fn parses_nightly_rustc_version() {
        assert_eq!(
            parse_rustc_version("rustc 1.85.0-nightly (abcdef 2024-12-01)"),
            Some((1, 85, 0)),
        );
    }

    #[test]
    fn rejects_garbage_version_output() {
        assert_eq!(parse_rustc_version("not a version"), None);
        assert_eq!(parse_rustc_version(""), None);
    }

    #[test]
    fn env_file_probe_passes_with_real_values() {
        let temp = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            temp.path().join(ENV_FILE),
            "JIRA_BASE_URL=https://tracker.example.com\n\
             JIRA_USERNAME=triage-bot\n\
             JIRA_API_TOKEN=abc123\n\
             JIRA_PROJECT_KEY=PROJ\n",
        )
        .expect("write");

        let env = env_at(temp.path(), temp.path());
        let result = EnvFileProbe.run(&env).expect("run");

        assert!(result.passed, "message: {}", result.message);
    }

    #[test]
    fn env_file_probe_names_placeholder_key() {
        let temp = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            temp.path().join(ENV_FILE),
            "JIRA_BASE_URL=https://tracker.example.com\n\
             JIRA_USERNAME=triage-bot\n\
             JIRA_API_TOKEN=your-api-token\n\
             JIRA_PROJECT_KEY=PROJ\n",
        )
        .expect("write");

        let env = env_at(temp.path(), temp.path());
        let result = EnvFileProbe.run(&env).expect("run");

        assert!(!result.passed);
        assert!(result.message.contains("JIRA_API_TOKEN"));
        assert!(!result.message.contains("JIRA_USERNAME"));
    }

    #[test]
    fn env_file_probe_fails_when_file_missing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let env = env_at(temp.path(), temp.path());

        let result = EnvFileProbe.run(&env).expect("run");

        assert!(!result.passed);
        assert!(result.message.contains("not found"));
    }

    #[test]
    fn env_file_parser_skips_comments_and_blanks() {
        let vars = parse_env_file("# secrets\n\nKEY=value\n  SPACED = padded \n");
        assert_eq!(vars.get("KEY").map(String::as_str), Some("value"));
        assert_eq!(vars.get("SPACED").map(String::as_str), Some("padded"));
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn empty_and_placeholder_values_are_unconfigured() {
        assert!(!is_configured(None));
        assert!(!is_configured(Some("")));
        assert!(!is_configured(Some("your-jira-token")));
        assert!(is_configured(Some("real-value")));
    }

    #[test]
    fn server_entrypoint_probe_checks_project_root() {
        let temp = tempfile::tempdir().expect("tempdir");
        let env = env_at(temp.path(), temp.path());

        let missing = ServerEntrypointProbe.run(&env).expect("run");
        assert!(!missing.passed);

        std::fs::write(temp.path().join(SERVER_ENTRYPOINT), "#!/bin/sh\n").expect("write");
        let present = ServerEntrypointProbe.run(&env).expect("run");
        assert!(present.passed);
    }

    #[test]
    fn directory_probe_lists_every_missing_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let app_dir = temp.path().join(APP_DIR);
        std::fs::create_dir_all(app_dir.join("logs")).expect("mkdir");

        let env = env_at(temp.path(), temp.path());
        let result = DirectoryProbe.run(&env).expect("run");

        assert!(!result.passed);
        assert!(result.message.contains("cache"));
        assert!(result.message.contains("config"));
        assert!(!result.message.contains("logs"));
    }

    #[test]
    fn directory_probe_passes_when_all_exist() {
        let temp = tempfile::tempdir().expect("tempdir");
        let app_dir = temp.path().join(APP_DIR);
        for sub in REQUIRED_SUBDIRS {
            std::fs::create_dir_all(app_dir.join(sub)).expect("mkdir");
        }

        let env = env_at(temp.path(), temp.path());
        let result = DirectoryProbe.run(&env).expect("run");

        assert!(result.passed);
    }

    #[test]
    fn similarity_probe_passes_on_fast_confident_score() {
        let probe = SimilarityProbe::new(Arc::new(FixedScorer(0.9)));
        let env = env_at(Path::new("/"), Path::new("/"));

        let result = probe.run(&env).expect("run");

        assert!(result.passed);
        assert!(result.message.contains("Score: 0.90"));
    }

    #[test]
    fn similarity_probe_fails_on_low_score() {
        let probe = SimilarityProbe::new(Arc::new(FixedScorer(0.3)));
        let env = env_at(Path::new("/"), Path::new("/"));

        let result = probe.run(&env).expect("run");

        assert!(!result.passed);
        assert!(result.message.contains("Score: 0.30"));
        // Both measured values appear regardless of which threshold failed.
        assert!(result.message.contains("Time:"));
    }

    #[test]
    fn similarity_probe_fails_past_latency_ceiling() {
        let probe = SimilarityProbe::new(Arc::new(SlowScorer));
        let env = env_at(Path::new("/"), Path::new("/"));

        let result = probe.run(&env).expect("run");

        assert!(!result.passed);
        assert!(result.message.contains("Score: 0.90"));
        let elapsed: f64 = result
            .message
            .split("Time: ")
            .nth(1)
            .and_then(|tail| tail.strip_suffix("ms"))
            .and_then(|value| value.parse().ok())
            .expect("elapsed in message");
        assert!(elapsed >= SMOKE_MAX_MILLIS);
    }

    #[test]
    fn similarity_probe_surfaces_engine_faults() {
        let probe = SimilarityProbe::new(Arc::new(BrokenScorer));
        let env = env_at(Path::new("/"), Path::new("/"));

        let err = probe.run(&env).expect_err("expected fault");
        assert!(format!("{err:#}").contains("model file missing"));
    }

    #[test]
    fn mcp_path_resolution_per_os_family() {
        let home = Path::new("/home/triage");
        let appdata = Path::new("C:/Users/triage/AppData/Roaming");

        assert_eq!(
            mcp_config_path(OsFamily::MacOs, home, None),
            Path::new("/home/triage/Library/Application Support/Claude/claude_desktop_config.json"),
        );
        assert_eq!(
            mcp_config_path(OsFamily::Windows, home, Some(appdata)),
            Path::new("C:/Users/triage/AppData/Roaming/Claude/claude_desktop_config.json"),
        );
        assert_eq!(
            mcp_config_path(OsFamily::Other, home, None),
            Path::new("/home/triage/.config/Claude/claude_desktop_config.json"),
        );
    }

    #[test]
    fn mcp_probe_finds_registered_server() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config_dir = temp.path().join(".config").join("Claude");
        std::fs::create_dir_all(&config_dir).expect("mkdir");
        std::fs::write(
            config_dir.join(MCP_CONFIG_FILE),
            r#"{"mcpServers":{"bug-hunter":{"command":"bug-hunter-server"}}}"#,
        )
        .expect("write");

        let env = env_at(temp.path(), temp.path());
        let result = McpConfigProbe.run(&env).expect("run");

        assert!(result.passed);
    }

    #[test]
    fn mcp_probe_reports_missing_registration() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config_dir = temp.path().join(".config").join("Claude");
        std::fs::create_dir_all(&config_dir).expect("mkdir");
        std::fs::write(
            config_dir.join(MCP_CONFIG_FILE),
            r#"{"mcpServers":{"other-tool":{}}}"#,
        )
        .expect("write");

        let env = env_at(temp.path(), temp.path());
        let result = McpConfigProbe.run(&env).expect("run");

        assert!(!result.passed);
        assert!(result.message.contains(MCP_SERVER_ID));
    }

    #[test]
    fn mcp_probe_reports_path_when_file_absent() {
        let temp = tempfile::tempdir().expect("tempdir");
        let env = env_at(temp.path(), temp.path());

        let result = McpConfigProbe.run(&env).expect("run");

        assert!(!result.passed);
        assert!(result.message.contains(MCP_CONFIG_FILE));
    }

    #[test]
    fn mcp_probe_raises_on_malformed_json() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config_dir = temp.path().join(".config").join("Claude");
        std::fs::create_dir_all(&config_dir).expect("mkdir");
        std::fs::write(config_dir.join(MCP_CONFIG_FILE), "{not json").expect("write");

        let env = env_at(temp.path(), temp.path());
        assert!(McpConfigProbe.run(&env).is_err());
    }

    fn perf_config(cache: bool, async_proc: bool, batch: bool) -> HunterConfig {
        HunterConfig {
            performance: PerformanceSettings {
                enable_similarity_cache: cache,
                enable_async_processing: async_proc,
                enable_batch_processing: batch,
            },
            ..HunterConfig::default()
        }
    }

    #[test]
    fn performance_probe_fails_with_one_toggle() {
        let probe = PerformanceFlagsProbe::new(static_settings(perf_config(true, false, false)));
        let env = env_at(Path::new("/"), Path::new("/"));

        let result = probe.run(&env).expect("run");

        assert!(!result.passed);
        assert!(result.message.contains("Similarity Cache"));
    }

    #[test]
    fn performance_probe_passes_with_two_toggles() {
        let probe = PerformanceFlagsProbe::new(static_settings(perf_config(true, true, false)));
        let env = env_at(Path::new("/"), Path::new("/"));

        let result = probe.run(&env).expect("run");

        assert!(result.passed);
        assert!(result.message.contains("Similarity Cache"));
        assert!(result.message.contains("Async Processing"));
    }

    #[test]
    fn performance_probe_passes_with_all_toggles() {
        let probe = PerformanceFlagsProbe::new(static_settings(perf_config(true, true, true)));
        let env = env_at(Path::new("/"), Path::new("/"));

        let result = probe.run(&env).expect("run");

        assert!(result.passed);
        assert!(result.message.contains("Batch Processing"));
    }

    #[test]
    fn performance_probe_reports_nothing_enabled() {
        let probe = PerformanceFlagsProbe::new(static_settings(perf_config(false, false, false)));
        let env = env_at(Path::new("/"), Path::new("/"));

        let result = probe.run(&env).expect("run");

        assert!(!result.passed);
        assert!(result.message.contains("No performance optimizations"));
    }

    #[test]
    fn core_components_probe_passes_with_healthy_collaborators() {
        let probe = CoreComponentsProbe::new(
            static_settings(HunterConfig::default()),
            Arc::new(FixedScorer(0.8)),
        );
        let env = env_at(Path::new("/"), Path::new("/"));

        let result = probe.run(&env).expect("run");

        assert!(result.passed);
    }

    #[test]
    fn core_components_probe_raises_on_broken_scorer() {
        let probe = CoreComponentsProbe::new(
            static_settings(HunterConfig::default()),
            Arc::new(BrokenScorer),
        );
        let env = env_at(Path::new("/"), Path::new("/"));

        assert!(probe.run(&env).is_err());
    }

    #[test]
    fn config_load_probe_reports_version() {
        let mut config = HunterConfig::default();
        config.version = "2.0.0".to_string();
        let probe = ConfigLoadProbe::new(static_settings(config));
        let env = env_at(Path::new("/"), Path::new("/"));

        let result = probe.run(&env).expect("run");

        assert!(result.passed);
        assert_eq!(result.message, "Loaded Bug Hunter v2.0.0");
    }

    #[test]
    fn config_load_probe_fails_on_blank_version() {
        let mut config = HunterConfig::default();
        config.version = "  ".to_string();
        let probe = ConfigLoadProbe::new(static_settings(config));
        let env = env_at(Path::new("/"), Path::new("/"));

        let result = probe.run(&env).expect("run");

        assert!(!result.passed);
    }
}
