//! Installation checkup engine.
//!
//! A checkup runs a fixed battery of probes in registration order, records
//! exactly one result per probe, and reduces the results into a tiered
//! health verdict. Probes are isolated: a probe body that errors becomes a
//! failed result at the runner boundary and never aborts the run, because
//! the diagnostics exist specifically to survive the failure modes they
//! check for.

use crate::config::SettingsProvider;
use crate::probes::{
    ConfigLoadProbe, CoreComponentsProbe, DirectoryProbe, EnvFileProbe, McpConfigProbe,
    PerformanceFlagsProbe, ServerEntrypointProbe, SimilarityProbe, ToolchainVersionProbe,
};
use crate::similarity::SimilarityScorer;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Outcome of a single diagnostic probe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    pub name: String,
    pub passed: bool,
    /// Human-readable detail; may be empty.
    pub message: String,
}

impl ProbeResult {
    pub fn pass(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            message: message.into(),
        }
    }

    pub fn fail(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            message: message.into(),
        }
    }
}

/// Host operating-system family, as far as path resolution cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    MacOs,
    Windows,
    Other,
}

impl OsFamily {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            OsFamily::MacOs
        } else if cfg!(windows) {
            OsFamily::Windows
        } else {
            OsFamily::Other
        }
    }
}

/// Local environment a checkup runs against.
#[derive(Debug, Clone)]
pub struct CheckupEnv {
    /// Directory the installation lives in.
    pub project_root: PathBuf,
    pub home_dir: PathBuf,
    /// Windows `%APPDATA%`, when present.
    pub appdata: Option<PathBuf>,
    pub os: OsFamily,
}

/// A single self-contained diagnostic probe.
///
/// Probes report their own pass/fail results; an `Err` signals an
/// unexpected fault (missing file, broken collaborator) and is converted
/// into a failed result by the runner.
pub trait Probe: Send + Sync {
    fn name(&self) -> &'static str;
    fn run(&self, env: &CheckupEnv) -> anyhow::Result<ProbeResult>;
}

/// Health verdict tiers derived from the success rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthTier {
    /// Every probe passed.
    Healthy,
    /// Usable but degraded (success rate in `[80, 100)`).
    Degraded,
    /// Installation not usable as-is (success rate below 80).
    Broken,
}

impl HealthTier {
    pub fn from_success_rate(rate: f64) -> Self {
        if rate >= 100.0 {
            HealthTier::Healthy
        } else if rate >= 80.0 {
            HealthTier::Degraded
        } else {
            HealthTier::Broken
        }
    }

    /// Process exit status calling automation branches on.
    pub fn exit_code(self) -> i32 {
        match self {
            HealthTier::Healthy => 0,
            HealthTier::Degraded => 1,
            HealthTier::Broken => 2,
        }
    }
}

/// Aggregated outcome of one checkup run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub passed: usize,
    pub total: usize,
    /// Percentage in `[0, 100]`.
    pub success_rate: f64,
    pub results: Vec<ProbeResult>,
}

impl RunSummary {
    pub fn from_results(results: Vec<ProbeResult>) -> Self {
        let passed = results.iter().filter(|result| result.passed).count();
        let total = results.len();
        let success_rate = if total == 0 {
            100.0
        } else {
            (passed as f64 / total as f64) * 100.0
        };

        Self {
            passed,
            total,
            success_rate,
            results,
        }
    }

    pub fn tier(&self) -> HealthTier {
        HealthTier::from_success_rate(self.success_rate)
    }
}

/// Runs the fixed battery of probes and records one result per probe.
pub struct CheckupRunner {
    probes: Vec<Box<dyn Probe>>,
    env: CheckupEnv,
}

impl CheckupRunner {
    pub fn new(env: CheckupEnv, probes: Vec<Box<dyn Probe>>) -> Self {
        Self { probes, env }
    }

    /// The standard nine-probe battery, in reporting order.
    ///
    /// Collaborators are injected once here and shared by the probes that
    /// need them.
    pub fn default_probes(
        env: CheckupEnv,
        settings: Arc<dyn SettingsProvider>,
        scorer: Arc<dyn SimilarityScorer>,
    ) -> Self {
        let probes: Vec<Box<dyn Probe>> = vec![
            Box::new(ToolchainVersionProbe::default()),
            Box::new(CoreComponentsProbe::new(
                Arc::clone(&settings),
                Arc::clone(&scorer),
            )),
            Box::new(ConfigLoadProbe::new(Arc::clone(&settings))),
            Box::new(EnvFileProbe),
            Box::new(ServerEntrypointProbe),
            Box::new(DirectoryProbe),
            Box::new(SimilarityProbe::new(scorer)),
            Box::new(McpConfigProbe),
            Box::new(PerformanceFlagsProbe::new(settings)),
        ];
        Self::new(env, probes)
    }

    pub fn probe_names(&self) -> Vec<&'static str> {
        self.probes.iter().map(|probe| probe.name()).collect()
    }

    /// Executes every probe exactly once, in registration order.
    pub fn run(&self) -> RunSummary {
        let mut results = Vec::with_capacity(self.probes.len());
        for probe in &self.probes {
            let result = match probe.run(&self.env) {
                Ok(result) => result,
                Err(err) => {
                    debug!(probe = probe.name(), error = %err, "probe raised");
                    ProbeResult::fail(probe.name(), format!("{err:#}"))
                }
            };
            results.push(result);
        }
        RunSummary::from_results(results)
    }
}
