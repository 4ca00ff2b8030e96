//! # bug-hunter-cli
//!
//! Binary entry point for the Bug Hunter installation checkup.
//!
//! Runs the fixed probe battery against the local environment, prints a
//! human-readable (or JSON) report, and exits with the tier contract:
//! `0` healthy, `1` degraded, `2` broken.

mod report;

use anyhow::{Context, Result};
use bug_hunter_core::{
    CheckupEnv, CheckupRunner, FileSettings, HunterConfig, OsFamily, SettingsProvider,
    SimilarityEngine, SimilarityScorer,
};
use clap::{Parser, ValueEnum};
use std::io::{IsTerminal, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum ColorMode {
    /// Automatically detect if stdout is a TTY
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    fn should_use_colors(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stdout().is_terminal(),
        }
    }
}

/// Output format for the checkup report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum ReportFormat {
    /// Human-readable report
    #[default]
    Human,
    /// JSON for programmatic access
    Json,
}

/// Bug Hunter installation checkup
#[derive(Parser, Debug)]
#[command(name = "bug-hunter-check", version, about)]
struct Cli {
    /// Path to the settings file (resolved against the project root when
    /// relative)
    #[arg(short, long, default_value = bug_hunter_core::DEFAULT_SETTINGS_FILE)]
    config: PathBuf,

    /// Project root containing the installation (defaults to the current
    /// directory)
    #[arg(long)]
    project_root: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
    format: ReportFormat,

    /// Color output mode (auto, always, never)
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the report (and --format json) stay clean.
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let project_root = match cli.project_root {
        Some(root) => root,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    let home_dir = dirs::home_dir().context("cannot determine home directory")?;

    let env = CheckupEnv {
        project_root: project_root.clone(),
        home_dir,
        appdata: std::env::var_os("APPDATA").map(PathBuf::from),
        os: OsFamily::current(),
    };

    let settings_path = if cli.config.is_absolute() {
        cli.config.clone()
    } else {
        project_root.join(&cli.config)
    };
    debug!(settings = %settings_path.display(), root = %project_root.display(), "starting checkup");

    let settings: Arc<dyn SettingsProvider> = Arc::new(FileSettings::new(settings_path));
    // The engine is built from whatever settings load right now; a broken
    // settings file is reported by the configuration probe, not here.
    let engine_config = settings.load().unwrap_or_else(|_| HunterConfig::default());
    let scorer: Arc<dyn SimilarityScorer> = Arc::new(SimilarityEngine::from_config(&engine_config));

    let runner = CheckupRunner::default_probes(env, settings, scorer);
    let summary = runner.run();

    match cli.format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        ReportFormat::Human => report::print_report(&summary, cli.color.should_use_colors()),
    }

    std::process::exit(summary.tier().exit_code());
}
