//! VisualQA - brand compliance checker for preview environments
//!
//! A CLI tool that runs a visual QA checklist against a preview URL,
//! prints a per-category breakdown and exports the results.
//!
//! Exit codes:
//!   0 - Success (or overall FAIL without --fail-on-fail)
//!   1 - Runtime error (analysis failure, config, export, cancellation)
//!   2 - Overall status FAIL with --fail-on-fail

mod analysis;
mod cli;
mod config;
mod error;
mod models;
mod provider;
mod report;
mod session;

use anyhow::{Context, Result};
use chrono::Utc;
use cli::Args;
use config::{Config, CONFIG_FILE_NAME};
use indicatif::{ProgressBar, ProgressStyle};
use models::{AnalysisReport, OverallStatus};
use provider::{AnalysisProvider, FileProvider, MockProvider};
use session::Session;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Config is loaded before logging so `[general] verbose` can set the level
    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);

    init_logging(&args, &config);

    info!("VisualQA v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "Arguments: url={:?} format={:?} fixture={:?} show={:?}",
        args.url, args.format, args.fixture, args.show
    );
    debug!("Effective config: {:?}", config);

    match run(args, config).await {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Run failed: {:#}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .visualqa.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!("⚠️  {} already exists. Remove it first or edit it manually.", CONFIG_FILE_NAME);
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("✅ Created {} with default settings.", CONFIG_FILE_NAME);
    println!("   Edit it to customize latency, fixture and report output.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args, config: &Config) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level(config.general.verbose))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Run the selected workflow. Returns exit code (0 or 2).
async fn run(args: Args, config: Config) -> Result<i32> {
    let mut session = Session::new();

    if let Some(ref path) = args.show {
        show_export(&mut session, path)?;
    } else {
        run_analysis(&mut session, &args, &config).await?;
    }

    let report = session
        .report()
        .context("No report available after analysis")?;
    let target = session.analyzed_target().unwrap_or_default();

    if !args.quiet {
        println!("{}", report::render_results(report, target));
    }

    if args.show.is_none() && config.report.export {
        let path = export(report, target, &args, &config)?;
        println!("✅ Report saved to: {}", path.display());
    }

    Ok(exit_code(report, args.fail_on_fail))
}

/// Call the provider with a spinner, racing it against Ctrl-C.
async fn run_analysis(session: &mut Session, args: &Args, config: &Config) -> Result<()> {
    let provider = build_provider(config);

    let spinner = analysis_spinner(args.quiet);

    let outcome = tokio::select! {
        result = session.analyze(provider.as_ref(), args.target(), args.security_key()) => {
            Some(result.map(|_| ()))
        }
        _ = tokio::signal::ctrl_c() => None,
    };

    spinner.finish_and_clear();

    match outcome {
        Some(Ok(())) => {
            if !args.quiet {
                println!("✅ Analysis complete!");
            }
            Ok(())
        }
        Some(Err(e)) => {
            eprintln!("❌ Failed to analyze page. Please check your URL and security key.");
            Err(anyhow::Error::new(e).context("Analysis failed"))
        }
        None => {
            if session.is_analyzing() {
                warn!("Analysis cancelled while in flight");
            }
            session.reset();
            anyhow::bail!("Analysis cancelled")
        }
    }
}

/// Pick the provider: a JSON fixture if configured, the built-in checklist otherwise.
fn build_provider(config: &Config) -> Box<dyn AnalysisProvider> {
    match config.provider.fixture {
        Some(ref fixture) => {
            info!("Using checklist file: {}", fixture);
            Box::new(FileProvider::new(fixture))
        }
        None => {
            let provider = MockProvider::new(Duration::from_millis(config.provider.delay_ms));
            debug!("Using built-in checklist with {:?} latency", provider.delay());
            Box::new(provider)
        }
    }
}

fn analysis_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.blue} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message("Connecting to preview environment... Analyzing...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Load a previously exported report into the session.
fn show_export(session: &mut Session, path: &Path) -> Result<()> {
    info!("Loading exported report: {}", path.display());

    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read report {}", path.display()))?;
    let exported = report::parse_export(&bytes)
        .with_context(|| format!("Failed to parse report {}", path.display()))?;

    println!(
        "📄 Report exported {}",
        exported.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );

    let analysis = exported.to_report();
    session.load(exported.url, analysis);
    Ok(())
}

/// Render and write the report file. Returns the path written.
fn export(report: &AnalysisReport, target: &str, args: &Args, config: &Config) -> Result<PathBuf> {
    let exported_at = Utc::now();
    let format = config.report.format;

    let path = match args.output {
        Some(ref path) => path.clone(),
        None => {
            let dir = PathBuf::from(&config.report.output_dir);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            dir.join(report::export_file_name(exported_at, format))
        }
    };

    let bytes = report::render_report(report, target, exported_at, format)?;
    report::write_report(&path, &bytes)?;

    Ok(path)
}

fn exit_code(report: &AnalysisReport, fail_on_fail: bool) -> i32 {
    if fail_on_fail && report.overall_status == OverallStatus::Fail {
        eprintln!("\n⛔ Overall status is FAIL (exit code 2).");
        2
    } else {
        0
    }
}

/// Load configuration from file or use defaults.
///
/// Runs before the tracing subscriber exists, so problems go to stderr.
fn load_config(args: &Args) -> Result<Config> {
    if let Some(ref config_path) = args.config {
        return Config::load(config_path);
    }

    match Config::load_default() {
        Ok(Some(config)) => Ok(config),
        Ok(None) => Ok(Config::default()),
        Err(e) => {
            eprintln!("⚠️  Failed to load {}: {:#}", CONFIG_FILE_NAME, e);
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregate;
    use crate::models::{Category, Check, CheckStatus};
    use clap::Parser;

    #[test]
    fn test_exit_code() {
        let failing = aggregate(&[Category::new(
            "Copy",
            vec![Check::new("Headers", "Case", CheckStatus::Fail)],
        )]);
        let passing = aggregate(&[]);

        assert_eq!(exit_code(&failing, true), 2);
        assert_eq!(exit_code(&failing, false), 0);
        assert_eq!(exit_code(&passing, true), 0);
    }

    #[test]
    fn test_export_writes_generated_name() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args::try_parse_from(["visualqa", "--url", "u", "--key", "k"]).unwrap();
        let mut config = Config::default();
        config.report.output_dir = dir.path().display().to_string();

        let path = export(&aggregate(&[]), "u", &args, &config).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("qa-report-"));
        assert!(name.ends_with(".json"));
        assert!(path.exists());
    }

    #[test]
    fn test_show_export_loads_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let original = aggregate(&[Category::new(
            "Typography",
            vec![Check::new("Font Family", "Fonts", CheckStatus::Pass)],
        )]);
        let bytes = report::serialize_report(&original, "https://p.example", Utc::now()).unwrap();
        std::fs::write(&path, bytes).unwrap();

        let mut session = Session::new();
        show_export(&mut session, &path).unwrap();

        assert_eq!(session.report(), Some(&original));
        assert_eq!(session.analyzed_target(), Some("https://p.example"));
    }

    #[test]
    fn test_config_file_verbose_sets_log_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[general]\nverbose = true\n").unwrap();

        let args = Args::try_parse_from([
            "visualqa",
            "--url",
            "https://preview.example.com",
            "--key",
            "k",
            "--config",
            path.to_str().unwrap(),
        ])
        .unwrap();

        let config = load_config(&args).unwrap();
        assert!(config.general.verbose);
        assert_eq!(args.log_level(config.general.verbose), tracing::Level::DEBUG);
    }
}
