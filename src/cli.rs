//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::report::ExportFormat;
use clap::Parser;
use std::path::PathBuf;

/// VisualQA - brand compliance checker for preview environments
///
/// Runs the visual QA checklist against a preview URL, prints a
/// per-category breakdown and exports the results as JSON or Markdown.
///
/// Examples:
///   visualqa --url https://preview.example.com/page --key s3cret
///   VISUALQA_KEY=s3cret visualqa --url https://preview.example.com/page --format markdown
///   visualqa --url https://preview.example.com/page --key s3cret --fixture checks.json
///   visualqa --show qa-report-1735689600000.json
///   visualqa --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Preview URL to analyze
    #[arg(
        short,
        long,
        value_name = "URL",
        required_unless_present_any = ["init_config", "show"]
    )]
    pub url: Option<String>,

    /// Security key for the preview environment
    #[arg(short, long, value_name = "KEY", env = "VISUALQA_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Write the report to this exact file
    ///
    /// Overrides --output-dir and the generated qa-report-<millis> name.
    #[arg(short, long, value_name = "FILE", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Directory for generated report files
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report format (json, markdown)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Simulated analysis latency in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Load checks from a JSON file instead of the built-in checklist
    ///
    /// Accepts an array of categories or a previously exported report.
    #[arg(long, value_name = "FILE")]
    pub fixture: Option<PathBuf>,

    /// Display a previously exported JSON report and exit
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = [
            "url",
            "fixture",
            "delay_ms",
            "output",
            "output_dir",
            "format",
            "no_export",
        ]
    )]
    pub show: Option<PathBuf>,

    /// Print results without writing a report file
    #[arg(long)]
    pub no_export: bool,

    /// Exit with code 2 when the overall status is FAIL
    ///
    /// Useful for CI pipelines.
    #[arg(long)]
    pub fail_on_fail: bool,

    /// Path to configuration file
    ///
    /// If not specified, looks for .visualqa.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .visualqa.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the exported report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON snapshot
    Json,
    /// Markdown checklist
    Markdown,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ExportFormat::Json,
            OutputFormat::Markdown => ExportFormat::Markdown,
        }
    }
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The target URL, empty if not set (should be validated first).
    pub fn target(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    /// The security key, empty if not set (should be validated first).
    pub fn security_key(&self) -> &str {
        self.key.as_deref().unwrap_or("")
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        // Nothing else applies to --init-config or --show
        if self.init_config || self.show.is_some() {
            return Ok(());
        }

        if self.target().trim().is_empty() {
            return Err("Preview URL must not be empty".to_string());
        }

        if self.security_key().trim().is_empty() {
            return Err("Security key is required (--key or VISUALQA_KEY)".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    ///
    /// `config_verbose` is `[general] verbose` from the config file;
    /// `--quiet` still wins over it.
    pub fn log_level(&self, config_verbose: bool) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose || config_verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
