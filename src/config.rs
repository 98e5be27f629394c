//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.visualqa.toml` files.

use crate::provider::mock::DEFAULT_DELAY_MS;
use crate::report::ExportFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".visualqa.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Analysis provider settings.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Analysis provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Simulated latency of the built-in provider, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Read checks from this JSON file instead of the built-in fixture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            fixture: None,
        }
    }
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

/// Report export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Format of the exported file.
    #[serde(default)]
    pub format: ExportFormat,

    /// Directory that receives `qa-report-<millis>.<ext>` files.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Write a report file after each analysis.
    #[serde(default = "default_true")]
    pub export: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            output_dir: default_output_dir(),
            export: true,
        }
    }
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(CONFIG_FILE_NAME);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// Only values given explicitly on the command line override the file.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(delay_ms) = args.delay_ms {
            self.provider.delay_ms = delay_ms;
        }
        if let Some(ref fixture) = args.fixture {
            self.provider.fixture = Some(fixture.display().to_string());
        }

        if let Some(format) = args.format {
            self.report.format = format.into();
        }
        if let Some(ref dir) = args.output_dir {
            self.report.output_dir = dir.display().to_string();
        }
        if args.no_export {
            self.report.export = false;
        }

        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}
