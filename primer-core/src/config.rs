//! Configuration for the primer exercises

use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a TOML config file
pub const ENV_CONFIG_PATH: &str = "PRIMER_CONFIG";
/// Environment override for [`ReportConfig::price_precision`]
pub const ENV_PRICE_PRECISION: &str = "PRIMER_PRICE_PRECISION";
/// Environment override for [`ReportConfig::format`]
pub const ENV_FORMAT: &str = "PRIMER_FORMAT";
/// Environment override for [`InputConfig::reject_regrouped`]
pub const ENV_REJECT_REGROUPED: &str = "PRIMER_REJECT_REGROUPED";
/// Environment override for [`LoggingConfig::filter`]
pub const ENV_LOG: &str = "PRIMER_LOG";

/// Largest scale a `Decimal` can carry
const MAX_PRICE_PRECISION: u32 = 28;

/// Primer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report output settings
    pub report: ReportConfig,

    /// Input handling settings
    pub input: InputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Report output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Decimal places for revenue and average price
    pub price_precision: u32,

    /// Text or JSON lines
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            price_precision: 2,
            format: OutputFormat::Text,
        }
    }
}

/// Input handling configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Treat an ISBN that reappears after its group closed as an error
    pub reject_regrouped: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Resolve the effective configuration from the process environment
    ///
    /// Reads `path`, or the file named by `PRIMER_CONFIG`, or falls back to
    /// defaults; then applies `PRIMER_*` overrides and validates.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Resolve the effective configuration with `lookup` standing in for
    /// the environment
    pub fn load_with(
        path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> crate::Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| lookup(ENV_CONFIG_PATH).map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> crate::Result<()> {
        if let Some(precision) = lookup(ENV_PRICE_PRECISION) {
            self.report.price_precision = precision.trim().parse().map_err(|_| {
                crate::Error::Config(format!(
                    "{} must be a non-negative integer, got {:?}",
                    ENV_PRICE_PRECISION, precision
                ))
            })?;
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            self.report.format = format.parse()?;
        }

        if let Some(reject) = lookup(ENV_REJECT_REGROUPED) {
            self.input.reject_regrouped = parse_flag(ENV_REJECT_REGROUPED, &reject)?;
        }

        if let Some(filter) = lookup(ENV_LOG) {
            self.logging.filter = filter;
        }

        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> crate::Result<()> {
        if self.report.price_precision > MAX_PRICE_PRECISION {
            return Err(crate::Error::Config(format!(
                "price_precision {} exceeds maximum {}",
                self.report.price_precision, MAX_PRICE_PRECISION
            )));
        }
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> crate::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(crate::Error::Config(format!(
            "{} must be a boolean, got {:?}",
            key, value
        ))),
    }
}
