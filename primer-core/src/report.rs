//! Report lines for sales totals

use crate::{config::ReportConfig, types::SalesRecord, Error, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output encoding for report lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `ISBN UNITS REVENUE AVG`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!(
                "unknown output format {:?} (expected text or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// JSON shape of one report line
#[derive(Debug, Serialize)]
struct Summary<'a> {
    isbn: &'a str,
    units: u32,
    revenue: Decimal,
    average_price: Option<Decimal>,
}

/// Formats sales totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Output encoding
    pub format: OutputFormat,

    /// Decimal places for money
    pub precision: u32,
}

impl Default for Report {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}

impl Report {
    /// Create a report formatter
    pub fn new(format: OutputFormat, precision: u32) -> Self {
        Self { format, precision }
    }

    /// Create a report formatter from settings
    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(config.format, config.price_precision)
    }

    /// Render one record without a trailing newline
    pub fn render(&self, record: &SalesRecord) -> Result<String> {
        let revenue = self.money(record.revenue);
        let average = record.avg_price().map(|avg| self.money(avg));

        match self.format {
            OutputFormat::Text => {
                let average = average
                    .map(|avg| avg.to_string())
                    .unwrap_or_else(|| "(no sales)".to_string());
                Ok(format!(
                    "{} {} {} {}",
                    record.isbn, record.units, revenue, average
                ))
            }
            OutputFormat::Json => Ok(serde_json::to_string(&Summary {
                isbn: record.isbn.as_str(),
                units: record.units,
                revenue,
                average_price: average,
            })?),
        }
    }

    /// Write one record as a full line
    pub fn write_record(&self, out: &mut impl Write, record: &SalesRecord) -> Result<()> {
        writeln!(out, "{}", self.render(record)?)?;
        Ok(())
    }

    /// Round half away from zero, then pad to exactly `precision` places
    fn money(&self, value: Decimal) -> Decimal {
        let mut rounded =
            value.round_dp_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(self.precision);
        rounded
    }
}
