//! Configuration management for the console front end
//!
//! Loads configuration from environment variables with sensible defaults.
//! Command-line flags override the environment.

use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ValueEnum;
use thiserror::Error;

/// How menu option 7 renders the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Bordered table
    #[default]
    Grid,
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON
    Json,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown report format '{0}' (expected grid, csv or json)")]
pub struct ParseReportFormatError(String);

impl FromStr for ReportFormat {
    type Err = ParseReportFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(ReportFormat::Grid),
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ParseReportFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Grid => "grid",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name shown in the menu banner and report exports
    pub clinic_name: String,

    /// Report rendering for menu option 7
    pub report_format: ReportFormat,

    /// Tracing filter directive; `RUST_LOG` applies when unset
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clinic_name: "Vet Clinic".to_string(),
            report_format: ReportFormat::Grid,
            log_filter: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup (environment, test maps).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let config = Config {
            clinic_name: lookup("CLINIC_NAME").unwrap_or(defaults.clinic_name),

            report_format: match lookup("REPORT_FORMAT") {
                Some(raw) => raw.parse().context("Invalid REPORT_FORMAT")?,
                None => defaults.report_format,
            },

            log_filter: lookup("VET_CLINIC_LOG").filter(|f| !f.trim().is_empty()),
        };

        config.validate()?;

        Ok(config)
    }

    /// Apply command-line overrides, then re-validate.
    pub fn with_overrides(
        mut self,
        clinic_name: Option<String>,
        report_format: Option<ReportFormat>,
        log_filter: Option<String>,
    ) -> Result<Self> {
        if let Some(name) = clinic_name {
            self.clinic_name = name;
        }
        if let Some(format) = report_format {
            self.report_format = format;
        }
        if let Some(filter) = log_filter {
            self.log_filter = Some(filter);
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.clinic_name.trim().is_empty() {
            anyhow::bail!("CLINIC_NAME must not be blank");
        }

        Ok(())
    }
}
