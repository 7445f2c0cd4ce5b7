//! Vet Clinic console
//!
//! Main entry point for the interactive record-keeping menu.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vet_clinic_cli::{Config, Prompter, ReportFormat, Session};

const DEFAULT_LOG_FILTER: &str = "warn,vet_clinic_core=info,vet_clinic_cli=info";

#[derive(Parser)]
#[command(name = "vet-clinic")]
#[command(about = "Patient and appointment records for a small veterinary clinic")]
struct Cli {
    /// Clinic name shown in the menu banner and reports (env: CLINIC_NAME)
    #[arg(long)]
    clinic_name: Option<String>,

    /// Report output for menu option 7 (env: REPORT_FORMAT)
    #[arg(long, value_enum)]
    report_format: Option<ReportFormat>,

    /// Tracing filter, e.g. "debug" (env: VET_CLINIC_LOG, then RUST_LOG)
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?.with_overrides(
        cli.clinic_name,
        cli.report_format,
        cli.log_filter,
    )?;

    // Initialize logging; stderr keeps log lines out of the menu output
    let filter = match &config.log_filter {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid log filter '{}'", directives))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!(
        clinic = %config.clinic_name,
        report_format = %config.report_format,
        "configuration loaded"
    );

    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());
    Session::new(config, prompter).run()
}
