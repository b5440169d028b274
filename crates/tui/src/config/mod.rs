use std::path::PathBuf;

use clap::Parser;
use ledger::{Currency, LedgerKind};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/ledger_tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name shown in the dialog title.
    pub ledger_name: String,
    pub kind: LedgerKind,
    pub currency: Currency,
    /// JSON fixtures replacing the built-in sample ledgers.
    pub fixtures: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ledger_name: "Gupta Traders".to_string(),
            kind: LedgerKind::Party,
            currency: Currency::Inr,
            fixtures: None,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ledger_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the ledger name shown in the title.
    #[arg(long)]
    name: Option<String>,
    /// Override the ledger kind (party, supplier, general).
    #[arg(long)]
    kind: Option<LedgerKind>,
    /// Override the display currency (INR, EUR).
    #[arg(long)]
    currency: Option<Currency>,
    /// Load ledgers from a JSON fixture file instead of the sample data.
    #[arg(long)]
    fixtures: Option<PathBuf>,
    /// Append logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

pub fn load() -> Result<AppConfig> {
    resolve(Args::parse())
}

fn resolve(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("LEDGER_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(name) = args.name {
        settings.ledger_name = name;
    }
    if let Some(kind) = args.kind {
        settings.kind = kind;
    }
    if let Some(currency) = args.currency {
        settings.currency = currency;
    }
    if let Some(fixtures) = args.fixtures {
        settings.fixtures = Some(fixtures);
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }

    Ok(settings)
}
