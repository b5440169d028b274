use std::{fs::OpenOptions, sync::Mutex};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

/// Installs the global subscriber.
///
/// The terminal is in raw mode on the alternate screen while the app runs, so
/// logs only go to `log_file`. Without one nothing is installed and every
/// `tracing` call is a no-op.
pub fn init(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "ledger_tui={level},ledger={level}",
            level = config.log_level
        ))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))?;

    tracing::info!(
        kind = %config.kind,
        currency = %config.currency,
        "ledger_tui starting"
    );
    Ok(())
}
