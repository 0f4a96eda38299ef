//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod draw;
pub(crate) mod serve;

use std::path::PathBuf;

use clap::Args;
use menu_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use draw::DrawArgs;
pub(crate) use serve::ServeArgs;

/// Configuration arguments shared by all commands.
#[derive(Args, Debug)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover menu.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Menu file (overrides config).
    #[arg(long, env = "MENU_STORE")]
    store: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load configuration, applying `settings` and the `--store` override.
    pub(crate) fn load(self, mut settings: CliSettings) -> Result<Config, CliError> {
        settings.store_path = self.store;
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        tracing::debug!(
            config = ?config.config_path,
            store = %config.store_resolved.path.display(),
            "Configuration loaded"
        );
        Ok(config)
    }
}
