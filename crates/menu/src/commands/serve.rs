//! `menu serve` command implementation.

use clap::Args;
use menu_config::CliSettings;
use menu_server::{run_server, server_config_from_config};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args, Debug)]
pub(crate) struct ServeArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and draw logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            store_path: None,
        };
        let config = self.config.load(cli_settings)?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Menu file: {}",
            config.store_resolved.path.display()
        ));
        if !config.routes.is_empty() {
            output.info(&format!("Configured routes: {}", config.routes.len()));
        }

        let server_config = server_config_from_config(&config);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
