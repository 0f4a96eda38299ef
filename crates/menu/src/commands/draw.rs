//! `menu draw` command implementation.

use clap::{Args, ValueEnum};
use menu_config::CliSettings;
use menu_server::{menus_from_config, server_config_from_config};
use menu_tree::{MenuTree, render_html};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Output format of a drawn menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    #[default]
    Html,
    Json,
}

/// Arguments for the draw command.
#[derive(Args, Debug)]
pub(crate) struct DrawArgs {
    /// Menu name.
    menu: String,

    /// Path of the current page.
    path: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,

    #[command(flatten)]
    config: ConfigArgs,
}

impl DrawArgs {
    /// Requested output format.
    #[cfg(test)]
    pub(crate) fn format(&self) -> Format {
        self.format
    }

    /// Execute the draw command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the menu file cannot be loaded,
    /// or the menu cannot be drawn for the given path.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.config.load(CliSettings::default())?;
        let menus = menus_from_config(&server_config_from_config(&config))?;

        tracing::debug!(menu = %self.menu, path = %self.path, "Drawing menu");
        let tree = menus.try_draw(&self.menu, &self.path)?;
        output.warnings(&tree.warnings);

        output.result(&format_tree(&tree, self.format)?)?;
        Ok(())
    }
}

/// Render a drawn tree in the requested format.
fn format_tree(tree: &MenuTree, format: Format) -> Result<String, CliError> {
    match format {
        Format::Html => Ok(render_html(tree)),
        Format::Json => Ok(serde_json::to_string_pretty(tree)? + "\n"),
    }
}
