//! Menu CLI - Menu tree engine.
//!
//! Provides commands for:
//! - `draw`: Draw a menu for a page path as HTML or JSON
//! - `check`: Validate a menu file
//! - `serve`: Start the menu server

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, DrawArgs, ServeArgs};
use error::CliError;
use output::Output;

/// Menu - hierarchical navigation menus.
#[derive(Parser)]
#[command(name = "menu", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a menu for the page at a path.
    Draw(DrawArgs),
    /// Validate the menu file.
    Check(CheckArgs),
    /// Start the menu server.
    Serve(ServeArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Draw(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(CliError::from)
            .and_then(|rt| rt.block_on(args.execute())),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
