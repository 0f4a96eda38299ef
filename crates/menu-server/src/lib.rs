//! HTTP server for drawn menus.
//!
//! This crate serves menus from a YAML menu file over HTTP using axum:
//! - `GET /api/menus`: menu names and depths
//! - `GET /api/menus/{name}?path=/i3`: the drawn tree as JSON
//! - `GET /menus/{name}?path=/i3`: the drawn tree as an HTML fragment
//!
//! Drawing never fails from the client's point of view: a menu that cannot be
//! drawn comes back empty, with a diagnostic in the JSON form.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use menu_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         store_path: PathBuf::from("menus.yaml"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod routes;
mod state;

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use menu_store::MenuStore;
use menu_store_fs::YamlStore;
use menu_tree::{DEFAULT_PLACEHOLDER, DrawOptions, Menus};
use routes::FileRoutes;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// YAML menu file.
    pub store_path: PathBuf,
    /// Routes added on top of the menu file's own routes.
    pub routes: BTreeMap<String, String>,
    /// Link for items without a resolvable target.
    pub placeholder: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7980,
            store_path: PathBuf::from("menus.yaml"),
            routes: BTreeMap::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
        }
    }
}

/// Build the drawing facade for a server configuration.
///
/// Routes follow the menu file: every draw resolves against the file's
/// current `routes` map with the configured routes on top, so configured
/// routes take precedence for name lookups.
///
/// # Errors
///
/// Returns [`ServerError`] if the menu file cannot be loaded.
pub fn menus_from_config(config: &ServerConfig) -> Result<Menus, ServerError> {
    let store = Arc::new(YamlStore::new(config.store_path.clone()));
    store.snapshot()?;

    let routes = FileRoutes::new(Arc::clone(&store), config.routes.clone());
    let store: Arc<dyn MenuStore> = store;

    Ok(Menus::new(
        store,
        Arc::new(routes),
        DrawOptions {
            placeholder: config.placeholder.clone(),
        },
    ))
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the menu file cannot be loaded or the server fails to
/// start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let menus = menus_from_config(&config)?;
    let state = Arc::new(AppState { menus });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, store = %config.store_path.display(), "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from the menu configuration.
#[must_use]
pub fn server_config_from_config(config: &menu_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        store_path: config.store_resolved.path.clone(),
        routes: config.routes.clone(),
        placeholder: config.render.placeholder.clone(),
    }
}
