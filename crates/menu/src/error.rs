//! CLI error types.

use menu_config::ConfigError;
use menu_server::ServerError;
use menu_store::StoreError;
use menu_tree::DrawError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Draw(#[from] DrawError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Server(String),
}

impl From<ServerError> for CliError {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::Store(e) => Self::Store(e),
        }
    }
}
