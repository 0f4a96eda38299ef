//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use menu_store::StoreError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Menu store could not be read.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Store(e) => {
                tracing::error!(error = %e, "Store read failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e.to_string()}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use menu_store::StoreErrorKind;

    use super::*;

    #[test]
    fn test_store_error_is_internal() {
        let err = ServerError::from(StoreError::new(StoreErrorKind::Io).with_message("boom"));

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
