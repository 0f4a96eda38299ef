//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create layer that adds X-Content-Type-Options header.
fn content_type_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    )
}

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/menus", get(handlers::menus::list_menus))
        .route("/api/menus/{name}", get(handlers::menus::get_menu));

    let html_routes = Router::new().route("/menus/{name}", get(handlers::html::get_menu_html));

    Router::new()
        .merge(api_routes)
        .merge(html_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(content_type_options_layer()),
        )
        .with_state(state)
}
