//! HTML fragment endpoint.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Html;

use crate::handlers::DrawQuery;
use crate::state::AppState;

/// Handle GET /menus/{name}.
pub(crate) async fn get_menu_html(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<DrawQuery>,
) -> Html<String> {
    let tree = state.menus.draw(&name, &query.path);
    Html(menu_tree::render_html(&tree))
}
