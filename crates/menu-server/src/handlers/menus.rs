//! Menu API endpoints.
//!
//! Lists menus and returns drawn menus as JSON.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use menu_tree::MenuTree;
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::DrawQuery;
use crate::state::AppState;

/// Menu summary for GET /api/menus.
#[derive(Serialize)]
pub(crate) struct MenuSummary {
    name: String,
    depth: u32,
}

/// Response for GET /api/menus.
#[derive(Serialize)]
pub(crate) struct MenuListResponse {
    menus: Vec<MenuSummary>,
}

/// Handle GET /api/menus.
pub(crate) async fn list_menus(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MenuListResponse>, ServerError> {
    let menus = state
        .menus
        .list()?
        .into_iter()
        .map(|menu| MenuSummary {
            name: menu.name,
            depth: menu.depth,
        })
        .collect();
    Ok(Json(MenuListResponse { menus }))
}

/// Handle GET /api/menus/{name}.
///
/// Always succeeds; a menu that cannot be drawn is returned empty with a
/// diagnostic.
pub(crate) async fn get_menu(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<DrawQuery>,
) -> Json<MenuTree> {
    Json(state.menus.draw(&name, &query.path))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use crate::handlers::test_support::{app, fixture_store, get};

    #[tokio::test]
    async fn test_list_menus() {
        let (status, body) = get(app(fixture_store()), "/api/menus").await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "menus": [
                    {"name": "main", "depth": 5},
                    {"name": "second", "depth": 3}
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_list_menus_store_failure() {
        let (status, body) = get(app(fixture_store().with_failure("offline")), "/api/menus").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("offline"));
    }

    #[tokio::test]
    async fn test_get_menu() {
        let (status, body) = get(app(fixture_store()), "/api/menus/main?path=/i3").await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["menu_name"], "main");
        let levels = json["levels"].as_array().unwrap();
        assert_eq!(levels.first().unwrap()["level"], -2);
        assert_eq!(levels.last().unwrap()["level"], 1);
        let current: Vec<&Value> = levels
            .iter()
            .flat_map(|l| l["items"].as_array().unwrap())
            .filter(|item| item["class"] == "current")
            .collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0]["name"], "I3");
        assert!(json.get("diagnostic").is_none());
    }

    #[tokio::test]
    async fn test_get_menu_defaults_to_root_path() {
        let (_, body) = get(app(fixture_store()), "/api/menus/main").await;

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["levels"][0]["items"][1]["name"], "Index");
        assert_eq!(json["levels"][0]["items"][1]["class"], "current");
    }

    #[tokio::test]
    async fn test_get_unknown_menu_is_ok_with_diagnostic() {
        let (status, body) = get(app(fixture_store()), "/api/menus/footer?path=/").await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["levels"], serde_json::json!([]));
        assert_eq!(json["diagnostic"]["kind"], "menu_not_found");
    }
}
