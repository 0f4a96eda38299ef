//! HTTP request handlers.

pub(crate) mod html;
pub(crate) mod menus;

use serde::Deserialize;

/// Query string for drawing endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct DrawQuery {
    /// Path of the page the menu is drawn for.
    #[serde(default = "default_path")]
    pub(crate) path: String,
}

fn default_path() -> String {
    "/".to_owned()
}
