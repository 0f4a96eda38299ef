//! Application state.
//!
//! Shared state for all request handlers.

use menu_tree::Menus;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Drawing facade over the menu store and route table.
    pub(crate) menus: Menus,
}
