//! Menu and item records.
//!
//! # Target Convention
//!
//! Items store their link target as a single string, classified by shape:
//! - `"index"` - symbolic route name (no `/` anywhere)
//! - `"/guide"` - raw absolute path
//! - `"https://example.com"` - raw external URL (contains `/`, no leading one)
//! - `""` - no target

use std::fmt;

use serde::{Deserialize, Serialize};

/// Menu identifier.
pub type MenuId = u64;

/// Item identifier.
pub type ItemId = u64;

/// Default maximum traversal depth for a menu.
pub const DEFAULT_DEPTH: u32 = 3;

/// Named collection of items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    /// Store-assigned identifier.
    pub id: MenuId,
    /// Unique menu name, used by templates to pick a menu.
    pub name: String,
    /// Maximum number of ancestor hops walked from the current item.
    pub depth: u32,
}

impl Menu {
    /// Create a menu with the default depth.
    #[must_use]
    pub fn new(id: MenuId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            depth: DEFAULT_DEPTH,
        }
    }

    /// Override the traversal depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}

/// Link target of a menu item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Symbolic route name, resolved to a path by the router.
    Route(String),
    /// Raw absolute path starting with `/`.
    Path(String),
    /// Raw external URL, used verbatim.
    External(String),
}

impl Target {
    /// Classify a stored target string.
    ///
    /// Returns `None` for an empty (or whitespace-only) string.
    ///
    /// # Examples
    ///
    /// ```
    /// use menu_store::Target;
    ///
    /// assert_eq!(Target::parse("index"), Some(Target::Route("index".to_owned())));
    /// assert_eq!(Target::parse("/i2"), Some(Target::Path("/i2".to_owned())));
    /// assert_eq!(
    ///     Target::parse("https://example.com/"),
    ///     Some(Target::External("https://example.com/".to_owned()))
    /// );
    /// assert_eq!(Target::parse(""), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else if !raw.contains('/') {
            Some(Self::Route(raw.to_owned()))
        } else if raw.starts_with('/') {
            Some(Self::Path(raw.to_owned()))
        } else {
            Some(Self::External(raw.to_owned()))
        }
    }

    /// The stored string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Route(s) | Self::Path(s) | Self::External(s) => s,
        }
    }

    /// Route name if this is a symbolic target.
    #[must_use]
    pub fn route_name(&self) -> Option<&str> {
        match self {
            Self::Route(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Store-assigned identifier, unique across menus.
    pub id: ItemId,
    /// Owning menu.
    pub menu_id: MenuId,
    /// Display name.
    pub name: String,
    /// Link target, `None` when the stored string is empty.
    pub target: Option<Target>,
    /// Parent item, `None` for roots.
    pub parent_id: Option<ItemId>,
    /// Sibling order (ascending).
    pub order: u32,
}

impl Item {
    /// Create a root item with order 0.
    ///
    /// The target string is classified with [`Target::parse`].
    #[must_use]
    pub fn new(id: ItemId, menu_id: MenuId, name: impl Into<String>, target: &str) -> Self {
        Self {
            id,
            menu_id,
            name: name.into(),
            target: Target::parse(target),
            parent_id: None,
            order: 0,
        }
    }

    /// Set the parent item.
    #[must_use]
    pub fn with_parent(mut self, parent_id: ItemId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Set the sibling order.
    #[must_use]
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_name() {
        assert_eq!(Target::parse("i41"), Some(Target::Route("i41".to_owned())));
    }

    #[test]
    fn test_parse_root_path() {
        assert_eq!(Target::parse("/"), Some(Target::Path("/".to_owned())));
    }

    #[test]
    fn test_parse_external_url() {
        let target = Target::parse("http://example.com/docs").unwrap();
        assert!(matches!(target, Target::External(_)));
        assert!(target.route_name().is_none());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Target::parse("  /i2 "), Some(Target::Path("/i2".to_owned())));
        assert_eq!(Target::parse("   "), None);
    }

    #[test]
    fn test_target_display_is_stored_form() {
        let target = Target::Route("index".to_owned());
        assert_eq!(target.to_string(), "index");
        assert_eq!(target.route_name(), Some("index"));
    }

    #[test]
    fn test_menu_default_depth() {
        let menu = Menu::new(1, "main");
        assert_eq!(menu.depth, DEFAULT_DEPTH);
        assert_eq!(menu.with_depth(5).depth, 5);
    }

    #[test]
    fn test_item_builders() {
        let item = Item::new(2, 1, "I2", "/i2").with_parent(1).with_order(4);
        assert_eq!(item.parent_id, Some(1));
        assert_eq!(item.order, 4);
        assert_eq!(item.target, Some(Target::Path("/i2".to_owned())));
    }

    #[test]
    fn test_item_empty_target() {
        let item = Item::new(1, 1, "Blank", "");
        assert!(item.target.is_none());
        assert_eq!(item.parent_id, None);
    }

    #[test]
    fn test_menu_serialization() {
        let menu = Menu::new(1, "main").with_depth(5);
        let json = serde_json::to_value(&menu).unwrap();
        assert_eq!(json["name"], "main");
        assert_eq!(json["depth"], 5);
    }
}
