//! YAML menu file parsing.
//!
//! The file holds an optional route table and a list of menus, each with its
//! items inline:
//!
//! ```yaml
//! routes:
//!   index: /
//! menus:
//!   - name: main
//!     depth: 5
//!     items:
//!       - { id: 1, name: Index, url: index }
//!       - { id: 2, name: I2, url: /i2, parent: 1 }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use menu_store::{DEFAULT_DEPTH, Item, ItemId, Menu, StoreError, StoreErrorKind, Target};

/// Parsed contents of a menu file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MenuFile {
    /// Route name to path table.
    pub routes: BTreeMap<String, String>,
    /// Menus in file order, ids assigned by position starting at 1.
    pub menus: Vec<Menu>,
    /// Items of all menus, in file order.
    pub items: Vec<Item>,
}

#[derive(Deserialize)]
struct RawFile {
    #[serde(default)]
    routes: BTreeMap<String, String>,
    #[serde(default)]
    menus: Vec<RawMenu>,
}

#[derive(Deserialize)]
struct RawMenu {
    name: String,
    #[serde(default = "default_depth")]
    depth: u32,
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Deserialize)]
struct RawItem {
    id: ItemId,
    name: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    parent: Option<ItemId>,
    #[serde(default)]
    order: u32,
}

fn default_depth() -> u32 {
    DEFAULT_DEPTH
}

/// Parse a menu file.
///
/// Empty content yields an empty [`MenuFile`]. No invariants are checked here.
///
/// # Errors
///
/// Returns a [`StoreErrorKind::Parse`] error if the YAML is malformed.
pub(crate) fn parse_menu_file(content: &str) -> Result<MenuFile, StoreError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(MenuFile::default());
    }

    let raw: RawFile = serde_yaml::from_str(trimmed).map_err(|e| {
        StoreError::new(StoreErrorKind::Parse).with_message(format!("Invalid YAML: {e}"))
    })?;

    let mut file = MenuFile {
        routes: raw.routes,
        ..MenuFile::default()
    };

    for (menu_id, raw_menu) in (1..).zip(raw.menus) {
        file.menus.push(Menu {
            id: menu_id,
            name: raw_menu.name,
            depth: raw_menu.depth,
        });
        file.items
            .extend(raw_menu.items.into_iter().map(|raw_item| Item {
                id: raw_item.id,
                menu_id,
                name: raw_item.name,
                target: Target::parse(&raw_item.url),
                parent_id: raw_item.parent,
                order: raw_item.order,
            }));
    }

    Ok(file)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_empty_content() {
        assert_eq!(parse_menu_file("  \n").unwrap(), MenuFile::default());
    }

    #[test]
    fn test_parse_menus_and_items() {
        let yaml = r"
menus:
  - name: main
    depth: 5
    items:
      - { id: 1, name: Index, url: index }
      - { id: 2, name: I2, url: /i2, parent: 1, order: 3 }
  - name: second
    items:
      - { id: 8, name: I8, url: /i8 }
";
        let file = parse_menu_file(yaml).unwrap();

        assert_eq!(
            file.menus,
            vec![
                Menu::new(1, "main").with_depth(5),
                Menu::new(2, "second"),
            ]
        );
        assert_eq!(
            file.items,
            vec![
                Item::new(1, 1, "Index", "index"),
                Item::new(2, 1, "I2", "/i2").with_parent(1).with_order(3),
                Item::new(8, 2, "I8", "/i8"),
            ]
        );
    }

    #[test]
    fn test_parse_routes() {
        let yaml = "routes:\n  index: /\n  i41: /i41\n";
        let file = parse_menu_file(yaml).unwrap();

        assert_eq!(file.routes.get("index").map(String::as_str), Some("/"));
        assert_eq!(file.routes.len(), 2);
        assert!(file.menus.is_empty());
    }

    #[test]
    fn test_parse_missing_url_is_no_target() {
        let yaml = "menus:\n  - name: main\n    items:\n      - { id: 1, name: Blank }\n";
        let file = parse_menu_file(yaml).unwrap();

        assert!(file.items[0].target.is_none());
    }

    #[test]
    fn test_parse_malformed_yaml() {
        let err = parse_menu_file("menus: [name: main").unwrap_err();

        assert_eq!(err.kind, StoreErrorKind::Parse);
        assert!(err.to_string().contains("Invalid YAML"));
    }

    #[test]
    fn test_parse_item_without_id_is_error() {
        let yaml = "menus:\n  - name: main\n    items:\n      - { name: NoId, url: /x }\n";

        assert!(parse_menu_file(yaml).is_err());
    }
}
