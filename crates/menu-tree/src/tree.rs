//! Drawn menu output.

use menu_store::ItemId;
use serde::{Deserialize, Serialize};

use crate::assemble::ItemClass;

/// One item of a drawn menu, with its target already resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ItemId>,
    /// Display name.
    pub name: String,
    /// Resolved link, or the placeholder.
    pub url: String,
    pub class: ItemClass,
    pub order: u32,
    /// Level relative to the current item.
    pub level: i32,
}

/// Items sharing a relative level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub level: i32,
    pub items: Vec<MenuEntry>,
}

/// Why a menu was drawn empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MenuNotFound,
    EmptyMenu,
    CurrentItemNotFound,
    StoreError,
}

/// Failure recorded on an empty tree instead of being raised.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

/// A drawn menu.
///
/// Levels ascend from the topmost ancestor level to the child level without
/// gaps. A tree that could not be drawn has no levels and carries a
/// [`Diagnostic`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTree {
    pub menu_name: String,
    pub levels: Vec<Level>,
    /// Non-fatal problems met while drawing, such as unresolvable routes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<Diagnostic>,
}

impl MenuTree {
    /// Empty tree explaining why nothing was drawn.
    #[must_use]
    pub fn empty(menu_name: impl Into<String>, diagnostic: Diagnostic) -> Self {
        Self {
            menu_name: menu_name.into(),
            levels: Vec::new(),
            warnings: Vec::new(),
            diagnostic: Some(diagnostic),
        }
    }

    /// True if no items were drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// All entries, level by level.
    pub fn entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.levels.iter().flat_map(|level| level.items.iter())
    }

    /// First entry with the given display name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&MenuEntry> {
        self.entries().find(|entry| entry.name == name)
    }

    /// The current entry, if the tree is not empty.
    #[must_use]
    pub fn current(&self) -> Option<&MenuEntry> {
        self.entries()
            .find(|entry| entry.class == ItemClass::Current)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(id: ItemId, name: &str, class: ItemClass, level: i32) -> MenuEntry {
        MenuEntry {
            id,
            parent_id: None,
            name: name.to_owned(),
            url: format!("/{id}"),
            class,
            order: 0,
            level,
        }
    }

    #[test]
    fn test_empty_tree() {
        let tree = MenuTree::empty(
            "main",
            Diagnostic {
                kind: DiagnosticKind::MenuNotFound,
                message: "menu 'main' not found".to_owned(),
            },
        );

        assert!(tree.is_empty());
        assert!(tree.current().is_none());
    }

    #[test]
    fn test_find_and_current() {
        let tree = MenuTree {
            menu_name: "main".to_owned(),
            levels: vec![
                Level {
                    level: 0,
                    items: vec![entry(1, "Home", ItemClass::Current, 0)],
                },
                Level {
                    level: 1,
                    items: vec![entry(2, "Child", ItemClass::Child, 1)],
                },
            ],
            warnings: Vec::new(),
            diagnostic: None,
        };

        assert_eq!(tree.current().map(|e| e.id), Some(1));
        assert_eq!(tree.find("Child").map(|e| e.level), Some(1));
        assert_eq!(tree.entries().count(), 2);
    }

    #[test]
    fn test_serialization_omits_empty_fields() {
        let tree = MenuTree {
            menu_name: "main".to_owned(),
            levels: vec![Level {
                level: 0,
                items: vec![entry(1, "Home", ItemClass::Current, 0)],
            }],
            warnings: Vec::new(),
            diagnostic: None,
        };

        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "menu_name": "main",
                "levels": [{
                    "level": 0,
                    "items": [{
                        "id": 1,
                        "name": "Home",
                        "url": "/1",
                        "class": "current",
                        "order": 0,
                        "level": 0
                    }]
                }]
            })
        );
    }

    #[test]
    fn test_diagnostic_serialization() {
        let json = serde_json::to_value(DiagnosticKind::CurrentItemNotFound).unwrap();

        assert_eq!(json, serde_json::json!("current_item_not_found"));
    }
}
