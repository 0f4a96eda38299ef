//! Write-time validation of menu data.
//!
//! These checks run when data enters a store (file load, `menu check`), not
//! when menus are drawn. A reader must still cope with data that would fail
//! them, since stores such as [`MockStore`](crate::MockStore) skip validation.

use std::collections::{HashMap, HashSet};

use crate::model::{Item, ItemId, Menu};

/// A violated write-time invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Item names itself as parent.
    #[error("item {item} in menu '{menu}' is its own parent")]
    SelfParent {
        /// Menu name.
        menu: String,
        /// Offending item.
        item: ItemId,
    },
    /// Parent is missing or belongs to another menu.
    #[error("item {item} in menu '{menu}' has parent {parent} outside the menu")]
    BadParent {
        /// Menu name.
        menu: String,
        /// Offending item.
        item: ItemId,
        /// Referenced parent.
        parent: ItemId,
    },
    /// Two items of one menu share a target.
    #[error("menu '{menu}' has more than one item with target '{target}'")]
    DuplicateTarget {
        /// Menu name.
        menu: String,
        /// Shared target string.
        target: String,
    },
    /// Two items share an id.
    #[error("item id {0} is used more than once")]
    DuplicateItemId(ItemId),
    /// Two menus share a name.
    #[error("menu name '{0}' is used more than once")]
    DuplicateMenu(String),
}

/// Check the items of a single menu.
///
/// Returns every violation found, in item order. An empty vector means the
/// menu is valid.
#[must_use]
pub fn validate_menu(menu: &Menu, items: &[Item]) -> Vec<ValidationError> {
    let ids: HashSet<ItemId> = items.iter().map(|item| item.id).collect();
    let mut targets = HashSet::new();
    let mut reported = HashSet::new();
    let mut errors = Vec::new();

    for item in items {
        if let Some(parent) = item.parent_id {
            if parent == item.id {
                errors.push(ValidationError::SelfParent {
                    menu: menu.name.clone(),
                    item: item.id,
                });
            } else if !ids.contains(&parent) {
                errors.push(ValidationError::BadParent {
                    menu: menu.name.clone(),
                    item: item.id,
                    parent,
                });
            }
        }

        // Duplicates are reported once per target
        if let Some(target) = &item.target
            && !targets.insert(target.as_str())
            && reported.insert(target.as_str())
        {
            errors.push(ValidationError::DuplicateTarget {
                menu: menu.name.clone(),
                target: target.as_str().to_owned(),
            });
        }
    }

    errors
}

/// Check a whole store snapshot: menu names, item ids and every menu.
#[must_use]
pub fn validate_store(menus: &[Menu], items: &[Item]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for menu in menus {
        if !names.insert(menu.name.as_str()) {
            errors.push(ValidationError::DuplicateMenu(menu.name.clone()));
        }
    }

    let mut seen_ids = HashSet::new();
    let mut by_menu: HashMap<_, Vec<Item>> = HashMap::new();
    for item in items {
        if !seen_ids.insert(item.id) {
            errors.push(ValidationError::DuplicateItemId(item.id));
        }
        by_menu.entry(item.menu_id).or_default().push(item.clone());
    }

    for menu in menus {
        let menu_items = by_menu.remove(&menu.id).unwrap_or_default();
        errors.extend(validate_menu(menu, &menu_items));
    }

    errors
}
