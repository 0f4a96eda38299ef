//! Adjacency index over a menu's items.
//!
//! Items are stored in a flat `Vec<Item>` with id and parent lookups tracked
//! by position. This provides:
//! - O(1) item lookup by id
//! - O(1) children lookup by parent id (roots are the children of `None`)
//!
//! The index is built once per draw and is read-only afterwards.

use std::collections::HashMap;

use menu_store::{Item, ItemId, Target};

/// Read-only adjacency index of one menu's items.
#[derive(Debug, Default)]
pub struct ItemIndex {
    items: Vec<Item>,
    by_id: HashMap<ItemId, usize>,
    children: HashMap<Option<ItemId>, Vec<usize>>,
}

impl ItemIndex {
    /// Build the index from a menu's items.
    ///
    /// If an id occurs twice, lookups by id return the first occurrence; both
    /// still appear among their parent's children.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        let mut children: HashMap<Option<ItemId>, Vec<usize>> = HashMap::new();

        for (idx, item) in items.iter().enumerate() {
            by_id.entry(item.id).or_insert(idx);
            children.entry(item.parent_id).or_default().push(idx);
        }

        Self {
            items,
            by_id,
            children,
        }
    }

    /// Number of indexed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the index holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.by_id.get(&id).map(|&idx| &self.items[idx])
    }

    /// Items whose `parent_id` equals `parent`, in stored order.
    pub fn children(&self, parent: Option<ItemId>) -> impl Iterator<Item = &Item> {
        self.children
            .get(&parent)
            .into_iter()
            .flatten()
            .map(|&idx| &self.items[idx])
    }

    /// Items without a parent.
    pub fn roots(&self) -> impl Iterator<Item = &Item> {
        self.children(None)
    }

    /// Find the item for the current page.
    ///
    /// An item matches if its target is the route `route_name` or the raw path
    /// `path`. Among several matches the lowest `(order, id)` wins.
    #[must_use]
    pub fn find_current(&self, path: &str, route_name: Option<&str>) -> Option<&Item> {
        self.items
            .iter()
            .filter(|item| match &item.target {
                Some(Target::Route(name)) => route_name == Some(name.as_str()),
                Some(Target::Path(p)) => p == path,
                Some(Target::External(_)) | None => false,
            })
            .min_by_key(|item| (item.order, item.id))
    }
}
