//! Mock store implementation for testing.
//!
//! Provides [`MockStore`] for unit testing without a backing file.

use std::sync::RwLock;

use crate::model::{Item, Menu, MenuId};
use crate::store::{MenuStore, StoreError, StoreErrorKind};

/// Mock store for testing.
///
/// Holds menus and items in memory. Use the builder methods to configure the
/// mock with test data. Nothing is validated, so anomalies such as parent
/// cycles can be stored on purpose.
///
/// # Example
///
/// ```ignore
/// use menu_store::{Item, MenuStore, MockStore};
///
/// let store = MockStore::new()
///     .with_menu(1, "main", 5)
///     .with_item(Item::new(1, 1, "Index", "index"));
///
/// let items = store.items("main").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStore {
    menus: RwLock<Vec<Menu>>,
    items: RwLock<Vec<Item>>,
    failure: RwLock<Option<String>>,
}

impl MockStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a menu.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_menu(self, id: MenuId, name: impl Into<String>, depth: u32) -> Self {
        self.menus
            .write()
            .unwrap()
            .push(Menu::new(id, name).with_depth(depth));
        self
    }

    /// Add an item.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_item(self, item: Item) -> Self {
        self.items.write().unwrap().push(item);
        self
    }

    /// Add several items at once.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_items(self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.write().unwrap().extend(items);
        self
    }

    /// Make every subsequent read fail with the given message.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(message.into());
        self
    }

    fn check_failure(&self) -> Result<(), StoreError> {
        match self.failure.read().unwrap().as_ref() {
            Some(message) => Err(StoreError::new(StoreErrorKind::Other)
                .with_backend("Mock")
                .with_message(message.clone())),
            None => Ok(()),
        }
    }
}

impl MenuStore for MockStore {
    fn menus(&self) -> Result<Vec<Menu>, StoreError> {
        self.check_failure()?;
        Ok(self.menus.read().unwrap().clone())
    }

    fn items(&self, menu_name: &str) -> Result<Vec<Item>, StoreError> {
        let menu = self.menu(menu_name)?;
        Ok(self
            .items
            .read()
            .unwrap()
            .iter()
            .filter(|item| item.menu_id == menu.id)
            .cloned()
            .collect())
    }
}
