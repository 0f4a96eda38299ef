//! Route table that follows the menu file.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use menu_store_fs::{MenuFile, YamlStore};
use menu_tree::{RouteTable, Router, Unresolvable};

/// Routes declared in the menu file, with configured routes on top.
///
/// The table is rebuilt whenever the store hands out a new snapshot, so route
/// names added to the file resolve as soon as its items do.
pub(crate) struct FileRoutes {
    store: Arc<YamlStore>,
    configured: BTreeMap<String, String>,
    cache: RwLock<Option<(Arc<MenuFile>, Arc<RouteTable>)>>,
}

impl FileRoutes {
    pub(crate) fn new(store: Arc<YamlStore>, configured: BTreeMap<String, String>) -> Self {
        Self {
            store,
            configured,
            cache: RwLock::new(None),
        }
    }

    /// Route table for the current file snapshot.
    ///
    /// If the file cannot be read, the last table built is reused, or the
    /// configured routes alone before any successful read.
    fn table(&self) -> Arc<RouteTable> {
        let file = match self.store.snapshot() {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(error = %e, "Menu file unreadable, using last known routes");
                if let Some((_, table)) = self.cache.read().unwrap().as_ref() {
                    return Arc::clone(table);
                }
                return Arc::new(self.configured.clone().into_iter().collect());
            }
        };

        if let Some((cached, table)) = self.cache.read().unwrap().as_ref()
            && Arc::ptr_eq(cached, &file)
        {
            return Arc::clone(table);
        }

        let mut table: RouteTable = file.routes.clone().into_iter().collect();
        table.extend(self.configured.clone());
        let table = Arc::new(table);
        tracing::debug!(routes = table.len(), "Rebuilt route table");

        *self.cache.write().unwrap() = Some((file, Arc::clone(&table)));
        table
    }
}

impl Router for FileRoutes {
    fn resolve_path_to_name(&self, path: &str) -> Option<String> {
        self.table().resolve_path_to_name(path)
    }

    fn resolve_name_to_path(&self, name: &str) -> Result<String, Unresolvable> {
        self.table().resolve_name_to_path(name)
    }
}
