//! Drawing facade over a store and a router.

use std::sync::Arc;

use menu_store::{Item, Menu, MenuStore, StoreError, Target};

use crate::assemble::{WalkEnd, assemble};
use crate::index::ItemIndex;
use crate::router::Router;
use crate::tree::{Diagnostic, DiagnosticKind, Level, MenuEntry, MenuTree};

/// Link used when an item has no usable target.
pub const DEFAULT_PLACEHOLDER: &str = "#";

/// Options applied to every draw.
#[derive(Clone, Debug)]
pub struct DrawOptions {
    /// Link for items without a target or with an unknown route name.
    pub placeholder: String,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
        }
    }
}

/// Why a menu could not be drawn.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    #[error("menu '{0}' not found")]
    MenuNotFound(String),
    #[error("menu '{0}' has no items")]
    EmptyMenu(String),
    #[error("no item of menu '{menu}' matches '{path}'")]
    CurrentItemNotFound { menu: String, path: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DrawError {
    /// Diagnostic kind reported on the empty tree.
    #[must_use]
    pub fn diagnostic_kind(&self) -> DiagnosticKind {
        match self {
            Self::MenuNotFound(_) => DiagnosticKind::MenuNotFound,
            Self::EmptyMenu(_) => DiagnosticKind::EmptyMenu,
            Self::CurrentItemNotFound { .. } => DiagnosticKind::CurrentItemNotFound,
            Self::Store(_) => DiagnosticKind::StoreError,
        }
    }

    /// Convert into a diagnostic.
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            kind: self.diagnostic_kind(),
            message: self.to_string(),
        }
    }
}

/// Draws menus from a store, resolving route names through a router.
///
/// `Menus` is cheap to clone and safe to share across request handlers.
#[derive(Clone)]
pub struct Menus {
    store: Arc<dyn MenuStore>,
    router: Arc<dyn Router>,
    options: DrawOptions,
}

impl Menus {
    /// Create a new drawing facade.
    #[must_use]
    pub fn new(store: Arc<dyn MenuStore>, router: Arc<dyn Router>, options: DrawOptions) -> Self {
        Self {
            store,
            router,
            options,
        }
    }

    /// All menus known to the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    pub fn list(&self) -> Result<Vec<Menu>, StoreError> {
        self.store.menus()
    }

    /// Draw `menu_name` for the page at `current_path`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError`] if the menu does not exist, has no items, has no
    /// item for `current_path`, or the store fails.
    pub fn try_draw(&self, menu_name: &str, current_path: &str) -> Result<MenuTree, DrawError> {
        let menu = self.store.menu(menu_name).map_err(|e| lookup_error(e, menu_name))?;
        let items = self
            .store
            .items(menu_name)
            .map_err(|e| lookup_error(e, menu_name))?;
        if items.is_empty() {
            return Err(DrawError::EmptyMenu(menu_name.to_owned()));
        }

        let index = ItemIndex::new(items);
        let route_name = self.router.resolve_path_to_name(current_path);
        let not_found = || DrawError::CurrentItemNotFound {
            menu: menu_name.to_owned(),
            path: current_path.to_owned(),
        };
        let current = index
            .find_current(current_path, route_name.as_deref())
            .ok_or_else(not_found)?;
        let assembly = assemble(&index, current.id, menu.depth).ok_or_else(not_found)?;

        let mut warnings = Vec::new();
        match assembly.end {
            WalkEnd::Root => {}
            WalkEnd::DepthLimit => {
                tracing::debug!(menu = menu_name, depth = menu.depth, "Ancestor walk truncated");
            }
            WalkEnd::MissingParent(parent) => {
                tracing::warn!(menu = menu_name, parent, "Parent item missing");
                warnings.push(format!("parent item {parent} does not exist"));
            }
            WalkEnd::Cycle(item) => {
                tracing::warn!(menu = menu_name, item, "Parent cycle detected");
                warnings.push(format!("parent cycle through item {item}"));
            }
        }

        let levels = assembly
            .levels
            .iter()
            .map(|level| Level {
                level: level.level,
                items: level
                    .items
                    .iter()
                    .map(|placed| MenuEntry {
                        id: placed.item.id,
                        parent_id: placed.item.parent_id,
                        name: placed.item.name.clone(),
                        url: self.url_for(menu_name, placed.item, &mut warnings),
                        class: placed.class,
                        order: placed.item.order,
                        level: placed.level,
                    })
                    .collect(),
            })
            .collect();

        Ok(MenuTree {
            menu_name: menu_name.to_owned(),
            levels,
            warnings,
            diagnostic: None,
        })
    }

    /// Draw `menu_name` for the page at `current_path`, never failing.
    ///
    /// Errors are logged and turned into an empty tree with a diagnostic.
    #[must_use]
    pub fn draw(&self, menu_name: &str, current_path: &str) -> MenuTree {
        match self.try_draw(menu_name, current_path) {
            Ok(tree) => tree,
            Err(err) => {
                match &err {
                    DrawError::MenuNotFound(_) | DrawError::Store(_) => {
                        tracing::error!(menu = menu_name, path = current_path, error = %err, "Menu draw failed");
                    }
                    DrawError::EmptyMenu(_) | DrawError::CurrentItemNotFound { .. } => {
                        tracing::warn!(menu = menu_name, path = current_path, error = %err, "Menu drawn empty");
                    }
                }
                MenuTree::empty(menu_name, err.to_diagnostic())
            }
        }
    }

    /// Resolve an item's link.
    fn url_for(&self, menu_name: &str, item: &Item, warnings: &mut Vec<String>) -> String {
        match &item.target {
            Some(Target::Route(name)) => match self.router.resolve_name_to_path(name) {
                Ok(path) => path,
                Err(err) => {
                    tracing::warn!(menu = menu_name, item = item.id, route = %name, "Unresolvable route");
                    warnings.push(format!("item {}: {err}", item.id));
                    self.options.placeholder.clone()
                }
            },
            Some(Target::Path(url) | Target::External(url)) => url.clone(),
            None => self.options.placeholder.clone(),
        }
    }
}

/// Map a store lookup failure, distinguishing a missing menu.
fn lookup_error(err: StoreError, menu_name: &str) -> DrawError {
    if err.is_not_found() {
        DrawError::MenuNotFound(menu_name.to_owned())
    } else {
        DrawError::Store(err)
    }
}
