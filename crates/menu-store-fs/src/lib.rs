//! YAML file store for menus.
//!
//! This crate provides [`YamlStore`], a file-backed implementation of the
//! [`MenuStore`](menu_store::MenuStore) trait. It handles:
//!
//! - Parsing the menu file (routes, menus, inline items)
//! - Write-time validation on every (re)load
//! - Mtime caching so unchanged files are parsed once
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use menu_store::MenuStore;
//! use menu_store_fs::YamlStore;
//!
//! let store = YamlStore::new(PathBuf::from("menus.yaml"));
//! for item in store.items("main")? {
//!     println!("{}: {}", item.id, item.name);
//! }
//! ```

mod yaml;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::SystemTime;

use menu_store::{Item, Menu, MenuStore, StoreError, StoreErrorKind, validate_store};

pub use yaml::MenuFile;

/// Backend identifier for error messages.
const BACKEND: &str = "Yaml";

/// Parsed file together with the mtime it was read at.
struct CachedFile {
    mtime: SystemTime,
    file: Arc<MenuFile>,
}

/// File-backed menu store.
///
/// Reads a single YAML file. The parsed snapshot is cached and reused until
/// the file's modification time changes, so concurrent readers share one
/// `Arc<MenuFile>` per file version.
pub struct YamlStore {
    path: PathBuf,
    cache: RwLock<Option<CachedFile>>,
}

impl YamlStore {
    /// Create a store reading from `path`.
    ///
    /// The file is not touched until the first read.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cache: RwLock::new(None),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Route table declared in the file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read, parsed or validated.
    pub fn routes(&self) -> Result<BTreeMap<String, String>, StoreError> {
        Ok(self.snapshot()?.routes.clone())
    }

    /// Current snapshot of the file, reloading it if it changed on disk.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read, parsed or validated.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn snapshot(&self) -> Result<Arc<MenuFile>, StoreError> {
        let mtime = fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .map_err(|e| StoreError::io(e, Some(self.path.clone())).with_backend(BACKEND))?;

        if let Some(cached) = self
            .cache
            .read()
            .unwrap()
            .as_ref()
            .filter(|c| c.mtime == mtime)
        {
            return Ok(Arc::clone(&cached.file));
        }

        let file = Arc::new(self.load()?);
        *self.cache.write().unwrap() = Some(CachedFile {
            mtime,
            file: Arc::clone(&file),
        });

        Ok(file)
    }

    /// Read, parse and validate the backing file.
    fn load(&self) -> Result<MenuFile, StoreError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::io(e, Some(self.path.clone())).with_backend(BACKEND))?;

        let file = yaml::parse_menu_file(&content)
            .map_err(|e| e.with_path(&self.path).with_backend(BACKEND))?;

        let errors = validate_store(&file.menus, &file.items);
        if !errors.is_empty() {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            tracing::warn!(path = %self.path.display(), errors = errors.len(), "Menu file failed validation");
            return Err(StoreError::new(StoreErrorKind::Invalid)
                .with_message(message)
                .with_path(&self.path)
                .with_backend(BACKEND));
        }

        tracing::debug!(
            path = %self.path.display(),
            menus = file.menus.len(),
            items = file.items.len(),
            "Menu file loaded"
        );

        Ok(file)
    }
}

impl MenuStore for YamlStore {
    fn menus(&self) -> Result<Vec<Menu>, StoreError> {
        Ok(self.snapshot()?.menus.clone())
    }

    fn menu(&self, name: &str) -> Result<Menu, StoreError> {
        self.snapshot()?
            .menus
            .iter()
            .find(|menu| menu.name == name)
            .cloned()
            .ok_or_else(|| StoreError::menu_not_found(name).with_backend(BACKEND))
    }

    fn items(&self, menu_name: &str) -> Result<Vec<Item>, StoreError> {
        let file = self.snapshot()?;
        let menu = file
            .menus
            .iter()
            .find(|menu| menu.name == menu_name)
            .ok_or_else(|| StoreError::menu_not_found(menu_name).with_backend(BACKEND))?;

        Ok(file
            .items
            .iter()
            .filter(|item| item.menu_id == menu.id)
            .cloned()
            .collect())
    }
}
