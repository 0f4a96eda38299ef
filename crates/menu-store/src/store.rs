//! Store trait and error types.
//!
//! Provides the core [`MenuStore`] trait for reading menus and their items,
//! along with [`StoreError`] for unified error handling across backends.

use std::path::PathBuf;

use crate::model::{Item, Menu};

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorKind {
    /// Menu (or backing file) does not exist.
    NotFound,
    /// Stored data violates a write-time invariant.
    Invalid,
    /// Backing data could not be parsed.
    Parse,
    /// I/O failure while reading the backend.
    Io,
    /// Other/unknown error category.
    Other,
}

/// Store error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StoreError {
    /// Semantic error category.
    pub kind: StoreErrorKind,
    /// Menu name context (if applicable).
    pub menu: Option<String>,
    /// File path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Yaml", "Mock").
    pub backend: Option<&'static str>,
    message: Option<String>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// Create a new store error.
    #[must_use]
    pub fn new(kind: StoreErrorKind) -> Self {
        Self {
            kind,
            menu: None,
            path: None,
            backend: None,
            message: None,
            source: None,
        }
    }

    /// Attach menu name context.
    #[must_use]
    pub fn with_menu(mut self, menu: impl Into<String>) -> Self {
        self.menu = Some(menu.into());
        self
    }

    /// Attach file path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach a human-readable message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Downcast the source error to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Create a not found error for a menu name.
    #[must_use]
    pub fn menu_not_found(menu: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::NotFound).with_menu(menu)
    }

    /// Create a store error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StoreErrorKind::NotFound,
            _ => StoreErrorKind::Io,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }

    /// True if the error means the requested menu does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == StoreErrorKind::NotFound && self.menu.is_some()
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message: source (menu: main) (path: menus.yaml)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StoreErrorKind::NotFound => "Not found",
            StoreErrorKind::Invalid => "Invalid data",
            StoreErrorKind::Parse => "Parse error",
            StoreErrorKind::Io => "I/O error",
            StoreErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(menu) = &self.menu {
            write!(f, " (menu: {menu})")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Read access to menus and their items.
///
/// Implementations return a consistent snapshot per call and never mutate
/// the data they hand out. No validation is implied: callers must tolerate
/// any stored state, including parent cycles or parents from other menus.
pub trait MenuStore: Send + Sync {
    /// List all menus.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    fn menus(&self) -> Result<Vec<Menu>, StoreError>;

    /// Look up a menu by name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] with [`StoreErrorKind::NotFound`] if no menu
    /// has this name, or another kind if the backend cannot be read.
    fn menu(&self, name: &str) -> Result<Menu, StoreError> {
        self.menus()?
            .into_iter()
            .find(|menu| menu.name == name)
            .ok_or_else(|| StoreError::menu_not_found(name))
    }

    /// All items belonging to the named menu, in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] with [`StoreErrorKind::NotFound`] if no menu
    /// has this name.
    fn items(&self, menu_name: &str) -> Result<Vec<Item>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_all_context() {
        let err = StoreError::new(StoreErrorKind::Parse)
            .with_backend("Yaml")
            .with_message("bad indentation")
            .with_path("menus.yaml");

        assert_eq!(
            err.to_string(),
            "[Yaml] Parse error: bad indentation (path: menus.yaml)"
        );
    }

    #[test]
    fn test_menu_not_found() {
        let err = StoreError::menu_not_found("main");

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found (menu: main)");
    }

    #[test]
    fn test_missing_file_is_not_menu_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = StoreError::io(io, Some(PathBuf::from("menus.yaml")));

        assert_eq!(err.kind, StoreErrorKind::NotFound);
        assert!(!err.is_not_found());
        assert!(err.downcast_source::<std::io::Error>().is_some());
    }

    #[test]
    fn test_io_error_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::io(io, None);

        assert_eq!(err.kind, StoreErrorKind::Io);
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let io = std::io::Error::other("boom");
        let err = StoreError::new(StoreErrorKind::Other).with_source(io);

        assert!(err.source().is_some());
    }
}
