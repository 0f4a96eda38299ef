//! Route resolution between symbolic names and concrete paths.

use std::collections::{BTreeMap, HashMap};

/// A route name the router does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no route named '{0}'")]
pub struct Unresolvable(pub String);

/// Host router capability.
///
/// Maps request paths to symbolic route names and back. Implementations must
/// be cheap to call; the assembler calls `resolve_name_to_path` once per
/// route-name target in the drawn slice.
pub trait Router: Send + Sync {
    /// Route name serving `path`, if any.
    fn resolve_path_to_name(&self, path: &str) -> Option<String>;

    /// Concrete path for a route name.
    ///
    /// # Errors
    ///
    /// Returns [`Unresolvable`] if no route has this name.
    fn resolve_name_to_path(&self, name: &str) -> Result<String, Unresolvable>;
}

/// Static route table.
///
/// Path lookups are exact, except that a trailing `/` on a non-root path is
/// ignored. When several names share a path, the first one added wins.
#[derive(Debug, Default, Clone)]
pub struct RouteTable {
    by_name: BTreeMap<String, String>,
    by_path: HashMap<String, String>,
}

/// Strip a trailing slash from non-root paths.
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

impl RouteTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route.
    #[must_use]
    pub fn with_route(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.insert(name.into(), path.into());
        self
    }

    /// Add a route in place.
    ///
    /// A name added twice keeps its latest path.
    pub fn insert(&mut self, name: String, path: String) {
        self.by_path
            .entry(normalize(&path).to_owned())
            .or_insert_with(|| name.clone());
        self.by_name.insert(name, path);
    }

    /// Number of routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// True if the table has no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl<N: Into<String>, P: Into<String>> FromIterator<(N, P)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<N: Into<String>, P: Into<String>> Extend<(N, P)> for RouteTable {
    fn extend<I: IntoIterator<Item = (N, P)>>(&mut self, iter: I) {
        for (name, path) in iter {
            self.insert(name.into(), path.into());
        }
    }
}

impl Router for RouteTable {
    fn resolve_path_to_name(&self, path: &str) -> Option<String> {
        self.by_path.get(normalize(path)).cloned()
    }

    fn resolve_name_to_path(&self, name: &str) -> Result<String, Unresolvable> {
        self.by_name
            .get(name)
            .cloned()
            .ok_or_else(|| Unresolvable(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new()
            .with_route("index", "/")
            .with_route("i3", "/i3")
    }

    #[test]
    fn test_resolve_name() {
        assert_eq!(table().resolve_name_to_path("index"), Ok("/".to_owned()));
    }

    #[test]
    fn test_resolve_unknown_name() {
        let err = table().resolve_name_to_path("missing").unwrap_err();

        assert_eq!(err, Unresolvable("missing".to_owned()));
        assert_eq!(err.to_string(), "no route named 'missing'");
    }

    #[test]
    fn test_resolve_path() {
        assert_eq!(table().resolve_path_to_name("/i3"), Some("i3".to_owned()));
        assert_eq!(table().resolve_path_to_name("/"), Some("index".to_owned()));
    }

    #[test]
    fn test_resolve_path_ignores_trailing_slash() {
        assert_eq!(table().resolve_path_to_name("/i3/"), Some("i3".to_owned()));
    }

    #[test]
    fn test_resolve_unknown_path() {
        assert_eq!(table().resolve_path_to_name("/nope"), None);
    }

    #[test]
    fn test_first_name_wins_for_shared_path() {
        let table = RouteTable::new()
            .with_route("home", "/")
            .with_route("index", "/");

        assert_eq!(table.resolve_path_to_name("/"), Some("home".to_owned()));
        assert_eq!(table.resolve_name_to_path("index"), Ok("/".to_owned()));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_from_iterator() {
        let table: RouteTable = [("index", "/"), ("i2", "/i2")].into_iter().collect();

        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }
}
