//! Configuration management for the menu engine.
//!
//! Parses `menu.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Example
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 7980
//!
//! [store]
//! path = "${MENU_STORE:-menus.yaml}"
//!
//! [render]
//! placeholder = "#"
//!
//! [routes]
//! index = "/"
//! i41 = "/i41"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `server.host` and `store.path` support `${VAR}` and `${VAR:-default}`;
//! `store.path` additionally expands a leading `~`.

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override menu store file.
    pub store_path: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "menu.toml";

/// Default store filename, relative to the config directory.
const DEFAULT_STORE_FILENAME: &str = "menus.yaml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Store configuration as written in TOML (path relative to config file).
    store: StoreConfigRaw,
    /// Rendering configuration.
    pub render: RenderConfig,
    /// Route name to path table used to resolve symbolic targets.
    pub routes: BTreeMap<String, String>,

    /// Resolved store configuration (set after loading).
    #[serde(skip)]
    pub store_resolved: StoreConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7980,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct StoreConfigRaw {
    path: Option<String>,
}

/// Resolved store configuration with an absolute path.
#[derive(Debug, Default)]
pub struct StoreConfig {
    /// Menu file read by the YAML store.
    pub path: PathBuf,
}

/// Rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Link used for items whose route name cannot be resolved.
    pub placeholder: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            placeholder: "#".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`store.path`").
        field: String,
        /// Error message (e.g., "${`MENU_STORE`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `menu.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the settings are invalid once CLI overrides are applied.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(store_path) = &settings.store_path {
            self.store_resolved.path.clone_from(store_path);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            store: StoreConfigRaw::default(),
            render: RenderConfig::default(),
            routes: BTreeMap::new(),
            store_resolved: StoreConfig {
                path: base.join(DEFAULT_STORE_FILENAME),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        require_non_empty(&self.render.placeholder, "render.placeholder")?;
        self.validate_routes()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Route names are symbolic (no `/`), route paths are absolute.
    fn validate_routes(&self) -> Result<(), ConfigError> {
        for (name, path) in &self.routes {
            if name.is_empty() || name.contains('/') {
                return Err(ConfigError::Validation(format!(
                    "routes: '{name}' is not a valid route name (must be non-empty without '/')"
                )));
            }
            if !path.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "routes.{name} must start with '/'"
                )));
            }
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        if let Some(ref path) = self.store.path {
            self.store.path = Some(expand::expand_path(path, "store.path")?);
        }

        Ok(())
    }

    /// Resolve the store path against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.store_resolved = StoreConfig {
            path: config_dir.join(self.store.path.as_deref().unwrap_or(DEFAULT_STORE_FILENAME)),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7980);
        assert_eq!(
            config.store_resolved.path,
            PathBuf::from("/test/menus.yaml")
        );
        assert_eq!(config.render.placeholder, "#");
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 7980);
        assert_eq!(config.render.placeholder, "#");
    }

    #[test]
    fn test_parse_routes() {
        let toml = r#"
[routes]
index = "/"
i41 = "/i41"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes["index"], "/");
    }

    #[test]
    fn test_resolve_relative_store_path() {
        let toml = r#"
[store]
path = "data/nav.yaml"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.store_resolved.path,
            PathBuf::from("/project/data/nav.yaml")
        );
    }

    #[test]
    fn test_resolve_absolute_store_path() {
        let toml = r#"
[store]
path = "/srv/menus.yaml"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.store_resolved.path,
            PathBuf::from("/srv/menus.yaml")
        );
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(9000),
            store_path: Some(PathBuf::from("/custom/menus.yaml")),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(
            config.store_resolved.path,
            PathBuf::from("/custom/menus.yaml")
        );
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(
            config.store_resolved.path,
            PathBuf::from("/test/menus.yaml")
        );
    }

    #[test]
    fn test_expand_env_vars_store_path() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MENU_TEST_STORE_DIR", "/var/menus");
        }

        let toml = r#"
[store]
path = "${MENU_TEST_STORE_DIR}/main.yaml"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.store_resolved.path,
            PathBuf::from("/var/menus/main.yaml")
        );

        unsafe {
            std::env::remove_var("MENU_TEST_STORE_DIR");
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.toml");
        std::fs::write(
            &path,
            "[server]\nport = 8100\n\n[routes]\nindex = \"/\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.port, 8100);
        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.store_resolved.path, dir.path().join("menus.yaml"));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/menu.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_rejects_invalid_cli_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.toml");
        std::fs::write(&path, "[server]\nport = 8100\n").unwrap();
        let settings = CliSettings {
            port: Some(0),
            ..CliSettings::default()
        };

        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("server.port"));
    }

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_server_port_zero() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.port = 0;
        assert_validation_error(&config, &["server.port"]);
    }

    #[test]
    fn test_validate_empty_placeholder() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.render.placeholder = String::new();
        assert_validation_error(&config, &["render.placeholder", "empty"]);
    }

    #[test]
    fn test_validate_route_path_must_be_absolute() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.routes.insert("i2".to_owned(), "i2".to_owned());
        assert_validation_error(&config, &["routes.i2", "start with '/'"]);
    }

    #[test]
    fn test_validate_route_name_without_slash() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.routes.insert("a/b".to_owned(), "/a/b".to_owned());
        assert_validation_error(&config, &["a/b", "route name"]);
    }
}
