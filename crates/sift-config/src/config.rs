use std::{
    fs,
    path::{Path, PathBuf},
    sync::{LazyLock, RwLock},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    paths::{xdg_config_home, xdg_data_home},
};

/// Default number of rows per search or autocomplete page.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Application's configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Path to the SQLite catalog database.
    /// Default: $XDG_DATA_HOME/sift/catalog.db
    pub db_path: Option<String>,

    /// Number of rows a search or autocomplete page takes when none is given.
    /// Default: 20
    pub search_limit: Option<usize>,

    /// Whether autocomplete includes prerelease versions by default.
    /// Default: false
    pub prerelease: Option<bool>,
}

pub static CONFIG: LazyLock<RwLock<Option<Config>>> = LazyLock::new(|| RwLock::new(None));

pub static CONFIG_PATH: LazyLock<RwLock<PathBuf>> = LazyLock::new(|| {
    RwLock::new(match std::env::var("SIFT_CONFIG") {
        Ok(path_str) => PathBuf::from(path_str),
        Err(_) => xdg_config_home().join("sift").join("config.toml"),
    })
});

/// Loads the configuration file into the global slot.
pub fn init() -> Result<()> {
    let config = Config::new()?;
    let mut global_config = CONFIG.write().unwrap_or_else(|e| e.into_inner());
    *global_config = Some(config);
    Ok(())
}

/// Points subsequent [`init`] calls at a different configuration file.
pub fn set_config_path<P: AsRef<Path>>(path: P) {
    let mut config_path = CONFIG_PATH.write().unwrap_or_else(|e| e.into_inner());
    *config_path = path.as_ref().to_path_buf();
}

pub fn config_path() -> PathBuf {
    CONFIG_PATH
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .to_path_buf()
}

/// Returns the loaded configuration, or the defaults if [`init`] was never called.
pub fn get_config() -> Config {
    let config_guard = CONFIG.read().unwrap_or_else(|e| e.into_inner());
    match config_guard.as_ref() {
        Some(config) => config.clone(),
        None => Config::default_config(),
    }
}

impl Config {
    pub fn default_config() -> Self {
        let mut config = Self::default();
        config.fill_defaults();
        config
    }

    /// Creates a new configuration by loading it from the configuration file.
    /// If the configuration file is not found, it uses the default configuration.
    pub fn new() -> Result<Self> {
        let config_path = config_path();
        Self::load(&config_path)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let mut config: Config = match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file not found, using defaults");
                Self::default()
            }
            Err(err) => return Err(ConfigError::IoError(err)),
        };

        config.resolve()?;
        Ok(config)
    }

    pub fn resolve(&mut self) -> Result<()> {
        if let Some(db_path) = &self.db_path {
            if db_path.trim().is_empty() {
                return Err(ConfigError::InvalidDbPath(db_path.clone()));
            }
        }

        self.fill_defaults();
        Ok(())
    }

    fn fill_defaults(&mut self) {
        self.db_path.get_or_insert_with(|| {
            xdg_data_home()
                .join("sift")
                .join("catalog.db")
                .to_string_lossy()
                .into_owned()
        });
        self.search_limit.get_or_insert(DEFAULT_SEARCH_LIMIT);
        self.prerelease.get_or_insert(false);
    }

    pub fn get_db_path(&self) -> PathBuf {
        match &self.db_path {
            Some(path) => PathBuf::from(path),
            None => xdg_data_home().join("sift").join("catalog.db"),
        }
    }

    pub fn search_limit(&self) -> usize {
        self.search_limit.unwrap_or(DEFAULT_SEARCH_LIMIT)
    }

    pub fn prerelease(&self) -> bool {
        self.prerelease.unwrap_or(false)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::test_utils::with_env;

    #[test]
    fn test_default_config_creation() {
        let config = Config::default_config();

        assert_eq!(config.search_limit, Some(20));
        assert_eq!(config.prerelease, Some(false));
        assert!(config.db_path.is_some());
    }

    #[test]
    #[serial]
    fn test_default_db_path_uses_xdg_data_home() {
        with_env(vec![("XDG_DATA_HOME", "/data")], || {
            let config = Config::default_config();
            assert_eq!(config.get_db_path(), PathBuf::from("/data/sift/catalog.db"));
        });
    }

    #[test]
    fn test_config_resolve_rejects_empty_db_path() {
        let mut config = Config {
            db_path: Some("  ".to_string()),
            ..Default::default()
        };

        let result = config.resolve();
        assert!(matches!(result, Err(ConfigError::InvalidDbPath(_))));
    }

    #[test]
    fn test_config_resolve_keeps_explicit_values() {
        let mut config = Config {
            db_path: Some("/srv/catalog.db".to_string()),
            search_limit: Some(50),
            prerelease: Some(true),
        };

        config.resolve().unwrap();

        assert_eq!(config.get_db_path(), PathBuf::from("/srv/catalog.db"));
        assert_eq!(config.search_limit(), 50);
        assert!(config.prerelease());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("missing.toml")).unwrap();

        assert_eq!(config.search_limit(), 20);
        assert!(!config.prerelease());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "search_limit = 5\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.search_limit(), 5);
        assert!(!config.prerelease());
        assert!(config.db_path.is_some());
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "search_limit = \"many\"\n").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::TomlDeError(_))
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default_config();
        let serialized = config.to_toml().unwrap();

        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    #[serial]
    fn test_config_path_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "prerelease = true\n").unwrap();

        set_config_path(&path);
        let config = Config::new().unwrap();
        assert!(config.prerelease());

        init().unwrap();
        assert!(get_config().prerelease());
    }
}
