//! Global configuration at ~/.config/encontros/config.toml.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::{StoreError, StoreResult};

static DEFAULT_DATA_DIR: &str = "~/.encontros";
const DEFAULT_PORT: u16 = 4180;

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

static DEFAULT_TEMPLATE: &str = "\
# encontros configuration
#
# Directory holding the database file:
# data_dir = \"~/.encontros\"
#
# Port the HTTP server binds on localhost:
# port = 4180
";

/// Global configuration shared by the CLI and the server.
#[derive(Deserialize, Clone)]
pub struct AppConfig {
    /// Directory holding the database file; `~` is expanded on use.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Port the HTTP server binds on localhost.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl AppConfig {
    /// Load the config file, creating a commented default template on first
    /// run. A missing or empty file yields the defaults.
    pub fn load() -> StoreResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            Self::write_default_template(&path)?;
        }

        let config: AppConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| StoreError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| StoreError::Config(e.to_string()))?;

        Ok(config)
    }

    pub fn config_path() -> StoreResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| StoreError::Config("Could not determine config directory".into()))?
            .join("encontros");

        Ok(config_dir.join("config.toml"))
    }

    /// Absolute path of the database file, with `~` expanded.
    pub fn database_path(&self) -> PathBuf {
        let dir = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(dir).join("encontros.redb")
    }

    fn write_default_template(path: &Path) -> StoreResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, DEFAULT_TEMPLATE)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_empty_config_yields_defaults() {
        let config = parse("");
        assert_eq!(config.data_dir, PathBuf::from("~/.encontros"));
        assert_eq!(config.port, 4180);
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let config = parse("data_dir = \"/var/lib/encontros\"\nport = 8080\n");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/encontros"));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_database_path_ends_with_file_name() {
        let config = parse("data_dir = \"/tmp/encontros\"");
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/encontros/encontros.redb")
        );
    }
}
