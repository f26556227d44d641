//! Configuration management for the catalog service.
//!
//! Values are resolved in layers: built-in defaults, then `catalog.toml` (or the file passed
//! with `--config`), then `CATALOG_*` environment variables. Command-line flags are applied
//! last by the binary, which then calls [`Config::validate`].

use crate::framework::StorageKind;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Name of the configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid value for {var}: {reason}")]
    Env { var: &'static str, reason: String },
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub fixtures: FixtureConfig,
    pub logging: LoggingConfig,
    pub actors: ActorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// HTTP server bind address
    pub http_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// `memory` or `json`
    pub backend: StorageKind,
    /// Directory holding one `<collection>.json` per collection (json backend only)
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageKind::Memory,
            data_dir: PathBuf::from("./data"),
        }
    }
}

/// Startup data. Movies are always seeded; these settings cover the catalog collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    pub enabled: bool,
    pub brands: usize,
    pub categories: usize,
    pub products: usize,
    pub users: usize,
    /// Fixed RNG seed for reproducible data; random when unset.
    pub seed: Option<u64>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            brands: 50,
            categories: 50,
            products: 100,
            users: 50,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback filter when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Mailbox capacity of every collection actor
    pub mailbox_size: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self { mailbox_size: 32 }
    }
}

impl Config {
    /// Loads defaults, the config file and environment overrides.
    ///
    /// An explicit `path` must exist; without one, `catalog.toml` is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Config::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `CATALOG_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Applies overrides from any variable source; `lookup` returns the value of a variable.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(addr) = lookup("CATALOG_HTTP_ADDR") {
            self.server.http_addr = parse_env("CATALOG_HTTP_ADDR", &addr)?;
        }
        if let Some(backend) = lookup("CATALOG_STORAGE") {
            self.storage.backend = parse_env("CATALOG_STORAGE", &backend)?;
        }
        if let Some(dir) = lookup("CATALOG_DATA_DIR") {
            self.storage.data_dir = PathBuf::from(dir);
        }
        if let Some(seed) = lookup("CATALOG_SEED") {
            self.fixtures.seed = Some(parse_env("CATALOG_SEED", &seed)?);
        }
        if let Some(enabled) = lookup("CATALOG_FIXTURES") {
            self.fixtures.enabled = parse_env("CATALOG_FIXTURES", &enabled)?;
        }
        if let Some(level) = lookup("CATALOG_LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(ConfigError::Invalid(format!("unknown log level '{}'", other))),
        }

        if self.actors.mailbox_size == 0 {
            return Err(ConfigError::Invalid("actors.mailbox_size must be at least 1".into()));
        }

        if self.storage.backend == StorageKind::Json && self.storage.data_dir.as_os_str().is_empty()
        {
            return Err(ConfigError::Invalid(
                "storage.data_dir is required for the json backend".into(),
            ));
        }

        let fixtures = &self.fixtures;
        if fixtures.enabled && fixtures.products > 0 && (fixtures.brands == 0 || fixtures.categories == 0)
        {
            return Err(ConfigError::Invalid(
                "fixture products need at least one brand and one category".into(),
            ));
        }

        Ok(())
    }
}

fn parse_env<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Env {
        var,
        reason: format!("'{}': {}", value, e),
    })
}
