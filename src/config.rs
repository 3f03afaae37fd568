//! Configuration for desk-ticket
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. built-in defaults
//! 2. the user config file (`config.toml` in the platform config directory)
//! 3. `desk-ticket.toml` in the working directory
//! 4. environment variables such as `DESK_TICKET_STORAGE__DATA_DIR`
//!
//! Command-line flags override all of these.

use crate::core::{Category, Priority};
use crate::desk::DEFAULT_ID_PREFIX;
use crate::error::Result;
use crate::storage::DEFAULT_RECORD_KEY;
use config::{Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project configuration file
pub const PROJECT_CONFIG_FILE: &str = "desk-ticket.toml";

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "DESK_TICKET";

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = ".desk-ticket";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub tickets: TicketConfig,
}

/// Where the ticket record lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    /// File stem of the record inside `data_dir`
    pub record_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            record_key: DEFAULT_RECORD_KEY.to_string(),
        }
    }
}

/// Defaults applied when creating tickets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketConfig {
    pub id_prefix: String,
    pub default_category: Category,
    pub default_priority: Priority,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            default_category: Category::default(),
            default_priority: Priority::default(),
        }
    }
}

impl Config {
    /// Load configuration from all standard sources
    pub fn load() -> Result<Self> {
        Self::load_from(user_config_path().as_deref(), Path::new(PROJECT_CONFIG_FILE))
    }

    /// Load configuration, falling back to defaults if any source is broken
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring configuration: {e}");
                Self::default()
            },
        }
    }

    /// Load from explicit file locations plus the environment.
    ///
    /// Missing files are skipped.
    pub fn load_from(user_file: Option<&Path>, project_file: &Path) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = user_file {
            builder = builder.add_source(File::from(path).required(false));
        }

        let config: Self = builder
            .add_source(File::from(project_file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        tracing::debug!("Loaded configuration: {config:?}");
        Ok(config)
    }
}

/// Location of the per-user configuration file, if the platform has one
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "desk-ticket").map(|dirs| dirs.config_dir().join("config.toml"))
}
