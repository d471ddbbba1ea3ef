//! # sqlpath-config
//!
//! Layered configuration loading for sqlpath using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SQLPATH_*` prefix, `__` as separator)
//! 2. Project-level `.sqlpath/config.toml`
//! 3. User-level `~/.config/sqlpath/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `SQLPATH_MANIFESTS__DIR` -> `manifests.dir`,
//! `SQLPATH_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sqlpath_config::SqlPathConfig;
//!
//! let config = SqlPathConfig::load_with_dotenv().expect("config");
//! if let Some(path) = config.manifests.concept_registry_path() {
//!     println!("registry: {}", path.display());
//! }
//! ```

mod error;
mod general;
mod manifests;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use manifests::{
    ALIGNMENT_MAP_FILE, CONCEPT_REGISTRY_FILE, ERROR_SUBTYPES_FILE, ManifestsConfig,
};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SqlPathConfig {
    #[serde(default)]
    pub manifests: ManifestsConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SqlPathConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory, if one exists.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the CLI can layer extra providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".sqlpath/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SQLPATH_").split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sqlpath").join("config.toml"))
    }
}
