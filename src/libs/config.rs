//! Configuration management for the liftlog application.
//!
//! Settings live in a JSON file in the platform-specific application data
//! directory (see [`DataStorage`]). Each integration has its own optional
//! section, and unconfigured sections are left out of the file.
//!
//! ## Sources
//!
//! 1. `config.json` in the data directory, if present
//! 2. Environment overrides, also read from a `.env` file loaded at startup:
//!    - `LIFTLOG_API_URL` - backend base URL
//!    - `LIFTLOG_API_TOKEN` - backend bearer token
//!
//! The overtime threshold is not a setting; it is a fixed domain constant.
//!
//! ```rust,no_run
//! use liftlog::libs::config::Config;
//!
//! let config = Config::read()?.with_env_overrides();
//! if let Some(backend) = &config.backend {
//!     println!("Backend URL: {}", backend.api_url);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::backend::BackendConfig;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::Path;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the backend base URL.
pub const ENV_API_URL: &str = "LIFTLOG_API_URL";

/// Environment variable overriding the backend token.
pub const ENV_API_TOKEN: &str = "LIFTLOG_API_TOKEN";

/// A configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Root configuration object.
///
/// All sections are optional so that a missing file or a partial setup
/// still yields a usable configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Backend API connection settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<BackendConfig>,
}

impl Config {
    /// Reads the configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from an explicit file.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration to the default location as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    /// Saves the configuration to an explicit file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file from the default location, if any.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Applies `LIFTLOG_API_URL` / `LIFTLOG_API_TOKEN` on top of the file settings.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(env::var(ENV_API_URL).ok(), env::var(ENV_API_TOKEN).ok())
    }

    /// Applies explicit backend overrides; blank values are ignored.
    pub fn with_overrides(mut self, api_url: Option<String>, auth_token: Option<String>) -> Self {
        let api_url = api_url.filter(|v| !v.trim().is_empty());
        let auth_token = auth_token.filter(|v| !v.trim().is_empty());

        if api_url.is_none() && auth_token.is_none() {
            return self;
        }

        let mut backend = self.backend.take().unwrap_or_default();
        if let Some(api_url) = api_url {
            backend.api_url = api_url;
        }
        if let Some(auth_token) = auth_token {
            backend.auth_token = auth_token;
        }
        self.backend = Some(backend);
        self
    }

    /// Runs the interactive setup wizard, starting from the stored settings.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![BackendConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "backend" => config.backend = Some(BackendConfig::init(&config.backend)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
