//! Configuration management for the voxdo client.
//!
//! Settings live in a JSON file in the platform data directory and are
//! organized as optional modules: the task service connection and the speech
//! recognition setup. `voxdo init` runs an interactive wizard; each module can
//! also stay unconfigured, in which case the commands that need it surface a
//! pointed error instead of failing obscurely.
//!
//! The task service URL can be overridden per-invocation with the
//! `VOXDO_API_URL` environment variable, which wins over the config file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use voxdo::libs::config::Config;
//!
//! # fn run() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let base_url = config.api_url()?;
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::speech::Language;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the configured task service URL.
pub const API_URL_ENV: &str = "VOXDO_API_URL";

/// A configurable module shown in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Task service connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the task API, e.g. `http://localhost:5000/api`.
    pub api_url: String,
}

impl ServerConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "server".to_string(),
            name: "Task service".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let current = config.clone().unwrap_or(Self { api_url: String::new() });
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(current.api_url)
                .interact_text()?,
        })
    }
}

/// Speech recognition settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SpeechConfig {
    /// Recognition language code from the fixed list, e.g. `en-IN`.
    pub language: String,
    /// External recognizer command line; `{lang}` is replaced with the
    /// language code. Voice capture is unavailable while unset.
    pub command: Option<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            language: Language::default().code().to_string(),
            command: None,
        }
    }
}

impl SpeechConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "speech".to_string(),
            name: "Speech recognition".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let current = config.clone().unwrap_or_default();
        let labels: Vec<String> = Language::ALL.iter().map(|language| format!("{} ({})", language.label(), language.code())).collect();
        let default_index = Language::ALL.iter().position(|language| language.code() == current.language).unwrap_or(0);
        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLanguage.to_string())
            .items(&labels)
            .default(default_index)
            .interact()?;
        let command: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRecognizerCommand.to_string())
            .allow_empty(true)
            .default(current.command.unwrap_or_default())
            .interact_text()?;
        Ok(Self {
            language: Language::ALL[index].code().to_string(),
            command: if command.trim().is_empty() { None } else { Some(command) },
        })
    }

    /// Configured language, falling back to the default when the stored code
    /// is unknown.
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech: Option<SpeechConfig>,
}

impl Config {
    /// Loads the configuration, or the default when no file exists yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let file = File::open(&path)?;
        Ok(serde_json::from_reader(file)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn delete() -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Runs the interactive setup wizard over the selected modules and
    /// returns the updated configuration. Unselected modules keep their
    /// current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read()?;
        let modules = [ServerConfig::module(), SpeechConfig::module()];
        let names: Vec<&str> = modules.iter().map(|module| module.name.as_str()).collect();
        let selection = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&names)
            .interact()?;
        for index in selection {
            match modules[index].key.as_str() {
                "server" => config.server = Some(ServerConfig::init(&config.server)?),
                "speech" => config.speech = Some(SpeechConfig::init(&config.speech)?),
                _ => {}
            }
        }
        Ok(config)
    }

    /// Resolves the task service base URL: environment override first, then
    /// the configured server module.
    pub fn api_url(&self) -> Result<String> {
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                return Ok(url);
            }
        }
        self.server
            .as_ref()
            .map(|server| server.api_url.clone())
            .ok_or_else(|| msg_error_anyhow!(Message::ServerNotConfigured))
    }
}
