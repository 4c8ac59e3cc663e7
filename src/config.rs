use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::transform::transform_description;
use crate::types::UserMap;

const TRUNCATION_ENV: &str = "JIRA_SLACK_TRUNCATION_LENGTH";

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub truncation_length: Option<usize>,
    #[serde(default)]
    pub users: UserMap,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| Error::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::from_toml_str(&contents).map_err(|e| Error::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "jira-slack")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(Error::NoConfigDir)
    }

    /// Truncation length with env var taking precedence over config file
    pub fn truncation_length(&self) -> Option<usize> {
        self.truncation_length_with(std::env::var(TRUNCATION_ENV).ok())
    }

    fn truncation_length_with(&self, env_value: Option<String>) -> Option<usize> {
        if let Some(raw) = env_value {
            match raw.trim().parse() {
                Ok(len) => return Some(len),
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid {TRUNCATION_ENV}"),
            }
        }

        self.truncation_length
    }

    /// [`transform_description`] with the configured truncation length.
    pub fn format_description(&self, description: Option<&str>) -> String {
        transform_description(description, self.truncation_length())
    }
}
