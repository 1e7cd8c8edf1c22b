use crate::presentation::config::keybindings;

use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

pub const DEFAULT_API_URL: &str = "https://lldev.thespacedevs.com/2.2.0/";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Launch Library 2 endpoint settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Ask the search endpoint for the compact list representation
    pub list_mode: bool,
    /// Extra delay before each request, for exercising the loading state
    pub simulated_latency_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 10,
            list_mode: true,
            simulated_latency_ms: 0,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Load the user's configuration on top of the bundled defaults.
    ///
    /// A user file is optional; every key it leaves out falls back to the
    /// default. User keybindings are merged with the default ones.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::bundled()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(&default_config);
        Ok(cfg)
    }

    /// The configuration shipped with the binary
    pub fn bundled() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    fn merge_defaults(&mut self, default_config: &Self) {
        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presentation::config::keybindings::{parse_key_sequence, Action};

    #[test]
    fn test_bundled_config() -> Result<(), ConfigError> {
        let cfg = Config::bundled()?;

        let quit = parse_key_sequence("<q>").map_err(ConfigError::Message)?;
        assert_eq!(cfg.keybindings.get(&quit), Some(&Action::Quit));
        assert_eq!(cfg.api, ApiConfig::default());
        Ok(())
    }

    #[test]
    fn test_user_keybindings_are_merged_with_defaults() -> Result<(), ConfigError> {
        let defaults = Config::bundled()?;
        let mut cfg: Config = json5::from_str(r#"{ "keybindings": { "<Ctrl-q>": "Quit" } }"#)
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        cfg.merge_defaults(&defaults);

        let ctrl_q = parse_key_sequence("<Ctrl-q>").map_err(ConfigError::Message)?;
        let back = parse_key_sequence("<Esc>").map_err(ConfigError::Message)?;
        assert_eq!(cfg.keybindings.get(&ctrl_q), Some(&Action::Quit));
        assert_eq!(cfg.keybindings.get(&back), Some(&Action::Back));
        Ok(())
    }

    #[test]
    fn test_partial_api_section_keeps_defaults() -> Result<(), ConfigError> {
        let cfg: Config = json5::from_str(r#"{ "api": { "simulated_latency_ms": 1500 } }"#)
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        assert_eq!(cfg.api.simulated_latency_ms, 1500);
        assert_eq!(cfg.api.base_url, DEFAULT_API_URL);
        assert!(cfg.api.list_mode);
        Ok(())
    }
}
