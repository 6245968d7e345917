use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{Settings, is_supported_language};
use crate::emit::DEFAULT_OUTPUT_ROOT;

pub const CONFIG_FILE_NAME: &str = ".yamllocalesrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_file", alias = "yamlFile")]
    pub source_file: String,
    #[serde(default = "default_output_root")]
    pub output_root: String,
    #[serde(flatten)]
    pub settings: Settings,
}

fn default_source_file() -> String {
    "./src/i18n-messages.yaml".to_string()
}

fn default_output_root() -> String {
    DEFAULT_OUTPUT_ROOT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_file: default_source_file(),
            output_root: default_output_root(),
            settings: Settings::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Alias lists must be non-empty and disjoint, and with enforcement on the
    /// default language itself must be supported.
    pub fn validate(&self) -> Result<()> {
        let settings = &self.settings;

        if settings.default_language.is_empty() {
            bail!("'defaultLanguage' must not be empty");
        }
        if settings.message_keys.is_empty() {
            bail!("'messageKeys' must list at least one key");
        }
        if settings.description_keys.is_empty() {
            bail!("'descriptionKeys' must list at least one key");
        }
        if let Some(shared) = settings
            .message_keys
            .iter()
            .find(|k| settings.description_keys.contains(k))
        {
            bail!(
                "\"{}\" is listed in both 'messageKeys' and 'descriptionKeys'",
                shared
            );
        }
        if settings.enforce_supported_languages
            && !is_supported_language(&settings.default_language)
        {
            bail!(
                "Default language '{}' is not a supported language.\n\
                 Hint: Disable 'enforceSupportedLanguages' or run `yaml-locales languages`.",
                settings.default_language
            );
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
