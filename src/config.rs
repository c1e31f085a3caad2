use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".tsglotrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_translations_root")]
    pub translations_root: String,
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,
    /// Directory searched for `qtTrId` calls.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Glob patterns of message keys skipped by every rule.
    #[serde(default)]
    pub ignore_ids: Vec<String>,
    /// Number of plural forms per language, overriding the built-in rules.
    #[serde(default)]
    pub plural_forms: BTreeMap<String, usize>,
}

fn default_translations_root() -> String {
    "./translations".to_string()
}

fn default_primary_locale() -> String {
    "en".to_string()
}

fn default_source_root() -> String {
    "./src".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translations_root: default_translations_root(),
            primary_locale: default_primary_locale(),
            source_root: default_source_root(),
            ignores: Vec::new(),
            ignore_ids: Vec::new(),
            plural_forms: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a glob pattern is invalid or a plural form count is zero.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for pattern in &self.ignore_ids {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignoreIds': \"{}\"", pattern))?;
        }

        for (language, count) in &self.plural_forms {
            if *count == 0 {
                bail!(
                    "Invalid value in 'pluralForms': \"{}\" must have at least one form",
                    language
                );
            }
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
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
