use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// `env()` variables a spanning polyfill fills in with the fold geometry.
pub const FOLD_ENV_VARIABLES: [&str; 4] = ["fold-top", "fold-left", "fold-width", "fold-height"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid stylesheet pattern {pattern}: {source}")]
    InvalidGlob {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to read stylesheet path: {0}")]
    GlobReadError(#[from] glob::GlobError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glob patterns of stylesheets to process when none are given explicitly.
    pub stylesheets: Vec<String>,
    /// Replacement values for CSS `env()` variables, keyed by variable name.
    pub env: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stylesheets: Vec::new(),
            env: FOLD_ENV_VARIABLES
                .iter()
                .map(|name| (name.to_string(), "0px".to_string()))
                .collect(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/spanning-css");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and environment variables in each stylesheet pattern and
    /// returns the matching paths, sorted and without duplicates.
    pub fn resolve_stylesheets(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut paths = Vec::new();
        for pattern in &self.stylesheets {
            let expanded = Self::expand_pattern(pattern);
            let matches = glob::glob(&expanded).map_err(|source| ConfigError::InvalidGlob {
                pattern: pattern.clone(),
                source,
            })?;
            for entry in matches {
                paths.push(entry?);
            }
        }
        paths.sort();
        paths.dedup();
        Ok(paths)
    }

    /// Substitutes every configured `env()` variable in `css`.
    pub fn apply_env(&self, css: &str) -> String {
        spanning_css_engine::replace_css_env_variables_with(css, &self.env)
    }

    fn expand_pattern(pattern: &str) -> String {
        match shellexpand::full(pattern) {
            Ok(expanded) => expanded.into_owned(),
            Err(_) => pattern.to_string(),
        }
    }
}
