mod api;
mod defaults;
mod key;

use crate::cli::Args;
use crate::error::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use api::ApiConfig;
pub use defaults::{
    default_key_file, API_KEY_ENV, API_URL_ENV, DEFAULT_API_BASE, TIMEOUT_ENV, USER_AGENT,
};
pub use key::{parse_key_file, resolve_api_key, resolve_api_key_with, KeySource};

/// Everything the request client needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_base: String,
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self> {
        let file_config = FileConfig::load()?;
        Ok(Self::resolve(args, &file_config, |name| env::var(name).ok()))
    }

    /// Merge CLI args > environment > config file > defaults.
    pub fn resolve<F>(args: &Args, file_config: &FileConfig, env_lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = args
            .api_url
            .clone()
            .or_else(|| env_lookup(API_URL_ENV).filter(|v| !v.is_empty()))
            .or(file_config.api.base_url.clone())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout_secs = args
            .timeout
            .or_else(|| env_lookup(TIMEOUT_ENV).and_then(|s| s.parse::<u64>().ok()))
            .or(file_config.api.timeout_secs);

        let key_file = args
            .env_file
            .clone()
            .or(file_config.api.key_file.clone())
            .map(PathBuf::from)
            .or_else(default_key_file);

        let api_key = match resolve_api_key(env_lookup(API_KEY_ENV), key_file.as_deref()) {
            Some((key, source)) => {
                tracing::debug!(?source, "resolved API key");
                Some(key)
            }
            None => {
                tracing::debug!("no API key found, sending empty authorization header");
                None
            }
        };

        Config {
            api_key,
            api_base,
            timeout_secs,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl FileConfig {
    pub fn load() -> anyhow::Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(FileConfig::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );

        let config = if is_yaml {
            serde_yaml::from_str(&contents).with_context(|| {
                format!("Failed to parse YAML config file: {}", path.display())
            })?
        } else {
            serde_json::from_str(&contents).with_context(|| {
                format!("Failed to parse JSON config file: {}", path.display())
            })?
        };

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".context7.yaml"),
            PathBuf::from(".context7.yml"),
            PathBuf::from(".context7.json"),
        ];

        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("context7");
            paths.push(config_dir.join("context7.yaml"));
            paths.push(config_dir.join("context7.yml"));
            paths.push(config_dir.join("context7.json"));
        }

        paths
    }
}
