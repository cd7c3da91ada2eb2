// src/core/config_manager.rs
//! Client configuration: YAML file, then environment, then command-line overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_CONFIG_FILE: &str = "talentbridge.yaml";
const DEFAULT_LOG_FILE: &str = "talentbridge.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigManager {
    pub environment: String,
    pub backend_url: String,
    /// `None` waits on the backend indefinitely.
    pub timeout: Option<Duration>,
    pub log_file: PathBuf,
}

/// One environment section of the config file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    pub backend_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: EnvironmentConfig,
    #[serde(default)]
    production: EnvironmentConfig,
}

/// Values supplied on the command line; these win over everything else.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub backend_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            timeout: None,
            log_file: std::env::temp_dir().join(DEFAULT_LOG_FILE),
        }
    }
}

impl ConfigManager {
    /// Load configuration from the process environment.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        Self::load_with(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration, reading variables through `lookup`.
    pub fn load_with<F>(overrides: &ConfigOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("TALENTBRIDGE_ENV")
            .or_else(|| lookup("ENVIRONMENT"))
            .unwrap_or_else(|| "local".to_string());
        info!("Loading configuration for environment: {}", environment);

        let mut config = Self {
            environment: environment.clone(),
            ..Self::default()
        };

        let explicit = overrides.config_path.is_some();
        let path = overrides
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        if let Some(section) = Self::load_file(&path, &environment, explicit)? {
            config.apply(section);
        }

        config.apply(EnvironmentConfig {
            backend_url: lookup("TALENTBRIDGE_BACKEND_URL"),
            timeout_secs: lookup("TALENTBRIDGE_TIMEOUT_SECS")
                .map(|raw| {
                    raw.trim()
                        .parse::<u64>()
                        .context("TALENTBRIDGE_TIMEOUT_SECS must be a whole number of seconds")
                })
                .transpose()?,
            log_file: lookup("TALENTBRIDGE_LOG_FILE").map(PathBuf::from),
        });

        config.apply(EnvironmentConfig {
            backend_url: overrides.backend_url.clone(),
            timeout_secs: overrides.timeout_secs,
            log_file: None,
        });

        config.backend_url = normalize_backend_url(&config.backend_url)?;
        Ok(config)
    }

    fn load_file(
        path: &Path,
        environment: &str,
        explicit: bool,
    ) -> Result<Option<EnvironmentConfig>> {
        if !path.exists() {
            if explicit {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        info!("Loaded configuration file: {}", path.display());
        Ok(Some(match environment {
            "production" => file.production,
            _ => file.local,
        }))
    }

    fn apply(&mut self, section: EnvironmentConfig) {
        if let Some(url) = section.backend_url {
            self.backend_url = url;
        }
        // Zero means no deadline.
        if let Some(secs) = section.timeout_secs {
            self.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Some(log_file) = section.log_file {
            self.log_file = log_file;
        }
    }
}

fn normalize_backend_url(raw: &str) -> Result<String> {
    let url = raw.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        anyhow::bail!("Backend URL must start with http:// or https://, got: {}", raw);
    }
    Ok(url.to_string())
}
