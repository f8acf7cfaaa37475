//! Configuration loading and management
//!
//! Settings come from an optional YAML file (path in `GRUBDASH_CONFIG`)
//! and are then overridden by individual `GRUBDASH_*` variables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_VAR: &str = "GRUBDASH_CONFIG";
pub const HOST_VAR: &str = "GRUBDASH_HOST";
pub const PORT_VAR: &str = "GRUBDASH_PORT";
pub const SEED_FILE_VAR: &str = "GRUBDASH_SEED_FILE";
pub const LOG_VAR: &str = "GRUBDASH_LOG";

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Initial dishes and orders; both collections start empty when unset
    pub seed_file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            seed_file: None,
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply `GRUBDASH_*` overrides read through `lookup`
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_VAR) {
            self.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("{PORT_VAR} is not a valid port: {port:?}"))?;
        }
        if let Some(seed_file) = lookup(SEED_FILE_VAR) {
            self.seed_file = Some(PathBuf::from(seed_file));
        }
        if let Some(filter) = lookup(LOG_VAR) {
            self.log_filter = filter;
        }
        Ok(self)
    }

    /// Configuration for this process: file from `GRUBDASH_CONFIG` (if set),
    /// then environment overrides
    pub fn load() -> Result<Self> {
        let lookup = |name: &str| std::env::var(name).ok();
        let base = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        base.apply_env(lookup)
    }

    /// `host:port` for binding
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
