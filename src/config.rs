//! Server configuration.
//!
//! Values come from built-in defaults, then an optional YAML file named by
//! `TEAPOT_CONFIG`, then the `LISTEN`, `DOC_ROOT` and `CANNED_DIR`
//! environment variables.
//!
//! ```yaml
//! server:
//!   listen_addr: "0.0.0.0:5555"
//! static_files:
//!   root: "./public"
//!   canned_dir: "./public/html"
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a YAML configuration file.
pub const CONFIG_ENV: &str = "TEAPOT_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds, e.g. `127.0.0.1:5555`
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory GET paths are resolved against
    pub root: PathBuf,
    /// Directory holding `<code>.html` pages; `<root>/html` when unset
    pub canned_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:5555".to_string(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public"),
            canned_dir: None,
        }
    }
}

impl StaticFilesConfig {
    pub fn canned_dir(&self) -> PathBuf {
        self.canned_dir
            .clone()
            .unwrap_or_else(|| self.root.join("html"))
    }
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` in place of the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match lookup(CONFIG_ENV) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(addr) = lookup("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Some(root) = lookup("DOC_ROOT") {
            cfg.static_files.root = PathBuf::from(root);
        }
        if let Some(dir) = lookup("CANNED_DIR") {
            cfg.static_files.canned_dir = Some(PathBuf::from(dir));
        }

        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("in config file {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(raw).context("invalid configuration")
    }
}
