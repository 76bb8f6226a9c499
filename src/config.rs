use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming an optional YAML config file.
pub const CONFIG_ENV: &str = "DOCSERVE_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
}

/// Where served files and error pages live on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory requests are resolved against
    pub document_root: PathBuf,
    /// Directory holding `<code>.html` error pages
    pub error_pages: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            document_root: PathBuf::from("htdocs"),
            error_pages: PathBuf::from("error"),
        }
    }
}

impl Config {
    /// Loads the config from the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from defaults, an optional YAML file and env overrides.
    ///
    /// `lookup` resolves environment variable names, which keeps tests away
    /// from the real process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut cfg = match lookup(CONFIG_ENV) {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path))?;
                Self::from_yaml(&raw)
                    .with_context(|| format!("invalid config file {}", path))?
            }
            None => Self::default(),
        };

        if let Some(addr) = lookup("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Some(root) = lookup("DOCUMENT_ROOT") {
            cfg.static_files.document_root = PathBuf::from(root);
        }
        if let Some(dir) = lookup("ERROR_PAGES") {
            cfg.static_files.error_pages = PathBuf::from(dir);
        }

        Ok(cfg)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Replaces the port of the listen address, keeping its host.
    pub fn with_port(mut self, port: &str) -> anyhow::Result<Self> {
        let port: u16 = port
            .parse()
            .with_context(|| format!("invalid port number '{}'", port))?;

        let host = match self.server.listen_addr.rsplit_once(':') {
            Some((host, _)) => host.to_string(),
            None => self.server.listen_addr.clone(),
        };
        self.server.listen_addr = format!("{}:{}", host, port);
        Ok(self)
    }
}
