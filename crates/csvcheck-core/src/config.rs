use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Service address used when the config file does not name one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Global configuration loaded from `~/.config/csvcheck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvcheckConfig {
    /// Base URL the endpoint paths (`/upload`, `/validate`, `/download`) resolve against.
    pub base_url: String,
    /// Seconds allowed for establishing the TCP/TLS connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for a whole request, upload included.
    pub timeout_secs: u64,
    /// Optional User-Agent override; defaults to `csvcheck/<version>`.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Where downloaded reports are saved (None = current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl Default for CsvcheckConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 300,
            user_agent: None,
            download_dir: None,
        }
    }
}

impl CsvcheckConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("csvcheck/{}", env!("CARGO_PKG_VERSION")))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("csvcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CsvcheckConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CsvcheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CsvcheckConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
