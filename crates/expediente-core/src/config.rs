use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/expediente/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpedienteConfig {
    /// Total per-request timeout in seconds for each document download.
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Write buffer size in bytes for streaming response bodies to disk.
    pub chunk_bytes: usize,
    /// When true, a response whose Content-Type is neither PDF nor generic
    /// binary fails the download instead of being saved with a warning.
    #[serde(default)]
    pub strict_content_type: bool,
}

impl Default for ExpedienteConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 15,
            connect_timeout_secs: 10,
            chunk_bytes: 8192,
            strict_content_type: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("expediente")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ExpedienteConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ExpedienteConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ExpedienteConfig = toml::from_str(&data)?;
    Ok(cfg)
}
