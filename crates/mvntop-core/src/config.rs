use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// HTTP transfer parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds for artifact downloads.
    pub connect_timeout_secs: u64,
    /// Total transfer timeout in seconds for one artifact download.
    pub transfer_timeout_secs: u64,
    /// Optional receive buffer size in bytes (None = libcurl default).
    #[serde(default)]
    pub buffer_bytes: Option<usize>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            transfer_timeout_secs: 3600,
            buffer_bytes: None,
        }
    }
}

/// Global configuration loaded from `~/.config/mvntop/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MvntopConfig {
    /// Number of JAR URLs to collect from the catalog (one extra may come back).
    pub limit: usize,
    /// Directory JARs are saved into.
    pub download_dir: String,
    /// File the URL manifest is written to.
    pub manifest_file: String,
    /// Optional HTTP transfer parameters; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for MvntopConfig {
    fn default() -> Self {
        Self {
            limit: 100,
            download_dir: "top100".to_string(),
            manifest_file: "top100.txt".to_string(),
            http: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mvntop")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MvntopConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MvntopConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MvntopConfig = toml::from_str(&data)?;
    Ok(cfg)
}
