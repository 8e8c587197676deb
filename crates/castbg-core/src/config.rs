use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Page the backgrounds are scraped from.
pub const DEFAULT_HOME_URL: &str = "https://clients3.google.com/cast/chromecast/home";

/// Global configuration loaded from `~/.config/castbg/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastbgConfig {
    /// URL of the home page that lists the backgrounds.
    pub home_url: String,
    /// Optional User-Agent sent with every request (None = curl default).
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Seconds allowed for establishing a connection. Transfers themselves have no timeout.
    pub connect_timeout_secs: u64,
    /// Maximum number of redirects followed per request.
    pub max_redirections: u32,
}

impl Default for CastbgConfig {
    fn default() -> Self {
        Self {
            home_url: DEFAULT_HOME_URL.to_string(),
            user_agent: None,
            connect_timeout_secs: 15,
            max_redirections: 10,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("castbg")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<CastbgConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but for an explicit path (`--config`).
pub fn load_or_init_at(path: &Path) -> Result<CastbgConfig> {
    if !path.exists() {
        let default_cfg = CastbgConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: CastbgConfig = toml::from_str(&data)?;
    Ok(cfg)
}
