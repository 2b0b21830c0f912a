//! Configuration loaded from `~/.config/tikfetch/config.toml`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default extraction endpoint: the serverless function under its local dev
/// server. Override via config file or `--endpoint`.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8888/.netlify/functions/download_tiktok";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TikfetchConfig {
    /// URL of the extraction endpoint the controller POSTs to.
    pub endpoint: String,
    /// HTTP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total HTTP transfer timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for TikfetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tikfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TikfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TikfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: TikfetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = TikfetchConfig::default();
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = TikfetchConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: TikfetchConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.endpoint, cfg.endpoint);
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.timeout_secs, cfg.timeout_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            endpoint = "https://example.com/.netlify/functions/download_tiktok"
            connect_timeout_secs = 5
            timeout_secs = 10
        "#;
        let cfg: TikfetchConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            cfg.endpoint,
            "https://example.com/.netlify/functions/download_tiktok"
        );
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.timeout_secs, 10);
    }
}
