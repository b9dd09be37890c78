use serde::Deserialize;
use std::path::PathBuf;

pub const API_BASE_ENV: &str = "DROPSIGHT_API_BASE";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

pub fn load_config() -> anyhow::Result<Config> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/dropsight/config.toml");
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Resolution order: `--api-base` flag, then the environment, then the
/// config file. The base URL is never hard-coded.
pub fn resolve_api_base(
    flag: Option<&str>,
    env: Option<String>,
    config: &Config,
) -> anyhow::Result<String> {
    let base = flag
        .map(|s| s.to_string())
        .or(env)
        .or_else(|| config.api_base.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no API base configured: pass --api-base, set {}, or add api_base to config.toml",
                API_BASE_ENV
            )
        })?;
    Ok(base.trim_end_matches('/').to_string())
}
