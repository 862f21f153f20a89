use crate::rates;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub catalog_path: String,
    pub database_url: String,
    pub whatsapp_number: String,
    pub rate_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: "productos.json".to_string(),
            database_url: "sqlite:tiendita.db".to_string(),
            whatsapp_number: "584249556777".to_string(),
            rate_endpoint: rates::DEFAULT_ENDPOINT.to_string(),
        }
    }
}

fn get_config_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("config.toml");
    path
}

/// Read config.toml from the repo root; a missing file falls back to the
/// defaults.
pub fn load_config() -> anyhow::Result<Config> {
    let config_path = get_config_path();
    if !config_path.exists() {
        return Ok(Config::default());
    }
    let config_str = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
