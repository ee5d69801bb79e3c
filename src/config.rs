use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
const API_KEY_ENV: &str = "ZOOPLA_API_KEY";

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: Option<String>,
}

pub fn create_test_config() -> Config {
    Config {
        api_key: "xxx".to_string(),
        base_url: None,
    }
}

/// Loads `.env`, then the TOML file named by `CONFIG_PATH`, falling back
/// to the `ZOOPLA_API_KEY` environment variable alone.
pub fn read_config() -> Result<Config> {
    dotenv().ok();

    if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
        let bytes = std::fs::read(&config_path)
            .with_context(|| format!("failed to read config from {config_path}"))?;
        return toml::from_slice(&bytes).context("malformed config file");
    }

    let api_key = env::var(API_KEY_ENV)
        .with_context(|| format!("neither {CONFIG_PATH_ENV} nor {API_KEY_ENV} is set"))?;
    Ok(Config {
        api_key,
        base_url: None,
    })
}
