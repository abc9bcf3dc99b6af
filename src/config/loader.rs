// Configuration loader
// Loads the API key from ~/.mindbuddy/config.toml or environment variable

use anyhow::{Context, Result};
use std::fs;

use super::settings::Config;

/// Load configuration from the config file or environment.
///
/// A missing API key is not an error: the engine runs in degraded mode with
/// the generative fallback stage disabled (stages 1-3 and 5 still apply).
pub fn load_config() -> Result<Config> {
    if let Some(config) = try_load_from_file()? {
        return Ok(config);
    }

    let api_key = std::env::var("OPENAI_API_KEY")
        .ok()
        .filter(|key| !key.is_empty());

    if api_key.is_none() {
        tracing::info!("No OpenAI API key configured; generative fallback disabled");
    }

    Ok(Config::new(api_key))
}

fn try_load_from_file() -> Result<Option<Config>> {
    let home = match dirs::home_dir() {
        Some(home) => home,
        None => return Ok(None),
    };

    let config_path = home.join(".mindbuddy/config.toml");
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    #[derive(serde::Deserialize)]
    struct TomlConfig {
        #[serde(default)]
        openai_api_key: Option<String>,
        #[serde(default)]
        model: Option<String>,
        #[serde(default)]
        bind_address: Option<String>,
    }

    let toml_config: TomlConfig =
        toml::from_str(&contents).context("Failed to parse config.toml")?;

    let mut config = Config::new(toml_config.openai_api_key.filter(|key| !key.is_empty()));
    if let Some(model) = toml_config.model {
        config.model = model;
    }
    if let Some(bind_address) = toml_config.bind_address {
        config.bind_address = bind_address;
    }

    Ok(Some(config))
}
