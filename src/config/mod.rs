mod types;

pub use types::*;

use crate::Result;
use std::env;
use std::io::ErrorKind;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path =
        env::var("PLANTCARE_SMOKE_CONFIG").unwrap_or_else(|_| "smoke.yaml".to_string());

    let mut config = load_from_path(&config_path).await?;

    if let Ok(base_url) = env::var("PLANTCARE_BASE_URL") {
        config.backend.base_url = base_url;
    }

    config.validate()?;

    Ok(config)
}

/// A missing file is not an error: the tool must run with zero setup
/// against the default local backend. A present but malformed file is.
pub async fn load_from_path(path: &str) -> Result<Config> {
    let config_str = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path);
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    debug!("Loading configuration from: {}", path);

    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
