use std::time::Duration;

use rand::seq::IteratorRandom;
use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

use crate::game::board::CATEGORY_COUNT;
use crate::game::loader::DEFAULT_CATEGORY_POOL;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("problem loading config file: {0}")]
    File(#[from] ::config::ConfigError),
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub logs: LogsConfig,
}

impl Config {
    /// Reads `CLUEBOX_TOML` (falling back to `./cluebox.toml`). A missing
    /// file is fine; every field has a default.
    pub fn load() -> Result<Self, Error> {
        dotenvy::dotenv().ok();

        let path = if let Ok(path) = std::env::var("CLUEBOX_TOML") {
            info!(path, "looking for config file with CLUEBOX_TOML...");
            path
        } else {
            let path = "./cluebox.toml".to_owned();
            info!(path, "CLUEBOX_TOML env unset, using default path");
            path
        };

        let config = ::config::Config::builder()
            .add_source(::config::File::new(&path, ::config::FileFormat::Toml).required(false))
            .build()?
            .try_deserialize()?;

        info!("config loaded");

        Ok(config)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ProviderConfig {
    base_url: Url,
    request_timeout_secs: u64,
    category_pool_size: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://jservice.io/").expect("hard-coded url should be valid"),
            request_timeout_secs: 10,
            category_pool_size: DEFAULT_CATEGORY_POOL,
        }
    }
}

impl ProviderConfig {
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn category_pool_size(&self) -> usize {
        if self.category_pool_size < CATEGORY_COUNT {
            warn!(
                pool = self.category_pool_size,
                "provider.category_pool_size is smaller than a board, every load will fail"
            );
        }

        self.category_pool_size
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LogsConfig {
    flavor_texts: Vec<String>,
}

impl LogsConfig {
    pub fn flavor_text(&self) -> Option<&str> {
        self.flavor_texts
            .iter()
            .choose(&mut rand::thread_rng())
            .map(|s| s.as_str())
    }
}
