/*
    Coin enablement loaded from TOML:

        enabled = ["btc", "tbtc"]

    A missing list enables every coin.
*/

use serde::{
    Deserialize,
    Serialize
};
use std::path::{
    Path,
    PathBuf
};
use thiserror::Error;
use tracing::info;

use crate::{
    app::CoinPolicy,
    util::Coin
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinConfig {
    /// Coins the commander will serve pub requests for
    #[serde(default = "default_enabled")]
    pub enabled: Vec<Coin>
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },
    #[error("failed to parse coin config: {0}")]
    Parse(#[from] toml::de::Error)
}

fn default_enabled() -> Vec<Coin> {
    Coin::ALL.to_vec()
}

impl Default for CoinConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled()
        }
    }
}

impl CoinConfig {
    pub fn new(enabled: Vec<Coin>) -> Self {
        Self {
            enabled
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source
        })?;

        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), enabled = ?config.enabled, "loaded coin config");
        Ok(config)
    }
}

impl CoinPolicy for CoinConfig {
    fn enabled(&self, coin: Coin) -> bool {
        self.enabled.contains(&coin)
    }
}
