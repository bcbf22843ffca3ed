use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the network profile
///
/// Every variant aborts startup. A mnemonic with the wrong word count is only
/// reported as `InvalidMnemonic` when strict mnemonic checking is enabled;
/// otherwise it is logged and loading continues.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A secret file could not be read
    #[error("unable to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The gas-price document is malformed or does not hold a hex quantity
    #[error("unable to retrieve network gas price from {}: {reason}", .path.display())]
    InvalidGasPrice { path: PathBuf, reason: String },

    /// The mnemonic does not have the expected number of words
    #[error("unable to retrieve mnemonic from {}: expected 12 words, found {words}", .path.display())]
    InvalidMnemonic { path: PathBuf, words: usize },

    /// The gas multiplier must be a finite number greater than zero
    #[error("invalid gas multiplier {0}: must be a finite number greater than zero")]
    InvalidMultiplier(f64),

    /// Loader settings could not be assembled from the environment
    #[error("settings error: {0}")]
    Settings(#[from] config::ConfigError),
}

impl ConfigError {
    /// Machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "READ_ERROR",
            ConfigError::InvalidGasPrice { .. } => "INVALID_GAS_PRICE",
            ConfigError::InvalidMnemonic { .. } => "INVALID_MNEMONIC",
            ConfigError::InvalidMultiplier(_) => "INVALID_MULTIPLIER",
            ConfigError::Settings(_) => "SETTINGS_ERROR",
        }
    }
}
