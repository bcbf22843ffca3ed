use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Default location of the testnet seed phrase
pub const DEFAULT_MNEMONIC_PATH: &str = ".testnet.seed-phrase";

/// Default location of the saved node response carrying the minimum gas price
pub const DEFAULT_GAS_PRICE_PATH: &str = ".minimum-gas-price-testnet.json";

/// Margin applied to both the gas price and the gas-limit estimates on testnet
pub const TESTNET_GAS_MULT: f64 = 1.1;

/// Loader configuration structure
///
/// Locates the two secret files and controls how strictly they are validated.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoaderConfig {
    /// Plaintext file holding the 12-word mnemonic
    pub mnemonic_path: PathBuf,

    /// JSON file holding `result.minimumGasPrice`
    pub gas_price_path: PathBuf,

    /// Multiplier applied to the minimum gas price (must be > 0)
    pub gas_multiplier: f64,

    /// Fail instead of warning when the mnemonic is not 12 words
    pub strict_mnemonic: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            mnemonic_path: PathBuf::from(DEFAULT_MNEMONIC_PATH),
            gas_price_path: PathBuf::from(DEFAULT_GAS_PRICE_PATH),
            gas_multiplier: TESTNET_GAS_MULT,
            strict_mnemonic: false,
        }
    }
}

impl LoaderConfig {
    /// Load configuration from environment variables
    ///
    /// Values fall back to the fixed testnet defaults when a variable is not
    /// defined, so an empty environment reproduces the default loader.
    ///
    /// # Environment Variables
    ///
    /// * `RSK_MNEMONIC_PATH` - Mnemonic file (default: ".testnet.seed-phrase")
    /// * `RSK_GAS_PRICE_PATH` - Gas-price file (default: ".minimum-gas-price-testnet.json")
    /// * `RSK_GAS_MULTIPLIER` - Gas multiplier (default: 1.1)
    /// * `RSK_STRICT_MNEMONIC` - Treat a bad mnemonic as fatal (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists (useful for development)
        let _ = dotenv::dotenv();

        Self::build(None)
    }

    /// Load configuration from the given `RSK_`-prefixed variables instead of
    /// the process environment
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::build(Some(vars))
    }

    // `None` reads the process environment.
    fn build(vars: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .set_default("mnemonic_path", DEFAULT_MNEMONIC_PATH)?
            .set_default("gas_price_path", DEFAULT_GAS_PRICE_PATH)?
            .set_default("gas_multiplier", TESTNET_GAS_MULT)?
            .set_default("strict_mnemonic", false)?
            .add_source(
                config::Environment::with_prefix("RSK")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
