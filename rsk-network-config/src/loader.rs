use crate::{
    config::LoaderConfig,
    error::ConfigError,
    models::{
        gas_price::GasPriceDocument,
        mnemonic::{MnemonicPhrase, MNEMONIC_WORD_COUNT},
        profile::{NetworkProfile, ToolchainConfig},
    },
    source::{FsSource, TextSource},
};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Builds the network profile from the mnemonic and gas-price files
///
/// The loader runs once at startup. Building the profile consumes it, so a
/// loader is never re-entered: it either yields a [`NetworkProfile`] or the
/// first hard error. Only the gas-price path and unreadable files are fatal
/// by default; a mnemonic with the wrong word count is logged and kept.
pub struct SecretAndGasLoader<S = FsSource> {
    config: LoaderConfig,
    source: S,
}

impl SecretAndGasLoader<FsSource> {
    /// Create a loader that reads from the local filesystem
    pub fn new(config: LoaderConfig) -> Self {
        Self::with_source(config, FsSource)
    }
}

impl<S: TextSource> SecretAndGasLoader<S> {
    /// Create a loader over any text source
    ///
    /// # Arguments
    ///
    /// * `config` - File locations, multiplier and strictness
    /// * `source` - Capability used to read the files
    pub fn with_source(config: LoaderConfig, source: S) -> Self {
        Self { config, source }
    }

    fn read(&self, path: &Path) -> Result<String, ConfigError> {
        self.source
            .read_to_string(path)
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Read and check the mnemonic phrase
    ///
    /// A phrase that is empty or not exactly 12 words is reported with a
    /// warning and still returned, unless `strict_mnemonic` is set, in which
    /// case it is a [`ConfigError::InvalidMnemonic`].
    #[instrument(skip(self))]
    pub fn load_mnemonic(&self, path: &Path) -> Result<MnemonicPhrase, ConfigError> {
        let mnemonic = MnemonicPhrase::parse(&self.read(path)?);

        if !mnemonic.is_valid() {
            if self.config.strict_mnemonic {
                return Err(ConfigError::InvalidMnemonic {
                    path: path.to_path_buf(),
                    words: mnemonic.word_count(),
                });
            }
            warn!(
                "unable to retrieve mnemonic from {}: expected {} words, found {}",
                path.display(),
                MNEMONIC_WORD_COUNT,
                mnemonic.word_count()
            );
        }

        Ok(mnemonic)
    }

    /// Read the minimum gas price and scale it
    ///
    /// # Returns
    ///
    /// * `Result<u128, ConfigError>` - `floor(price * multiplier)` in wei
    #[instrument(skip(self))]
    pub fn load_gas_price(&self, path: &Path, multiplier: f64) -> Result<u128, ConfigError> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(ConfigError::InvalidMultiplier(multiplier));
        }

        let invalid = |reason: String| ConfigError::InvalidGasPrice {
            path: path.to_path_buf(),
            reason,
        };

        let raw = self.read(path)?;
        let price = GasPriceDocument::from_json(&raw)
            .and_then(|doc| doc.minimum_gas_price())
            .map_err(invalid)?;
        info!("Minimum gas price Testnet: {}", price);

        let scaled = scale_gas_price(price, multiplier).ok_or_else(|| {
            invalid(format!("{} scaled by {} overflows", price, multiplier))
        })?;
        debug!(%price, multiplier, %scaled, "Scaled gas price");

        Ok(scaled)
    }

    /// Compose the RSK testnet profile
    ///
    /// The mnemonic is checked first, so its warning is still logged when the
    /// gas-price file turns out to be unusable.
    pub fn build_network_profile(self) -> Result<NetworkProfile, ConfigError> {
        let mnemonic = self.load_mnemonic(&self.config.mnemonic_path)?;
        let multiplier = self.config.gas_multiplier;
        let gas_price = self.load_gas_price(&self.config.gas_price_path, multiplier)?;

        Ok(NetworkProfile::rsk_testnet(
            gas_price,
            multiplier,
            mnemonic.as_str().to_string(),
        ))
    }

    /// Compose the full toolchain record (compiler version plus networks)
    pub fn build_toolchain_config(self) -> Result<ToolchainConfig, ConfigError> {
        let profile = self.build_network_profile()?;
        Ok(ToolchainConfig::new(profile))
    }
}

/// `floor(price * multiplier)`, or `None` when the result leaves the `u128` range
pub fn scale_gas_price(price: u128, multiplier: f64) -> Option<u128> {
    let scaled = (price as f64 * multiplier).floor();
    // u128::MAX as f64 rounds up to 2^128, which is already out of range.
    if !scaled.is_finite() || scaled < 0.0 || scaled >= u128::MAX as f64 {
        return None;
    }
    Some(scaled as u128)
}
