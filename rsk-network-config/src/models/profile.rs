use serde::Serialize;
use std::collections::BTreeMap;

/// Solidity compiler version the toolchain builds with
pub const SOLIDITY_VERSION: &str = "0.8.14";

/// Name under which the profile is registered with the toolchain
pub const NETWORK_NAME: &str = "rsktestnet";

/// RSK testnet chain identifier
pub const RSK_TESTNET_CHAIN_ID: u64 = 31;

/// Public RSK testnet node
pub const RSK_TESTNET_URL: &str = "https://public-node.testnet.rsk.co/";

/// BIP-44 path accounts are derived from
pub const DERIVATION_PATH: &str = "m/44'/60'/0'/0";

/// First derived account index
pub const INITIAL_INDEX: u32 = 0;

/// Number of derived accounts
pub const ACCOUNT_COUNT: u32 = 10;

/// HD account parameters passed to the toolchain's account manager
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsConfig {
    pub mnemonic: String,
    pub initial_index: u32,
    pub path: String,
    pub count: u32,
}

impl std::fmt::Debug for AccountsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountsConfig")
            .field("mnemonic", &"<redacted>")
            .field("initial_index", &self.initial_index)
            .field("path", &self.path)
            .field("count", &self.count)
            .finish()
    }
}

/// Network entry consumed by the toolchain
///
/// `gas_multiplier` is also applied by the toolchain to its gas-limit
/// estimates, independently of the already scaled `gas_price`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    pub chain_id: u64,
    pub url: String,
    /// Scaled gas price in wei
    pub gas_price: u128,
    pub gas_multiplier: f64,
    pub accounts: AccountsConfig,
}

impl NetworkProfile {
    /// Build the RSK testnet profile from the loaded values
    pub fn rsk_testnet(gas_price: u128, gas_multiplier: f64, mnemonic: String) -> Self {
        Self {
            chain_id: RSK_TESTNET_CHAIN_ID,
            url: RSK_TESTNET_URL.to_string(),
            gas_price,
            gas_multiplier,
            accounts: AccountsConfig {
                mnemonic,
                initial_index: INITIAL_INDEX,
                path: DERIVATION_PATH.to_string(),
                count: ACCOUNT_COUNT,
            },
        }
    }
}

/// Complete record handed to the contract toolchain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolchainConfig {
    pub solidity: String,
    pub networks: BTreeMap<String, NetworkProfile>,
}

impl ToolchainConfig {
    pub fn new(profile: NetworkProfile) -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(NETWORK_NAME.to_string(), profile);
        Self {
            solidity: SOLIDITY_VERSION.to_string(),
            networks,
        }
    }

    /// The RSK testnet entry
    pub fn network(&self) -> Option<&NetworkProfile> {
        self.networks.get(NETWORK_NAME)
    }
}
