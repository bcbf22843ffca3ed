use alloy_primitives::U256;
use serde::Deserialize;

/// Saved JSON-RPC response carrying the node's minimum gas price
///
/// Only `result.minimumGasPrice` is read; any other field in the document is
/// ignored.
#[derive(Debug, Deserialize)]
pub struct GasPriceDocument {
    pub result: GasPriceResult,
}

#[derive(Debug, Deserialize)]
pub struct GasPriceResult {
    /// Hex quantity, e.g. "0x3B9ACA00"
    #[serde(rename = "minimumGasPrice")]
    pub minimum_gas_price: String,
}

impl GasPriceDocument {
    /// Parse the document from its trimmed JSON text
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw.trim()).map_err(|e| format!("Invalid gas price document: {}", e))
    }

    /// The minimum gas price in wei
    pub fn minimum_gas_price(&self) -> Result<u128, String> {
        let value = parse_hex_quantity(&self.result.minimum_gas_price)?;
        u128::try_from(value).map_err(|_| format!("Gas price {} does not fit in 128 bits", value))
    }
}

/// Parse a hexadecimal quantity into a `U256` value.
///
/// The "0x" (or "0X") prefix is optional. At least one hex digit must follow
/// and nothing else is accepted, so "12zz" or "0x" are errors rather than
/// partial parses.
///
/// # Arguments
///
/// * `hex` - The hexadecimal string
///
/// # Returns
///
/// * `Result<U256, String>` - Parsed value or error message
pub fn parse_hex_quantity(hex: &str) -> Result<U256, String> {
    let hex = hex.trim();
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    if digits.is_empty() {
        return Err(format!("Hex value {:?} has no digits", hex));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("Hex value {:?} is not a number", hex));
    }
    U256::from_str_radix(digits, 16).map_err(|e| format!("Invalid hex value: {}", e))
}
