//! Wei formatting helpers.

use alloy::primitives::{utils::format_units, U256};

use crate::ethereum::constants::{ETHER_DECIMALS, GWEI_DECIMALS};

/// Format a wei amount as gwei.
pub fn format_gwei(wei: u128) -> String {
    scaled(U256::from(wei), GWEI_DECIMALS)
}

/// Format a wei amount as ether.
pub fn format_ether(wei: U256) -> String {
    scaled(wei, ETHER_DECIMALS)
}

// alloy pads the fraction to the full unit width; the report wants it trimmed.
fn scaled(wei: U256, decimals: u8) -> String {
    match format_units(wei, decimals) {
        Ok(formatted) if formatted.contains('.') => {
            formatted.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        Ok(formatted) => formatted,
        Err(_) => wei.to_string(),
    }
}
