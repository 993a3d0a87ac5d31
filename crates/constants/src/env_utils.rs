//! Helpers for loading [`crate::VslConstants`] from environment variables.

use crate::ConfigError;
use alloy::primitives::Address;
use std::env;

/// Chain name, e.g. `mainnet` or `testnet`.
pub const CHAIN: &str = "VSL_CHAIN";
/// Chain id, used when [`CHAIN`] is unset.
pub const CHAIN_ID: &str = "VSL_CHAIN_ID";
/// Genesis epoch timestamp.
pub const GENESIS_EPOCH: &str = "VSL_GENESIS_EPOCH";
/// Staking proxy address.
pub const STAKING_ADDRESS: &str = "VSL_STAKING_ADDRESS";
/// Chips proxy address.
pub const CHIPS_ADDRESS: &str = "VSL_CHIPS_ADDRESS";
/// Billing proxy address.
pub const BILLING_ADDRESS: &str = "VSL_BILLING_ADDRESS";
/// Governance token address.
pub const GOVERNANCE_TOKEN_ADDRESS: &str = "VSL_GOVERNANCE_TOKEN_ADDRESS";
/// Settlement proxy address.
pub const SETTLEMENT_ADDRESS: &str = "VSL_SETTLEMENT_ADDRESS";
/// Network params proxy address.
pub const NETWORK_PARAMS_ADDRESS: &str = "VSL_NETWORK_PARAMS_ADDRESS";
/// Multicall address. Defaults to the canonical `Multicall3` deployment.
pub const MULTICALL_ADDRESS: &str = "VSL_MULTICALL_ADDRESS";

/// Load a variable from the environment
pub fn load_string(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::missing(key))
}

/// Load a variable from the environment
pub fn load_string_opt(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Load a variable from the environment
pub fn load_u64(key: &str) -> Result<u64, ConfigError> {
    let val = load_string(key)?;
    val.trim().parse::<u64>().map_err(Into::into)
}

/// Load a variable from the environment
pub fn load_address(key: &str) -> Result<Address, ConfigError> {
    load_string(key)?.trim().parse().map_err(Into::into)
}

/// Load an optional address from the environment. Unset variables are
/// `None`, malformed ones are an error.
pub fn load_address_opt(key: &str) -> Result<Option<Address>, ConfigError> {
    load_string_opt(key).map(|s| s.trim().parse().map_err(Into::into)).transpose()
}

/// Load an address from the environment, falling back to `default` when
/// the variable is unset. Missing with no default is an error.
pub fn load_address_or(key: &str, default: Option<Address>) -> Result<Address, ConfigError> {
    load_address_opt(key)?.or(default).ok_or_else(|| ConfigError::missing(key))
}

/// Load a u64 from the environment, falling back to `default` when the
/// variable is unset. Missing with no default is an error.
pub fn load_u64_or(key: &str, default: Option<u64>) -> Result<u64, ConfigError> {
    match load_string_opt(key) {
        Some(_) => load_u64(key),
        None => default.ok_or_else(|| ConfigError::missing(key)),
    }
}
