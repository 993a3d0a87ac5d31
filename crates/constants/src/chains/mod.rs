/// VSL mainnet constants.
pub mod mainnet;

/// VSL Sepolia testnet constants.
pub mod testnet;

/// Test utilities for chains.
pub mod test_utils;
