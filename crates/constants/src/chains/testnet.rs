//! Constants for the VSL Sepolia testnet.
//!
//! No contract deployment is compiled in for this chain. Load one with
//! [`VslConstants::from_env`] or [`VslConstants::from_json`].
//!
//! [`VslConstants::from_env`]: crate::VslConstants::from_env
//! [`VslConstants::from_json`]: crate::VslConstants::from_json

/// Name for the chain.
pub const NAME: &str = "VSL Sepolia Testnet";
/// Chain ID for the VSL Sepolia testnet.
pub const CHAIN_ID: u64 = 2331;
