//! VSL system constants.
//!
//! This crate contains the deployment registry for the VSL chains: chain
//! IDs, the proxy addresses of the system contracts, and the genesis epoch
//! timestamp of each chain.
//!
//! Only deployments with known addresses are compiled in. Others are loaded
//! at runtime with [`VslConstants::from_env`] or [`VslConstants::from_json`].

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod chains;
pub use chains::mainnet;
pub use chains::test_utils;
pub use chains::testnet;

pub mod env_utils;

mod types;
pub use types::{ConfigError, ContractAddresses, KnownChains, ParseChainError, VslConstants};

use alloy::primitives::{address, Address};

/// Canonical `Multicall3` deployment address. The contract is deployed at
/// the same address on every chain that supports the deterministic
/// deployment proxy.
pub const MULTICALL3_ADDRESS: Address = address!("0xca11bde05977b3631167028862be2a173976ca11");

/// Get the contract addresses registered for a chain id.
///
/// Returns `None` if no deployment is registered for the chain id.
pub fn contracts_for(chain_id: u64) -> Option<ContractAddresses> {
    KnownChains::try_from(chain_id).ok()?.deployment().map(|c| c.contracts())
}

/// Get the genesis epoch timestamp registered for a chain id.
///
/// Returns `None` if no deployment is registered for the chain id.
pub fn genesis_epoch(chain_id: u64) -> Option<u64> {
    KnownChains::try_from(chain_id).ok()?.deployment().map(|c| c.genesis_epoch())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lookup() {
        assert_eq!(contracts_for(test_utils::CHAIN_ID), Some(test_utils::CONTRACTS));
        assert_eq!(genesis_epoch(test_utils::CHAIN_ID), Some(test_utils::GENESIS_EPOCH));

        assert_eq!(contracts_for(1), None);
        assert_eq!(genesis_epoch(10), None);
    }

    #[test]
    fn chains_without_deployment() {
        for chain_id in [mainnet::CHAIN_ID, testnet::CHAIN_ID] {
            assert_eq!(contracts_for(chain_id), None);
            assert_eq!(genesis_epoch(chain_id), None);
        }
    }
}
