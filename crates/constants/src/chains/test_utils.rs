//! Constants for local test chains.

use crate::{ContractAddresses, VslConstants};
use alloy::primitives::Address;
use std::borrow::Cow;

/// Name for the test chain.
pub const NAME: &str = "VSL Test";
/// Test chain id.
pub const CHAIN_ID: u64 = 31337;
/// Test genesis epoch timestamp.
pub const GENESIS_EPOCH: u64 = 1_700_000_000;

/// Test address for the staking proxy.
pub const STAKING: Address = Address::repeat_byte(0x11);
/// Test address for the chips proxy.
pub const CHIPS: Address = Address::repeat_byte(0x22);
/// Test address for the billing proxy.
pub const BILLING: Address = Address::repeat_byte(0x33);
/// Test address for the governance token.
pub const GOVERNANCE_TOKEN: Address = Address::repeat_byte(0x44);
/// Test address for the settlement proxy.
pub const SETTLEMENT: Address = Address::repeat_byte(0x55);
/// Test address for the network params proxy.
pub const NETWORK_PARAMS: Address = Address::repeat_byte(0x66);
/// Test address for the multicall contract.
pub const MULTICALL: Address = Address::repeat_byte(0x77);

/// Test contracts.
pub const CONTRACTS: ContractAddresses = ContractAddresses::new(
    STAKING,
    CHIPS,
    BILLING,
    GOVERNANCE_TOKEN,
    SETTLEMENT,
    NETWORK_PARAMS,
    MULTICALL,
);

/// VSL constants for unit tests.
pub const TEST: VslConstants =
    VslConstants::new(CHAIN_ID, Cow::Borrowed(NAME), GENESIS_EPOCH, CONTRACTS);
