mod error;
pub use error::ConfigError;

mod chains;
pub use chains::{KnownChains, ParseChainError};

mod contracts;
pub use contracts::ContractAddresses;

use crate::env_utils;
use std::{borrow::Cow, str::FromStr};

/// VSL constants.
///
/// This struct contains the deployment constants of a single VSL chain: its
/// chain id and name, the timestamp at which epoch 0 started, and the
/// addresses of the system contracts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VslConstants {
    /// Chain id.
    chain_id: u64,
    /// Human readable chain name.
    name: Cow<'static, str>,
    /// Unix timestamp of the start of epoch 0.
    genesis_epoch: u64,
    /// System contract addresses.
    contracts: ContractAddresses,
}

impl VslConstants {
    /// Create a new set of constants.
    pub const fn new(
        chain_id: u64,
        name: Cow<'static, str>,
        genesis_epoch: u64,
        contracts: ContractAddresses,
    ) -> Self {
        Self { chain_id, name, genesis_epoch, contracts }
    }

    /// Get the hard-coded local test constants.
    #[cfg(any(test, feature = "test-utils"))]
    pub const fn test() -> Self {
        crate::test_utils::TEST
    }

    /// Get the compiled-in constants for a chain id.
    ///
    /// Fails for chain ids that are not VSL chains, and for VSL chains with
    /// no compiled-in deployment.
    pub fn from_chain_id(chain_id: u64) -> Result<Self, ParseChainError> {
        KnownChains::try_from(chain_id)?.constants()
    }

    /// Load the constants from a JSON string, for custom deployments.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Load the constants from the environment.
    ///
    /// The chain is selected by `VSL_CHAIN` (a chain name) or, if unset,
    /// `VSL_CHAIN_ID`. The genesis epoch is read from `VSL_GENESIS_EPOCH`
    /// and the contract addresses from `VSL_STAKING_ADDRESS`,
    /// `VSL_CHIPS_ADDRESS`, `VSL_BILLING_ADDRESS`,
    /// `VSL_GOVERNANCE_TOKEN_ADDRESS`, `VSL_SETTLEMENT_ADDRESS`,
    /// `VSL_NETWORK_PARAMS_ADDRESS` and `VSL_MULTICALL_ADDRESS`.
    ///
    /// Unset values fall back to the chain's compiled-in deployment. Without
    /// one, every value except the multicall address is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        let chain = match env_utils::load_string_opt(env_utils::CHAIN) {
            Some(name) => name.parse::<KnownChains>()?,
            None => KnownChains::try_from(env_utils::load_u64(env_utils::CHAIN_ID)?)?,
        };
        let base = chain.deployment();
        let genesis_epoch = base.as_ref().map(Self::genesis_epoch);
        let base = base.map(|c| c.contracts());

        let contracts = ContractAddresses::new(
            env_utils::load_address_or(env_utils::STAKING_ADDRESS, base.map(|c| c.staking()))?,
            env_utils::load_address_or(env_utils::CHIPS_ADDRESS, base.map(|c| c.chips()))?,
            env_utils::load_address_or(env_utils::BILLING_ADDRESS, base.map(|c| c.billing()))?,
            env_utils::load_address_or(
                env_utils::GOVERNANCE_TOKEN_ADDRESS,
                base.map(|c| c.governance_token()),
            )?,
            env_utils::load_address_or(
                env_utils::SETTLEMENT_ADDRESS,
                base.map(|c| c.settlement()),
            )?,
            env_utils::load_address_or(
                env_utils::NETWORK_PARAMS_ADDRESS,
                base.map(|c| c.network_params()),
            )?,
            env_utils::load_address_or(
                env_utils::MULTICALL_ADDRESS,
                Some(base.map_or(crate::MULTICALL3_ADDRESS, |c| c.multicall())),
            )?,
        );

        Ok(Self::new(
            chain.chain_id(),
            Cow::Borrowed(chain.name()),
            env_utils::load_u64_or(env_utils::GENESIS_EPOCH, genesis_epoch)?,
            contracts,
        ))
    }

    /// Get the chain id.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the chain name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the unix timestamp at which epoch 0 started.
    pub const fn genesis_epoch(&self) -> u64 {
        self.genesis_epoch
    }

    /// True if the timestamp is at or after the start of epoch 0.
    pub const fn is_after_genesis(&self, timestamp: u64) -> bool {
        timestamp >= self.genesis_epoch
    }

    /// Get the system contract addresses.
    pub const fn contracts(&self) -> ContractAddresses {
        self.contracts
    }
}

impl FromStr for VslConstants {
    type Err = ParseChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<KnownChains>()?.constants()
    }
}

impl TryFrom<u64> for VslConstants {
    type Error = ParseChainError;

    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        Self::from_chain_id(chain_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use alloy::primitives::Address;

    #[test]
    fn lookup_by_id_and_name() {
        let test = VslConstants::test();
        assert_eq!(VslConstants::from_chain_id(test_utils::CHAIN_ID).unwrap(), test);
        assert_eq!("test".parse::<VslConstants>().unwrap(), VslConstants::test());
        assert!(matches!(
            VslConstants::from_chain_id(8453),
            Err(ParseChainError::UnknownChainId(8453))
        ));
    }

    #[test]
    fn known_chain_without_deployment() {
        assert!(matches!(
            VslConstants::from_chain_id(crate::mainnet::CHAIN_ID),
            Err(ParseChainError::NoDeployment(crate::mainnet::CHAIN_ID))
        ));
        assert!(matches!(
            "testnet".parse::<VslConstants>(),
            Err(ParseChainError::NoDeployment(crate::testnet::CHAIN_ID))
        ));
    }

    #[test]
    fn genesis_boundary() {
        let constants = VslConstants::test();
        assert!(!constants.is_after_genesis(constants.genesis_epoch() - 1));
        assert!(constants.is_after_genesis(constants.genesis_epoch()));
    }

    #[test]
    fn json_roundtrip() {
        let json = serde_json::to_string(&VslConstants::test()).unwrap();
        assert!(json.contains("\"genesisEpoch\":1700000000"));
        assert_eq!(VslConstants::from_json(&json).unwrap(), VslConstants::test());
    }

    #[test]
    fn json_rejects_garbage() {
        assert!(matches!(VslConstants::from_json("{\"chainId\": 1}"), Err(ConfigError::Json(_))));
    }

    // The only test touching the `VSL_*` variables read by `from_env`.
    #[test]
    fn from_env() {
        use env_utils::*;

        // Overrides on top of a compiled-in deployment.
        let staking = Address::repeat_byte(0xaa);
        std::env::set_var(CHAIN, "test");
        std::env::set_var(STAKING_ADDRESS, staking.to_string());

        let constants = VslConstants::from_env().unwrap();
        assert_eq!(constants.chain_id(), test_utils::CHAIN_ID);
        assert_eq!(constants.genesis_epoch(), test_utils::GENESIS_EPOCH);
        assert_eq!(constants.contracts().staking(), staking);
        assert_eq!(constants.contracts().chips(), test_utils::CHIPS);
        assert_eq!(constants.contracts().multicall(), test_utils::MULTICALL);

        // A chain without a compiled-in deployment needs every value.
        std::env::set_var(CHAIN, "mainnet");
        assert!(matches!(VslConstants::from_env(), Err(ConfigError::Var(_))));

        let vars = [
            (CHIPS_ADDRESS, 0x22),
            (BILLING_ADDRESS, 0x33),
            (GOVERNANCE_TOKEN_ADDRESS, 0x44),
            (SETTLEMENT_ADDRESS, 0x55),
            (NETWORK_PARAMS_ADDRESS, 0x66),
        ];
        for (key, byte) in vars {
            std::env::set_var(key, Address::repeat_byte(byte).to_string());
        }
        assert!(matches!(VslConstants::from_env(), Err(ConfigError::Var(_))));

        std::env::set_var(GENESIS_EPOCH, "1710000000");
        let constants = VslConstants::from_env().unwrap();
        assert_eq!(constants.chain_id(), crate::mainnet::CHAIN_ID);
        assert_eq!(constants.name(), crate::mainnet::NAME);
        assert_eq!(constants.genesis_epoch(), 1_710_000_000);
        assert_eq!(constants.contracts().staking(), staking);
        assert_eq!(constants.contracts().network_params(), Address::repeat_byte(0x66));
        assert_eq!(constants.contracts().multicall(), crate::MULTICALL3_ADDRESS);

        for key in [CHAIN, STAKING_ADDRESS, GENESIS_EPOCH].into_iter().chain(vars.map(|v| v.0)) {
            std::env::remove_var(key);
        }
    }
}
