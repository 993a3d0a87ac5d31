use crate::VslConstants;
use std::str::FromStr;

/// The list of known chains as a string.
const KNOWN_CHAINS: &str = "mainnet, testnet, test";

/// Error type for resolving a chain from a name or id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseChainError {
    /// The chain name is not supported.
    #[error("chain name {0} is not parseable. supported chains: {KNOWN_CHAINS}")]
    ChainNotSupported(String),
    /// The chain id is not a VSL chain.
    #[error("unknown chain id {0}")]
    UnknownChainId(u64),
    /// The chain is known, but no deployment is compiled in for it.
    #[error("no deployment registered for chain id {0}")]
    NoDeployment(u64),
}

/// Known VSL chains.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KnownChains {
    /// VSL mainnet.
    Mainnet,
    /// VSL Sepolia testnet.
    Testnet,
    /// Local test chain.
    #[cfg(any(test, feature = "test-utils"))]
    Test,
}

impl KnownChains {
    /// Get the chain id of the chain.
    pub const fn chain_id(&self) -> u64 {
        match self {
            Self::Mainnet => crate::mainnet::CHAIN_ID,
            Self::Testnet => crate::testnet::CHAIN_ID,
            #[cfg(any(test, feature = "test-utils"))]
            Self::Test => crate::test_utils::CHAIN_ID,
        }
    }

    /// Get the name of the chain.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => crate::mainnet::NAME,
            Self::Testnet => crate::testnet::NAME,
            #[cfg(any(test, feature = "test-utils"))]
            Self::Test => crate::test_utils::NAME,
        }
    }

    /// Get the compiled-in deployment of the chain, if any.
    pub const fn deployment(&self) -> Option<VslConstants> {
        match self {
            Self::Mainnet | Self::Testnet => None,
            #[cfg(any(test, feature = "test-utils"))]
            Self::Test => Some(crate::test_utils::TEST),
        }
    }

    /// Get the compiled-in deployment of the chain, or an error if there is
    /// none.
    pub fn constants(&self) -> Result<VslConstants, ParseChainError> {
        self.deployment().ok_or(ParseChainError::NoDeployment(self.chain_id()))
    }
}

impl FromStr for KnownChains {
    type Err = ParseChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            #[cfg(any(test, feature = "test-utils"))]
            "test" => Ok(Self::Test),
            "mainnet" | "vsl-mainnet" => Ok(Self::Mainnet),
            "testnet" | "sepolia" | "vsl-sepolia" => Ok(Self::Testnet),
            _ => Err(ParseChainError::ChainNotSupported(s)),
        }
    }
}

impl TryFrom<u64> for KnownChains {
    type Error = ParseChainError;

    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        match chain_id {
            crate::mainnet::CHAIN_ID => Ok(Self::Mainnet),
            crate::testnet::CHAIN_ID => Ok(Self::Testnet),
            #[cfg(any(test, feature = "test-utils"))]
            crate::test_utils::CHAIN_ID => Ok(Self::Test),
            _ => Err(ParseChainError::UnknownChainId(chain_id)),
        }
    }
}
