use crate::Staking;
use alloy::primitives::{Address, U256};

/// Read-only projection of a chip, as returned by
/// [`Staking::getChipInfoCall`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipInfo {
    /// The node the chip is staked to.
    pub owner_node: Address,
    /// Tokens backing the chip.
    pub token_balance: U256,
    /// Shares of the node's staking pool held by the chip.
    pub share_balance: U256,
}

impl ChipInfo {
    /// Create a new chip info.
    pub const fn new(owner_node: Address, token_balance: U256, share_balance: U256) -> Self {
        Self { owner_node, token_balance, share_balance }
    }
}

impl From<Staking::getChipInfoReturn> for ChipInfo {
    fn from(ret: Staking::getChipInfoReturn) -> Self {
        Self { owner_node: ret.nodeAddr, token_balance: ret.tokens, share_balance: ret.shares }
    }
}

impl From<ChipInfo> for Staking::getChipInfoReturn {
    fn from(info: ChipInfo) -> Self {
        Self { nodeAddr: info.owner_node, tokens: info.token_balance, shares: info.share_balance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::{SolCall, SolValue};

    #[test]
    fn decode_chip_info_return() {
        let owner = Address::repeat_byte(0x42);
        let data = (owner, U256::from(500), U256::from(499)).abi_encode_params();

        let ret = Staking::getChipInfoCall::abi_decode_returns(&data).unwrap();
        let info = ChipInfo::from(ret);

        assert_eq!(info, ChipInfo::new(owner, U256::from(500), U256::from(499)));
    }

    #[test]
    fn serde_field_names() {
        let json = serde_json::to_value(ChipInfo::default()).unwrap();
        assert!(json.get("ownerNode").is_some());
        assert!(json.get("tokenBalance").is_some());
        assert!(json.get("shareBalance").is_some());
    }
}
