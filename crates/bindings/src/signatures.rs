//! Method names, event names and event signature hashes of the VSL
//! contracts.
//!
//! The hashes are the `topic0` of the corresponding logs and are taken from
//! the generated [`SolEvent::SIGNATURE_HASH`] of each binding.

use crate::{Billing, Chips, GovernanceToken, NetworkParams, Settlement, Staking};
use alloy::{primitives::B256, sol_types::SolEvent};

/// Contract name of [`Staking`].
pub const CONTRACT_STAKING: &str = "Staking";
/// Contract name of [`Chips`].
pub const CONTRACT_CHIPS: &str = "Chips";
/// Contract name of [`Billing`].
pub const CONTRACT_BILLING: &str = "Billing";
/// Contract name of [`GovernanceToken`].
pub const CONTRACT_GOVERNANCE_TOKEN: &str = "GovernanceToken";
/// Contract name of [`Settlement`].
pub const CONTRACT_SETTLEMENT: &str = "Settlement";
/// Contract name of [`NetworkParams`].
pub const CONTRACT_NETWORK_PARAMS: &str = "NetworkParams";

/// `Staking.createNode`
pub const METHOD_CREATE_NODE: &str = "createNode";
/// `Staking.deposit`
pub const METHOD_DEPOSIT: &str = "deposit";
/// `Staking.stake`
pub const METHOD_STAKE: &str = "stake";
/// `Staking.requestUnstake`
pub const METHOD_REQUEST_UNSTAKE: &str = "requestUnstake";
/// `Staking.claimUnstake`
pub const METHOD_CLAIM_UNSTAKE: &str = "claimUnstake";
/// `Staking.requestWithdrawal`
pub const METHOD_REQUEST_WITHDRAWAL: &str = "requestWithdrawal";
/// `Staking.claimWithdrawal`
pub const METHOD_CLAIM_WITHDRAWAL: &str = "claimWithdrawal";
/// `Staking.mergeChips`
pub const METHOD_MERGE_CHIPS: &str = "mergeChips";
/// `Staking.getChipInfo`
pub const METHOD_GET_CHIP_INFO: &str = "getChipInfo";
/// `Staking.getNode`
pub const METHOD_GET_NODE: &str = "getNode";
/// `Billing.depositTokens`
pub const METHOD_DEPOSIT_TOKENS: &str = "depositTokens";
/// `Billing.withdrawTokens`
pub const METHOD_WITHDRAW_TOKENS: &str = "withdrawTokens";
/// `Billing.collectTokens`
pub const METHOD_COLLECT_TOKENS: &str = "collectTokens";
/// `Settlement.distributeRewards`
pub const METHOD_DISTRIBUTE_REWARDS: &str = "distributeRewards";
/// `Settlement.slashNodes`
pub const METHOD_SLASH_NODES: &str = "slashNodes";
/// `NetworkParams.setParams`
pub const METHOD_SET_PARAMS: &str = "setParams";
/// `Multicall3.aggregate3`
pub const METHOD_AGGREGATE3: &str = "aggregate3";

/// `Staking.NodeCreated`
pub const EVENT_NAME_NODE_CREATED: &str = "NodeCreated";
/// `Staking.Deposited`
pub const EVENT_NAME_DEPOSITED: &str = "Deposited";
/// `Staking.Staked`
pub const EVENT_NAME_STAKED: &str = "Staked";
/// `Staking.UnstakeRequested`
pub const EVENT_NAME_UNSTAKE_REQUESTED: &str = "UnstakeRequested";
/// `Staking.UnstakeClaimed`
pub const EVENT_NAME_UNSTAKE_CLAIMED: &str = "UnstakeClaimed";
/// `Staking.WithdrawRequested`
pub const EVENT_NAME_WITHDRAW_REQUESTED: &str = "WithdrawRequested";
/// `Staking.WithdrawalClaimed`
pub const EVENT_NAME_WITHDRAWAL_CLAIMED: &str = "WithdrawalClaimed";
/// `Staking.ChipsMerged`
pub const EVENT_NAME_CHIPS_MERGED: &str = "ChipsMerged";
/// `Chips.Transfer` and `GovernanceToken.Transfer`
pub const EVENT_NAME_TRANSFER: &str = "Transfer";
/// `Chips.Approval` and `GovernanceToken.Approval`
pub const EVENT_NAME_APPROVAL: &str = "Approval";
/// `Chips.ApprovalForAll`
pub const EVENT_NAME_APPROVAL_FOR_ALL: &str = "ApprovalForAll";
/// `Billing.TokensDeposited`
pub const EVENT_NAME_TOKENS_DEPOSITED: &str = "TokensDeposited";
/// `Billing.TokensWithdrawn`
pub const EVENT_NAME_TOKENS_WITHDRAWN: &str = "TokensWithdrawn";
/// `Billing.TokensCollected`
pub const EVENT_NAME_TOKENS_COLLECTED: &str = "TokensCollected";
/// `GovernanceToken.DelegateChanged`
pub const EVENT_NAME_DELEGATE_CHANGED: &str = "DelegateChanged";
/// `GovernanceToken.DelegateVotesChanged`
pub const EVENT_NAME_DELEGATE_VOTES_CHANGED: &str = "DelegateVotesChanged";
/// `Settlement.RewardDistributed`
pub const EVENT_NAME_REWARD_DISTRIBUTED: &str = "RewardDistributed";
/// `Settlement.NodeSlashed`
pub const EVENT_NAME_NODE_SLASHED: &str = "NodeSlashed";
/// `NetworkParams.ParamsSet`
pub const EVENT_NAME_PARAMS_SET: &str = "ParamsSet";

/// Signature hash of [`Staking::NodeCreated`].
pub const EVENT_NODE_CREATED: B256 = Staking::NodeCreated::SIGNATURE_HASH;
/// Signature hash of [`Staking::Deposited`].
pub const EVENT_DEPOSITED: B256 = Staking::Deposited::SIGNATURE_HASH;
/// Signature hash of [`Staking::Staked`].
pub const EVENT_STAKED: B256 = Staking::Staked::SIGNATURE_HASH;
/// Signature hash of [`Staking::UnstakeRequested`].
pub const EVENT_UNSTAKE_REQUESTED: B256 = Staking::UnstakeRequested::SIGNATURE_HASH;
/// Signature hash of [`Staking::UnstakeClaimed`].
pub const EVENT_UNSTAKE_CLAIMED: B256 = Staking::UnstakeClaimed::SIGNATURE_HASH;
/// Signature hash of [`Staking::WithdrawRequested`].
pub const EVENT_WITHDRAW_REQUESTED: B256 = Staking::WithdrawRequested::SIGNATURE_HASH;
/// Signature hash of [`Staking::WithdrawalClaimed`].
pub const EVENT_WITHDRAWAL_CLAIMED: B256 = Staking::WithdrawalClaimed::SIGNATURE_HASH;
/// Signature hash of [`Staking::ChipsMerged`].
pub const EVENT_CHIPS_MERGED: B256 = Staking::ChipsMerged::SIGNATURE_HASH;
/// Signature hash of [`Chips::Transfer`]. Equal to the ERC-20 `Transfer`
/// hash, as indexing is not part of the signature.
pub const EVENT_CHIP_TRANSFER: B256 = Chips::Transfer::SIGNATURE_HASH;
/// Signature hash of [`Chips::Approval`].
pub const EVENT_CHIP_APPROVAL: B256 = Chips::Approval::SIGNATURE_HASH;
/// Signature hash of [`Chips::ApprovalForAll`].
pub const EVENT_CHIP_APPROVAL_FOR_ALL: B256 = Chips::ApprovalForAll::SIGNATURE_HASH;
/// Signature hash of [`Billing::TokensDeposited`].
pub const EVENT_TOKENS_DEPOSITED: B256 = Billing::TokensDeposited::SIGNATURE_HASH;
/// Signature hash of [`Billing::TokensWithdrawn`].
pub const EVENT_TOKENS_WITHDRAWN: B256 = Billing::TokensWithdrawn::SIGNATURE_HASH;
/// Signature hash of [`Billing::TokensCollected`].
pub const EVENT_TOKENS_COLLECTED: B256 = Billing::TokensCollected::SIGNATURE_HASH;
/// Signature hash of [`GovernanceToken::Transfer`].
pub const EVENT_TOKEN_TRANSFER: B256 = GovernanceToken::Transfer::SIGNATURE_HASH;
/// Signature hash of [`GovernanceToken::Approval`].
pub const EVENT_TOKEN_APPROVAL: B256 = GovernanceToken::Approval::SIGNATURE_HASH;
/// Signature hash of [`GovernanceToken::DelegateChanged`].
pub const EVENT_DELEGATE_CHANGED: B256 = GovernanceToken::DelegateChanged::SIGNATURE_HASH;
/// Signature hash of [`GovernanceToken::DelegateVotesChanged`].
pub const EVENT_DELEGATE_VOTES_CHANGED: B256 =
    GovernanceToken::DelegateVotesChanged::SIGNATURE_HASH;
/// Signature hash of [`Settlement::RewardDistributed`].
pub const EVENT_REWARD_DISTRIBUTED: B256 = Settlement::RewardDistributed::SIGNATURE_HASH;
/// Signature hash of [`Settlement::NodeSlashed`].
pub const EVENT_NODE_SLASHED: B256 = Settlement::NodeSlashed::SIGNATURE_HASH;
/// Signature hash of [`NetworkParams::ParamsSet`].
pub const EVENT_PARAMS_SET: B256 = NetworkParams::ParamsSet::SIGNATURE_HASH;

/// An entry of [`EVENT_SIGNATURES`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EventSignature {
    /// Name of the emitting contract.
    pub contract: &'static str,
    /// Event name.
    pub name: &'static str,
    /// Signature hash, i.e. `topic0`.
    pub hash: B256,
}

impl EventSignature {
    const fn new(contract: &'static str, name: &'static str, hash: B256) -> Self {
        Self { contract, name, hash }
    }
}

/// Every event emitted by the VSL contracts.
pub const EVENT_SIGNATURES: &[EventSignature] = &[
    EventSignature::new(CONTRACT_STAKING, EVENT_NAME_NODE_CREATED, EVENT_NODE_CREATED),
    EventSignature::new(CONTRACT_STAKING, EVENT_NAME_DEPOSITED, EVENT_DEPOSITED),
    EventSignature::new(CONTRACT_STAKING, EVENT_NAME_STAKED, EVENT_STAKED),
    EventSignature::new(CONTRACT_STAKING, EVENT_NAME_UNSTAKE_REQUESTED, EVENT_UNSTAKE_REQUESTED),
    EventSignature::new(CONTRACT_STAKING, EVENT_NAME_UNSTAKE_CLAIMED, EVENT_UNSTAKE_CLAIMED),
    EventSignature::new(CONTRACT_STAKING, EVENT_NAME_WITHDRAW_REQUESTED, EVENT_WITHDRAW_REQUESTED),
    EventSignature::new(CONTRACT_STAKING, EVENT_NAME_WITHDRAWAL_CLAIMED, EVENT_WITHDRAWAL_CLAIMED),
    EventSignature::new(CONTRACT_STAKING, EVENT_NAME_CHIPS_MERGED, EVENT_CHIPS_MERGED),
    EventSignature::new(CONTRACT_CHIPS, EVENT_NAME_TRANSFER, EVENT_CHIP_TRANSFER),
    EventSignature::new(CONTRACT_CHIPS, EVENT_NAME_APPROVAL, EVENT_CHIP_APPROVAL),
    EventSignature::new(CONTRACT_CHIPS, EVENT_NAME_APPROVAL_FOR_ALL, EVENT_CHIP_APPROVAL_FOR_ALL),
    EventSignature::new(CONTRACT_BILLING, EVENT_NAME_TOKENS_DEPOSITED, EVENT_TOKENS_DEPOSITED),
    EventSignature::new(CONTRACT_BILLING, EVENT_NAME_TOKENS_WITHDRAWN, EVENT_TOKENS_WITHDRAWN),
    EventSignature::new(CONTRACT_BILLING, EVENT_NAME_TOKENS_COLLECTED, EVENT_TOKENS_COLLECTED),
    EventSignature::new(CONTRACT_GOVERNANCE_TOKEN, EVENT_NAME_TRANSFER, EVENT_TOKEN_TRANSFER),
    EventSignature::new(CONTRACT_GOVERNANCE_TOKEN, EVENT_NAME_APPROVAL, EVENT_TOKEN_APPROVAL),
    EventSignature::new(
        CONTRACT_GOVERNANCE_TOKEN,
        EVENT_NAME_DELEGATE_CHANGED,
        EVENT_DELEGATE_CHANGED,
    ),
    EventSignature::new(
        CONTRACT_GOVERNANCE_TOKEN,
        EVENT_NAME_DELEGATE_VOTES_CHANGED,
        EVENT_DELEGATE_VOTES_CHANGED,
    ),
    EventSignature::new(
        CONTRACT_SETTLEMENT,
        EVENT_NAME_REWARD_DISTRIBUTED,
        EVENT_REWARD_DISTRIBUTED,
    ),
    EventSignature::new(CONTRACT_SETTLEMENT, EVENT_NAME_NODE_SLASHED, EVENT_NODE_SLASHED),
    EventSignature::new(CONTRACT_NETWORK_PARAMS, EVENT_NAME_PARAMS_SET, EVENT_PARAMS_SET),
];

/// Get the event name for a log `topic0`, if it belongs to a VSL contract.
pub fn event_name(topic0: &B256) -> Option<&'static str> {
    EVENT_SIGNATURES.iter().find(|sig| &sig.hash == topic0).map(|sig| sig.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        primitives::{b256, keccak256},
        sol_types::{SolCall, SolEvent},
    };

    fn name_of(signature: &str) -> &str {
        signature.split('(').next().unwrap()
    }

    #[test]
    fn hashes_match_signatures() {
        fn check<E: SolEvent>(name: &str, hash: B256) {
            assert_eq!(name_of(E::SIGNATURE), name);
            assert_eq!(keccak256(E::SIGNATURE), hash);
        }

        check::<Staking::Staked>(EVENT_NAME_STAKED, EVENT_STAKED);
        check::<Staking::UnstakeRequested>(EVENT_NAME_UNSTAKE_REQUESTED, EVENT_UNSTAKE_REQUESTED);
        check::<Chips::Transfer>(EVENT_NAME_TRANSFER, EVENT_CHIP_TRANSFER);
        check::<Settlement::RewardDistributed>(
            EVENT_NAME_REWARD_DISTRIBUTED,
            EVENT_REWARD_DISTRIBUTED,
        );
        check::<NetworkParams::ParamsSet>(EVENT_NAME_PARAMS_SET, EVENT_PARAMS_SET);
    }

    #[test]
    fn well_known_hashes() {
        let transfer = b256!("0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");
        let approval = b256!("0x8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925");

        assert_eq!(EVENT_CHIP_TRANSFER, transfer);
        assert_eq!(EVENT_TOKEN_TRANSFER, transfer);
        assert_eq!(EVENT_CHIP_APPROVAL, approval);
        assert_eq!(EVENT_TOKEN_APPROVAL, approval);
    }

    #[test]
    fn table_is_complete() {
        assert_eq!(EVENT_SIGNATURES.len(), 21);
        for sig in EVENT_SIGNATURES {
            assert_eq!(event_name(&sig.hash), Some(sig.name));
        }
        assert_eq!(event_name(&B256::ZERO), None);
    }

    #[test]
    fn method_names_match_bindings() {
        assert_eq!(name_of(Staking::getChipInfoCall::SIGNATURE), METHOD_GET_CHIP_INFO);
        assert_eq!(name_of(Staking::stakeCall::SIGNATURE), METHOD_STAKE);
        assert_eq!(name_of(crate::Multicall3::aggregate3Call::SIGNATURE), METHOD_AGGREGATE3);
        assert_eq!(
            name_of(Settlement::distributeRewardsCall::SIGNATURE),
            METHOD_DISTRIBUTE_REWARDS
        );
        assert_eq!(Staking::getChipInfoCall::SIGNATURE, "getChipInfo(uint256)");
    }
}
