use crate::{
    Billing::{self, BillingEvents},
    Chips::{self, ChipsEvents},
    NetworkParams::{self, NetworkParamsEvents},
    Settlement::{self, SettlementEvents},
    Staking::{self, StakingEvents},
};
use alloy::{
    primitives::{Log, LogData},
    sol_types::SolEventInterface,
};
use vsl_constants::ContractAddresses;

/// Events consumed from the VSL system contracts.
///
/// Each one of these events is expected to be emitted by a different
/// system contract, and is decoded only if the emitting address matches the
/// registry entry for that contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Events {
    /// A [`Staking::NodeCreated`] event.
    NodeCreated(Staking::NodeCreated),
    /// A [`Staking::Staked`] event.
    Staked(Staking::Staked),
    /// A [`Staking::UnstakeRequested`] event.
    UnstakeRequested(Staking::UnstakeRequested),
    /// A [`Staking::UnstakeClaimed`] event.
    UnstakeClaimed(Staking::UnstakeClaimed),
    /// A [`Chips::Transfer`] event.
    ChipTransfer(Chips::Transfer),
    /// A [`Billing::TokensDeposited`] event.
    TokensDeposited(Billing::TokensDeposited),
    /// A [`Billing::TokensCollected`] event.
    TokensCollected(Billing::TokensCollected),
    /// A [`Settlement::RewardDistributed`] event.
    RewardDistributed(Settlement::RewardDistributed),
    /// A [`NetworkParams::ParamsSet`] event.
    ParamsSet(NetworkParams::ParamsSet),
}

impl From<Staking::NodeCreated> for Events {
    fn from(e: Staking::NodeCreated) -> Self {
        Events::NodeCreated(e)
    }
}

impl From<Staking::Staked> for Events {
    fn from(e: Staking::Staked) -> Self {
        Events::Staked(e)
    }
}

impl From<Staking::UnstakeRequested> for Events {
    fn from(e: Staking::UnstakeRequested) -> Self {
        Events::UnstakeRequested(e)
    }
}

impl From<Staking::UnstakeClaimed> for Events {
    fn from(e: Staking::UnstakeClaimed) -> Self {
        Events::UnstakeClaimed(e)
    }
}

impl From<Chips::Transfer> for Events {
    fn from(e: Chips::Transfer) -> Self {
        Events::ChipTransfer(e)
    }
}

impl From<Billing::TokensDeposited> for Events {
    fn from(e: Billing::TokensDeposited) -> Self {
        Events::TokensDeposited(e)
    }
}

impl From<Billing::TokensCollected> for Events {
    fn from(e: Billing::TokensCollected) -> Self {
        Events::TokensCollected(e)
    }
}

impl From<Settlement::RewardDistributed> for Events {
    fn from(e: Settlement::RewardDistributed) -> Self {
        Events::RewardDistributed(e)
    }
}

impl From<NetworkParams::ParamsSet> for Events {
    fn from(e: NetworkParams::ParamsSet) -> Self {
        Events::ParamsSet(e)
    }
}

impl Events {
    /// Decode a log emitted by one of the system contracts, routing it by
    /// its emitting address. Returns `None` for logs from other addresses and
    /// for events that are not consumed.
    pub fn decode(log: &Log<LogData>, contracts: &ContractAddresses) -> Option<Self> {
        let address = log.address;
        if address == contracts.staking() {
            Self::decode_staking(log)
        } else if address == contracts.chips() {
            Self::decode_chips(log)
        } else if address == contracts.billing() {
            Self::decode_billing(log)
        } else if address == contracts.settlement() {
            Self::decode_settlement(log)
        } else if address == contracts.network_params() {
            Self::decode_network_params(log)
        } else {
            None
        }
    }

    /// Decode a [`Staking`] event from a log.
    pub fn decode_staking(log: &Log<LogData>) -> Option<Self> {
        let event = StakingEvents::decode_log(log).ok().map(|log| log.data)?;

        match event {
            StakingEvents::NodeCreated(e) => Some(Self::NodeCreated(e)),
            StakingEvents::Staked(e) => Some(Self::Staked(e)),
            StakingEvents::UnstakeRequested(e) => Some(Self::UnstakeRequested(e)),
            StakingEvents::UnstakeClaimed(e) => Some(Self::UnstakeClaimed(e)),
            _ => None,
        }
    }

    /// Decode a [`Chips`] event from a log.
    pub fn decode_chips(log: &Log<LogData>) -> Option<Self> {
        let event = ChipsEvents::decode_log(log).ok().map(|log| log.data)?;

        match event {
            ChipsEvents::Transfer(e) => Some(Self::ChipTransfer(e)),
            _ => None,
        }
    }

    /// Decode a [`Billing`] event from a log.
    pub fn decode_billing(log: &Log<LogData>) -> Option<Self> {
        let event = BillingEvents::decode_log(log).ok().map(|log| log.data)?;

        match event {
            BillingEvents::TokensDeposited(e) => Some(Self::TokensDeposited(e)),
            BillingEvents::TokensCollected(e) => Some(Self::TokensCollected(e)),
            _ => None,
        }
    }

    /// Decode a [`Settlement`] event from a log.
    pub fn decode_settlement(log: &Log<LogData>) -> Option<Self> {
        let event = SettlementEvents::decode_log(log).ok().map(|log| log.data)?;

        match event {
            SettlementEvents::RewardDistributed(e) => Some(Self::RewardDistributed(e)),
            _ => None,
        }
    }

    /// Decode a [`NetworkParams`] event from a log.
    pub fn decode_network_params(log: &Log<LogData>) -> Option<Self> {
        let event = NetworkParamsEvents::decode_log(log).ok().map(|log| log.data)?;

        match event {
            NetworkParamsEvents::ParamsSet(e) => Some(Self::ParamsSet(e)),
        }
    }

    /// True if this event is a [`Staking::Staked`] event.
    pub const fn is_staked(&self) -> bool {
        matches!(self, Events::Staked(_))
    }

    /// Fallible cast to a [`Staking::Staked`] event.
    pub const fn as_staked(&self) -> Option<&Staking::Staked> {
        match &self {
            Events::Staked(e) => Some(e),
            _ => None,
        }
    }

    /// True if this event is a [`Chips::Transfer`] event.
    pub const fn is_chip_transfer(&self) -> bool {
        matches!(self, Events::ChipTransfer(_))
    }

    /// Fallible cast to a [`Chips::Transfer`] event.
    pub const fn as_chip_transfer(&self) -> Option<&Chips::Transfer> {
        match &self {
            Events::ChipTransfer(e) => Some(e),
            _ => None,
        }
    }

    /// True if this event is a [`Settlement::RewardDistributed`] event.
    pub const fn is_reward_distributed(&self) -> bool {
        matches!(self, Events::RewardDistributed(_))
    }

    /// Fallible cast to a [`Settlement::RewardDistributed`] event.
    pub const fn as_reward_distributed(&self) -> Option<&Settlement::RewardDistributed> {
        match &self {
            Events::RewardDistributed(e) => Some(e),
            _ => None,
        }
    }

    /// True if this event is a [`NetworkParams::ParamsSet`] event.
    pub const fn is_params_set(&self) -> bool {
        matches!(self, Events::ParamsSet(_))
    }

    /// Fallible cast to a [`NetworkParams::ParamsSet`] event.
    pub const fn as_params_set(&self) -> Option<&NetworkParams::ParamsSet> {
        match &self {
            Events::ParamsSet(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        primitives::{Address, U256},
        sol_types::SolEvent,
    };
    use vsl_constants::test_utils::{CHIPS, CONTRACTS, NETWORK_PARAMS, STAKING};

    fn log_at<E: SolEvent>(address: Address, event: &E) -> Log<LogData> {
        Log { address, data: event.encode_log_data() }
    }

    #[test]
    fn routes_by_address() {
        let staked = Staking::Staked {
            user: Address::repeat_byte(1),
            nodeAddr: Address::repeat_byte(2),
            amount: U256::from(1000),
            startTokenId: U256::from(10),
            endTokenId: U256::from(19),
        };

        let decoded = Events::decode(&log_at(STAKING, &staked), &CONTRACTS).unwrap();
        assert!(decoded.is_staked());
        assert_eq!(decoded.as_staked().unwrap().chip_count(), U256::from(10));

        // Same event from an unknown address is ignored.
        assert_eq!(Events::decode(&log_at(Address::repeat_byte(0xfe), &staked), &CONTRACTS), None);
        // And from the wrong system contract.
        assert_eq!(Events::decode(&log_at(CHIPS, &staked), &CONTRACTS), None);
    }

    #[test]
    fn decode_chip_transfer() {
        let transfer = Chips::Transfer {
            from: Address::ZERO,
            to: Address::repeat_byte(3),
            tokenId: U256::from(42),
        };

        let decoded = Events::decode(&log_at(CHIPS, &transfer), &CONTRACTS).unwrap();
        let transfer = decoded.as_chip_transfer().unwrap();
        assert!(transfer.is_mint());
        assert!(!transfer.is_burn());
        assert_eq!(transfer.token_id(), U256::from(42));
    }

    #[test]
    fn decode_params_set() {
        let params = NetworkParams::ParamsSet {
            epoch: U256::from(7),
            params: "{\"minStake\":\"10000\"}".to_string(),
        };

        let decoded = Events::decode(&log_at(NETWORK_PARAMS, &params), &CONTRACTS).unwrap();
        assert!(decoded.is_params_set());
        assert_eq!(decoded.as_params_set().unwrap().epoch(), 7);
        assert_eq!(decoded.as_params_set().unwrap().params(), "{\"minStake\":\"10000\"}");
    }

    #[test]
    fn unconsumed_event_is_none() {
        let deposited =
            Staking::Deposited { nodeAddr: Address::repeat_byte(2), amount: U256::from(5) };
        assert_eq!(Events::decode(&log_at(STAKING, &deposited), &CONTRACTS), None);
    }
}
