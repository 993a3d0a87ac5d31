#![allow(clippy::too_many_arguments)]
#![allow(missing_docs)]
use alloy::primitives::{Address, U256};

mod staking {
    use super::*;

    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        contract Staking {
            struct Node {
                uint256 id;
                address account;
                uint256 stakingPoolTokens;
                uint256 operationPoolTokens;
                uint256 totalShares;
                uint64 taxRateBasisPoints;
                bool publicGood;
                bool alpha;
                uint8 status;
                string name;
                string description;
            }

            struct UnstakeRequest {
                address owner;
                address nodeAddr;
                uint256 unstakeAmount;
                uint256 timestamp;
            }

            event NodeCreated(
                uint256 indexed nodeId,
                address indexed nodeAddr,
                string name,
                string description,
                uint64 taxRateBasisPoints,
                bool publicGood,
                bool alpha
            );
            event Deposited(address indexed nodeAddr, uint256 amount);
            event Staked(
                address indexed user,
                address indexed nodeAddr,
                uint256 amount,
                uint256 startTokenId,
                uint256 endTokenId
            );
            event UnstakeRequested(
                address indexed user,
                address indexed nodeAddr,
                uint256 indexed requestId,
                uint256 unstakeAmount,
                uint256[] chipIds
            );
            event UnstakeClaimed(
                uint256 indexed requestId,
                address indexed nodeAddr,
                address indexed user,
                uint256 unstakeAmount
            );
            event WithdrawRequested(address indexed nodeAddr, uint256 indexed requestId, uint256 amount);
            event WithdrawalClaimed(uint256 indexed requestId);
            event ChipsMerged(
                address indexed user,
                address indexed nodeAddr,
                uint256 indexed newTokenId,
                uint256[] burnedTokenIds
            );

            error ZeroAmount();
            error NodeNotExists(address nodeAddr);
            error NodeExists(address nodeAddr);
            error NotChipOwner(uint256 chipId);
            error PendingRequestNotExists(uint256 requestId);
            error ClaimTimeNotReady(uint256 requestId);

            function createNode(
                string calldata name,
                string calldata description,
                uint64 taxRateBasisPoints,
                bool publicGood
            ) external payable;
            function deposit() external payable;
            function stake(address nodeAddr) external payable returns (uint256 startTokenId, uint256 endTokenId);
            function requestUnstake(address nodeAddr, uint256[] calldata chipIds) external returns (uint256 requestId);
            function claimUnstake(uint256[] calldata requestIds) external;
            function requestWithdrawal(uint256 amount) external returns (uint256 requestId);
            function claimWithdrawal(uint256[] calldata requestIds) external;
            function mergeChips(uint256[] calldata chipIds) external returns (uint256 newTokenId);

            function getNode(address nodeAddr) external view returns (Node memory);
            function getNodeCount() external view returns (uint256);
            function getChipInfo(uint256 chipId) external view returns (address nodeAddr, uint256 tokens, uint256 shares);
            function getPendingUnstake(uint256 requestId) external view returns (UnstakeRequest memory);
            function minTokensToStake(address nodeAddr) external view returns (uint256);
        }
    );

    impl Copy for Staking::Deposited {}
    impl Copy for Staking::Staked {}
    impl Copy for Staking::UnstakeClaimed {}
    impl Copy for Staking::WithdrawRequested {}
    impl Copy for Staking::WithdrawalClaimed {}
    impl Copy for Staking::UnstakeRequest {}
    impl Copy for Staking::ZeroAmount {}
    impl Copy for Staking::NodeNotExists {}
    impl Copy for Staking::NodeExists {}
    impl Copy for Staking::NotChipOwner {}

    impl Staking::Staked {
        /// Get the staker.
        pub const fn user(&self) -> Address {
            self.user
        }

        /// Get the node the tokens were staked to.
        pub const fn node(&self) -> Address {
            self.nodeAddr
        }

        /// Get the staked amount.
        pub const fn amount(&self) -> U256 {
            self.amount
        }

        /// Get the first chip id minted by the stake.
        pub const fn start_token_id(&self) -> U256 {
            self.startTokenId
        }

        /// Get the last chip id minted by the stake.
        pub const fn end_token_id(&self) -> U256 {
            self.endTokenId
        }

        /// Get the number of chips minted by the stake. Zero if the range is
        /// inverted or
        /// spans the whole id space.
        pub fn chip_count(&self) -> U256 {
            self.endTokenId
                .checked_sub(self.startTokenId)
                .and_then(|d| d.checked_add(U256::from(1)))
                .unwrap_or_default()
        }
    }

    impl Staking::UnstakeRequested {
        /// Get the user requesting the unstake.
        pub const fn user(&self) -> Address {
            self.user
        }

        /// Get the node being unstaked from.
        pub const fn node(&self) -> Address {
            self.nodeAddr
        }

        /// Get the request id.
        pub const fn request_id(&self) -> U256 {
            self.requestId
        }

        /// Get the chips burned by the request.
        pub fn chip_ids(&self) -> &[U256] {
            &self.chipIds
        }
    }

    impl Staking::UnstakeClaimed {
        /// Get the request id.
        pub const fn request_id(&self) -> U256 {
            self.requestId
        }

        /// Get the node unstaked from.
        pub const fn node(&self) -> Address {
            self.nodeAddr
        }

        /// Get the user who claimed.
        pub const fn user(&self) -> Address {
            self.user
        }

        /// Get the claimed amount.
        pub const fn amount(&self) -> U256 {
            self.unstakeAmount
        }
    }

    impl Staking::NodeCreated {
        /// Get the node id.
        pub const fn node_id(&self) -> U256 {
            self.nodeId
        }

        /// Get the node address.
        pub const fn node(&self) -> Address {
            self.nodeAddr
        }

        /// Get the node tax rate, in basis points.
        pub const fn tax_rate_basis_points(&self) -> u64 {
            self.taxRateBasisPoints
        }
    }
}

mod chips {
    use super::*;

    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        contract Chips {
            event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);
            event Approval(address indexed owner, address indexed approved, uint256 indexed tokenId);
            event ApprovalForAll(address indexed owner, address indexed operatorAddr, bool approved);

            error ERC721NonexistentToken(uint256 tokenId);
            error ERC721InvalidOwner(address owner);
            error ERC721InsufficientApproval(address operatorAddr, uint256 tokenId);

            function name() external view returns (string memory);
            function symbol() external view returns (string memory);
            function tokenURI(uint256 tokenId) external view returns (string memory);
            function ownerOf(uint256 tokenId) external view returns (address);
            function balanceOf(address owner) external view returns (uint256);
            function getApproved(uint256 tokenId) external view returns (address);
            function isApprovedForAll(address owner, address operatorAddr) external view returns (bool);

            function approve(address to, uint256 tokenId) external;
            function setApprovalForAll(address operatorAddr, bool approved) external;
            function transferFrom(address from, address to, uint256 tokenId) external;
            function safeTransferFrom(address from, address to, uint256 tokenId) external;
        }
    );

    impl Copy for Chips::Transfer {}
    impl Copy for Chips::Approval {}
    impl Copy for Chips::ApprovalForAll {}
    impl Copy for Chips::ERC721NonexistentToken {}
    impl Copy for Chips::ERC721InvalidOwner {}
    impl Copy for Chips::ERC721InsufficientApproval {}

    impl Copy for Chips::ChipsEvents {}

    impl Chips::Transfer {
        /// Get the previous owner. Zero for mints.
        pub const fn previous_owner(&self) -> Address {
            self.from
        }

        /// Get the new owner. Zero for burns.
        pub const fn new_owner(&self) -> Address {
            self.to
        }

        /// Get the chip id.
        pub const fn token_id(&self) -> U256 {
            self.tokenId
        }

        /// True if the transfer mints the chip.
        pub const fn is_mint(&self) -> bool {
            self.from.0.const_is_zero()
        }

        /// True if the transfer burns the chip.
        pub const fn is_burn(&self) -> bool {
            self.to.0.const_is_zero()
        }
    }
}

mod billing {
    use super::*;

    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        contract Billing {
            event TokensDeposited(address indexed user, uint256 amount);
            event TokensWithdrawn(address indexed user, uint256 amount, uint256 fee);
            event TokensCollected(address indexed nodeAddr, address indexed recipient, uint256 amount);

            error ZeroAmount();
            error InsufficientBalance(address user, uint256 balance, uint256 amount);
            error LengthMismatch();

            function depositTokens() external payable;
            function withdrawTokens(address[] calldata users, uint256[] calldata amounts, uint256 fee) external;
            function collectTokens(address[] calldata nodeAddrs, uint256[] calldata amounts) external;
            function balanceOf(address user) external view returns (uint256);
        }
    );

    impl Copy for Billing::TokensDeposited {}
    impl Copy for Billing::TokensWithdrawn {}
    impl Copy for Billing::TokensCollected {}
    impl Copy for Billing::ZeroAmount {}
    impl Copy for Billing::InsufficientBalance {}
    impl Copy for Billing::LengthMismatch {}

    impl Copy for Billing::BillingEvents {}

    impl Billing::TokensDeposited {
        /// Get the depositing user.
        pub const fn user(&self) -> Address {
            self.user
        }

        /// Get the deposited amount.
        pub const fn amount(&self) -> U256 {
            self.amount
        }
    }

    impl Billing::TokensCollected {
        /// Get the node credited with the collection.
        pub const fn node(&self) -> Address {
            self.nodeAddr
        }

        /// Get the recipient of the collected tokens.
        pub const fn recipient(&self) -> Address {
            self.recipient
        }

        /// Get the collected amount.
        pub const fn amount(&self) -> U256 {
            self.amount
        }
    }
}

mod governance_token {
    use super::*;

    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        contract GovernanceToken {
            event Transfer(address indexed from, address indexed to, uint256 value);
            event Approval(address indexed owner, address indexed spender, uint256 value);
            event DelegateChanged(address indexed delegator, address indexed fromDelegate, address indexed toDelegate);
            event DelegateVotesChanged(address indexed delegate, uint256 previousVotes, uint256 newVotes);

            error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
            error ERC20InsufficientAllowance(address spender, uint256 allowance, uint256 needed);

            function name() external view returns (string memory);
            function symbol() external view returns (string memory);
            function decimals() external view returns (uint8);
            function totalSupply() external view returns (uint256);
            function balanceOf(address account) external view returns (uint256);
            function allowance(address owner, address spender) external view returns (uint256);
            function delegates(address account) external view returns (address);
            function getVotes(address account) external view returns (uint256);
            function getPastVotes(address account, uint256 timepoint) external view returns (uint256);

            function approve(address spender, uint256 value) external returns (bool);
            function transfer(address to, uint256 value) external returns (bool);
            function transferFrom(address from, address to, uint256 value) external returns (bool);
            function delegate(address delegatee) external;
        }
    );

    impl Copy for GovernanceToken::Transfer {}
    impl Copy for GovernanceToken::Approval {}
    impl Copy for GovernanceToken::DelegateChanged {}
    impl Copy for GovernanceToken::DelegateVotesChanged {}
    impl Copy for GovernanceToken::ERC20InsufficientBalance {}
    impl Copy for GovernanceToken::ERC20InsufficientAllowance {}

    impl Copy for GovernanceToken::GovernanceTokenEvents {}

    impl GovernanceToken::Transfer {
        /// Get the sender. Zero for mints.
        pub const fn sender(&self) -> Address {
            self.from
        }

        /// Get the recipient. Zero for burns.
        pub const fn recipient(&self) -> Address {
            self.to
        }

        /// Get the amount transferred.
        pub const fn value(&self) -> U256 {
            self.value
        }
    }
}

mod settlement {
    use super::*;

    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        contract Settlement {
            event RewardDistributed(
                uint256 indexed epoch,
                uint256 startTimestamp,
                uint256 endTimestamp,
                address[] nodeAddrs,
                uint256[] operationRewards,
                uint256[] stakingRewards,
                uint256[] taxCollected,
                uint256[] requestCounts
            );
            event NodeSlashed(uint256 indexed epoch, address indexed nodeAddr, uint256 slashedOperationPool, uint256 slashedStakingPool);

            error InvalidEpoch(uint256 epoch);
            error LengthMismatch();

            function distributeRewards(
                uint256 epoch,
                address[] calldata nodeAddrs,
                uint256[] calldata operationRewards,
                uint256[] calldata stakingRewards,
                uint256[] calldata requestCounts
            ) external;
            function slashNodes(uint256 epoch, address[] calldata nodeAddrs) external;
            function currentEpoch() external view returns (uint256);
        }
    );

    impl Copy for Settlement::NodeSlashed {}
    impl Copy for Settlement::InvalidEpoch {}
    impl Copy for Settlement::LengthMismatch {}

    impl Settlement::RewardDistributed {
        /// Get the settled epoch (discarding high bytes).
        pub const fn epoch(&self) -> u64 {
            self.epoch.as_limbs()[0]
        }

        /// Get the nodes rewarded in the epoch.
        pub fn node_addrs(&self) -> &[Address] {
            &self.nodeAddrs
        }

        /// Get the total rewards (operation and staking) of the node at
        /// `index`, or `None` if out of range or on overflow.
        pub fn total_reward(&self, index: usize) -> Option<U256> {
            let operation = self.operationRewards.get(index)?;
            let staking = self.stakingRewards.get(index)?;
            operation.checked_add(*staking)
        }
    }
}

mod network_params {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        contract NetworkParams {
            event ParamsSet(uint256 indexed epoch, string params);

            function setParams(uint256 epoch, string calldata params) external;
            function getParams(uint256 epoch) external view returns (string memory);
        }
    );

    impl NetworkParams::ParamsSet {
        /// Get the epoch the params apply to (discarding high bytes).
        pub const fn epoch(&self) -> u64 {
            self.epoch.as_limbs()[0]
        }

        /// Get the raw params blob.
        pub fn params(&self) -> &str {
            &self.params
        }
    }
}

mod multicall {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        contract Multicall3 {
            struct Call {
                address target;
                bytes callData;
            }

            struct Call3 {
                address target;
                bool allowFailure;
                bytes callData;
            }

            struct Result {
                bool success;
                bytes returnData;
            }

            function aggregate(Call[] calldata calls) external payable returns (uint256 blockNumber, bytes[] memory returnData);
            function tryAggregate(bool requireSuccess, Call[] calldata calls) external payable returns (Result[] memory returnData);
            function aggregate3(Call3[] calldata calls) external payable returns (Result[] memory returnData);

            function getBlockNumber() external view returns (uint256 blockNumber);
            function getCurrentBlockTimestamp() external view returns (uint256 timestamp);
            function getChainId() external view returns (uint256 chainid);
        }
    );
}

pub use billing::Billing;
pub use chips::Chips;
pub use governance_token::GovernanceToken;
pub use multicall::Multicall3;
pub use network_params::NetworkParams;
pub use settlement::Settlement;
pub use staking::Staking;

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, U256};

    #[test]
    fn chip_transfer_mint_and_burn() {
        let holder = Address::repeat_byte(0x42);
        let mint = Chips::Transfer { from: Address::ZERO, to: holder, tokenId: U256::from(1) };
        assert!(mint.is_mint());
        assert!(!mint.is_burn());

        let burn = Chips::Transfer { from: holder, to: Address::ZERO, tokenId: U256::from(1) };
        assert!(!burn.is_mint());
        assert!(burn.is_burn());

        let moved =
            Chips::Transfer { from: holder, to: Address::repeat_byte(1), tokenId: U256::ZERO };
        assert!(!moved.is_mint() && !moved.is_burn());
    }

    #[test]
    fn staked_chip_count() {
        let staked = |start: U256, end: U256| Staking::Staked {
            user: Address::ZERO,
            nodeAddr: Address::ZERO,
            amount: U256::ZERO,
            startTokenId: start,
            endTokenId: end,
        };
        assert_eq!(staked(U256::from(5), U256::from(9)).chip_count(), U256::from(5));
        assert_eq!(staked(U256::from(9), U256::from(5)).chip_count(), U256::ZERO);
        assert_eq!(staked(U256::ZERO, U256::MAX).chip_count(), U256::ZERO);
    }

    #[test]
    fn reward_totals() {
        let rewards = Settlement::RewardDistributed {
            epoch: U256::from(3),
            startTimestamp: U256::ZERO,
            endTimestamp: U256::ZERO,
            nodeAddrs: vec![Address::repeat_byte(1), Address::repeat_byte(2)],
            operationRewards: vec![U256::from(10), U256::MAX],
            stakingRewards: vec![U256::from(5), U256::from(1)],
            taxCollected: vec![U256::ZERO, U256::ZERO],
            requestCounts: vec![U256::ZERO, U256::ZERO],
        };
        assert_eq!(rewards.epoch(), 3);
        assert_eq!(rewards.total_reward(0), Some(U256::from(15)));
        // Overflowing totals are reported as missing.
        assert_eq!(rewards.total_reward(1), None);
        assert_eq!(rewards.total_reward(2), None);
    }

    #[test]
    fn governance_transfer_accessors() {
        let transfer = GovernanceToken::Transfer {
            from: Address::repeat_byte(1),
            to: Address::repeat_byte(2),
            value: U256::from(100),
        };
        assert_eq!(transfer.sender(), Address::repeat_byte(1));
        assert_eq!(transfer.recipient(), Address::repeat_byte(2));
        assert_eq!(transfer.value(), U256::from(100));
    }
}
