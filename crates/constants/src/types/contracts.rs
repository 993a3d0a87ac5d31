use alloy::primitives::Address;

/// Proxy addresses of the VSL system contracts on a single chain.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAddresses {
    /// Address of the staking proxy.
    staking: Address,
    /// Address of the chips (staking position NFT) proxy.
    chips: Address,
    /// Address of the billing proxy.
    billing: Address,
    /// Address of the governance token.
    governance_token: Address,
    /// Address of the settlement proxy.
    settlement: Address,
    /// Address of the network params proxy.
    network_params: Address,
    /// Address of the `Multicall3` contract.
    #[serde(default = "default_multicall")]
    multicall: Address,
}

const fn default_multicall() -> Address {
    crate::MULTICALL3_ADDRESS
}

impl std::fmt::Display for ContractAddresses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ staking: {}, chips: {}, settlement: {}, network_params: {} }}",
            self.staking, self.chips, self.settlement, self.network_params
        )
    }
}

impl ContractAddresses {
    /// Create a new set of contract addresses.
    pub const fn new(
        staking: Address,
        chips: Address,
        billing: Address,
        governance_token: Address,
        settlement: Address,
        network_params: Address,
        multicall: Address,
    ) -> Self {
        Self { staking, chips, billing, governance_token, settlement, network_params, multicall }
    }

    /// True if the address is one of the system contracts. The multicall
    /// contract is not a system contract.
    pub const fn const_is_system_contract(&self, address: Address) -> bool {
        address.const_eq(&self.staking)
            || address.const_eq(&self.chips)
            || address.const_eq(&self.billing)
            || address.const_eq(&self.governance_token)
            || address.const_eq(&self.settlement)
            || address.const_eq(&self.network_params)
    }

    /// True if the address is one of the system contracts.
    pub fn is_system_contract(&self, address: Address) -> bool {
        [
            self.staking,
            self.chips,
            self.billing,
            self.governance_token,
            self.settlement,
            self.network_params,
        ]
        .contains(&address)
    }

    /// Get the staking proxy address.
    pub const fn staking(&self) -> Address {
        self.staking
    }

    /// Get the chips proxy address.
    pub const fn chips(&self) -> Address {
        self.chips
    }

    /// Get the billing proxy address.
    pub const fn billing(&self) -> Address {
        self.billing
    }

    /// Get the governance token address.
    pub const fn governance_token(&self) -> Address {
        self.governance_token
    }

    /// Get the settlement proxy address.
    pub const fn settlement(&self) -> Address {
        self.settlement
    }

    /// Get the network params proxy address.
    pub const fn network_params(&self) -> Address {
        self.network_params
    }

    /// Get the `Multicall3` address.
    pub const fn multicall(&self) -> Address {
        self.multicall
    }

    /// Replace the staking proxy address.
    pub const fn with_staking(mut self, staking: Address) -> Self {
        self.staking = staking;
        self
    }

    /// Replace the chips proxy address.
    pub const fn with_chips(mut self, chips: Address) -> Self {
        self.chips = chips;
        self
    }

    /// Replace the billing proxy address.
    pub const fn with_billing(mut self, billing: Address) -> Self {
        self.billing = billing;
        self
    }

    /// Replace the governance token address.
    pub const fn with_governance_token(mut self, governance_token: Address) -> Self {
        self.governance_token = governance_token;
        self
    }

    /// Replace the settlement proxy address.
    pub const fn with_settlement(mut self, settlement: Address) -> Self {
        self.settlement = settlement;
        self
    }

    /// Replace the network params proxy address.
    pub const fn with_network_params(mut self, network_params: Address) -> Self {
        self.network_params = network_params;
        self
    }

    /// Replace the multicall address.
    pub const fn with_multicall(mut self, multicall: Address) -> Self {
        self.multicall = multicall;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{CONTRACTS, MULTICALL, STAKING};
    use alloy::primitives::Address;

    #[test]
    fn system_contracts() {
        assert!(CONTRACTS.is_system_contract(STAKING));
        assert!(CONTRACTS.const_is_system_contract(STAKING));
        assert!(!CONTRACTS.is_system_contract(MULTICALL));
        assert!(!CONTRACTS.const_is_system_contract(Address::ZERO));
    }

    #[test]
    fn deser_defaults_multicall() {
        let json = serde_json::json!({
            "staking": "0x1111111111111111111111111111111111111111",
            "chips": "0x2222222222222222222222222222222222222222",
            "billing": "0x3333333333333333333333333333333333333333",
            "governanceToken": "0x4444444444444444444444444444444444444444",
            "settlement": "0x5555555555555555555555555555555555555555",
            "networkParams": "0x6666666666666666666666666666666666666666",
        });
        let contracts: super::ContractAddresses = serde_json::from_value(json).unwrap();
        assert_eq!(contracts, CONTRACTS.with_multicall(crate::MULTICALL3_ADDRESS));
    }
}
