use crate::MulticallError;
use alloy::{
    eips::BlockId,
    primitives::Address,
    providers::Provider,
    sol_types::SolCall,
};
use tracing::{debug, instrument, warn};
use vsl_bindings::Multicall3::{self, Call3};
use vsl_constants::{ContractAddresses, VslConstants};

/// Batches read-only contract calls into a single `Multicall3.aggregate3`
/// call against a VSL chain.
///
/// The client resolves the chain's contracts from the registry when it is
/// created. A client for an unknown chain can be built, but every call on it
/// fails with [`MulticallError::UnknownChain`] before any network I/O.
#[derive(Debug, Clone)]
pub struct MulticallClient<P> {
    provider: P,
    chain_id: u64,
    contracts: Option<ContractAddresses>,
}

impl<P> MulticallClient<P> {
    /// Create a new client for the registered deployment on `chain_id`.
    pub fn new(provider: P, chain_id: u64) -> Self {
        Self { provider, chain_id, contracts: vsl_constants::contracts_for(chain_id) }
    }

    /// Create a new client for a deployment described by `constants`, e.g.
    /// one loaded with [`VslConstants::from_env`].
    pub const fn from_constants(provider: P, constants: &VslConstants) -> Self {
        Self { provider, chain_id: constants.chain_id(), contracts: Some(constants.contracts()) }
    }

    /// Get a reference to the provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Get the chain id.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the contracts of the chain.
    pub fn contracts(&self) -> Result<ContractAddresses, MulticallError> {
        match self.contracts {
            Some(contracts) => Ok(contracts),
            None => Err(MulticallError::UnknownChain(self.chain_id)),
        }
    }
}

impl<P: Provider> MulticallClient<P> {
    /// Submit `calls` as a single `aggregate3` call as of `block`, returning
    /// the raw per-call results in submission order.
    ///
    /// Sub-call failures are not inspected here. The call fails if the
    /// aggregate call itself fails, or if the number of results does not
    /// match the number of calls.
    #[instrument(skip_all, fields(chain_id = self.chain_id, calls = calls.len(), block = ?block))]
    pub async fn aggregate3(
        &self,
        calls: Vec<Call3>,
        block: BlockId,
    ) -> Result<Vec<Multicall3::Result>, MulticallError> {
        let contracts = self.contracts()?;
        if calls.is_empty() {
            return Ok(Vec::new());
        }

        let expected = calls.len();
        let multicall = Multicall3::new(contracts.multicall(), &self.provider);
        let results = multicall
            .aggregate3(calls)
            .block(block)
            .call()
            .await
            .inspect_err(|e| warn!(%e, "aggregate3 call failed"))?;

        if results.len() != expected {
            warn!(expected, actual = results.len(), "aggregate3 result count mismatch");
            return Err(MulticallError::LengthMismatch { expected, actual: results.len() });
        }

        debug!(
            failed = results.iter().filter(|r| !r.success).count(),
            "aggregate3 call succeeded"
        );
        Ok(results)
    }

    /// Batch `calls` against `target` as of `block`, decoding each return.
    ///
    /// Returns the decoded returns in the order of `calls`. If any call
    /// reports failure, or its return data cannot be decoded, the whole
    /// batch fails with an error carrying the index of the first offending
    /// call.
    pub async fn try_call_many<C: SolCall>(
        &self,
        target: Address,
        calls: &[C],
        block: BlockId,
    ) -> Result<Vec<C::Return>, MulticallError> {
        self.aggregate3(batch(target, calls), block).await.and_then(decode_all::<C>)
    }
}

/// Build one `Call3` per call against `target`, in order. Failures are
/// allowed so that they can be attributed per call.
pub(crate) fn batch<C: SolCall>(target: Address, calls: &[C]) -> Vec<Call3> {
    calls
        .iter()
        .map(|call| Call3 { target, allowFailure: true, callData: call.abi_encode().into() })
        .collect()
}

/// Decode every sub-call result, failing on the first that reports failure
/// or cannot be decoded.
pub(crate) fn decode_all<C: SolCall>(
    results: Vec<Multicall3::Result>,
) -> Result<Vec<C::Return>, MulticallError> {
    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| decode_result::<C>(index, result))
        .collect()
}

/// Decode a single sub-call result.
fn decode_result<C: SolCall>(
    index: usize,
    result: Multicall3::Result,
) -> Result<C::Return, MulticallError> {
    if !result.success {
        warn!(index, call = C::SIGNATURE, "sub-call failed");
        return Err(MulticallError::CallFailed { index, revert_data: result.returnData });
    }

    C::abi_decode_returns(&result.returnData).map_err(|source| {
        warn!(index, call = C::SIGNATURE, %source, "failed to decode sub-call return data");
        MulticallError::Decode { index, data: result.returnData, source }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        primitives::{Bytes, U256},
        sol_types::SolValue,
    };
    use vsl_bindings::Staking;

    fn ok(data: Vec<u8>) -> Multicall3::Result {
        Multicall3::Result { success: true, returnData: data.into() }
    }

    #[test]
    fn decode_success() {
        let owner = Address::repeat_byte(9);
        let data = (owner, U256::from(10), U256::from(20)).abi_encode_params();

        let ret = decode_result::<Staking::getChipInfoCall>(0, ok(data)).unwrap();
        assert_eq!(ret.nodeAddr, owner);
        assert_eq!(ret.tokens, U256::from(10));
        assert_eq!(ret.shares, U256::from(20));
    }

    #[test]
    fn decode_reports_failure_index() {
        let failed = Multicall3::Result { success: false, returnData: Bytes::from_static(&[1, 2]) };

        match decode_result::<Staking::getChipInfoCall>(3, failed).unwrap_err() {
            MulticallError::CallFailed { index, revert_data } => {
                assert_eq!(index, 3);
                assert_eq!(revert_data, Bytes::from_static(&[1, 2]));
            }
            e => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn decode_reports_bad_payload() {
        match decode_result::<Staking::getChipInfoCall>(1, ok(vec![0xde, 0xad])).unwrap_err() {
            MulticallError::Decode { index, data, .. } => {
                assert_eq!(index, 1);
                assert_eq!(data, Bytes::from_static(&[0xde, 0xad]));
            }
            e => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn batch_targets_every_call() {
        let target = Address::repeat_byte(0x11);
        let calls = [
            Staking::getChipInfoCall { chipId: U256::from(2) },
            Staking::getChipInfoCall { chipId: U256::from(1) },
        ];

        let batch = batch(target, &calls);
        assert_eq!(batch.len(), 2);
        for (call3, call) in batch.iter().zip(&calls) {
            assert_eq!(call3.target, target);
            assert!(call3.allowFailure);
            assert_eq!(call3.callData, Bytes::from(call.abi_encode()));
        }
    }

    #[test]
    fn decode_all_stops_at_first_failure() {
        let data = (Address::ZERO, U256::from(1), U256::from(2)).abi_encode_params();
        let failed = Multicall3::Result { success: false, returnData: Bytes::new() };

        let err = decode_all::<Staking::getChipInfoCall>(vec![ok(data.clone()), failed, ok(vec![])])
            .unwrap_err();
        assert!(matches!(err, MulticallError::CallFailed { index: 1, .. }));

        let rets = decode_all::<Staking::getChipInfoCall>(vec![ok(data.clone()), ok(data)]);
        assert_eq!(rets.unwrap().len(), 2);
    }

    #[test]
    fn unknown_chain_contracts() {
        let client = MulticallClient::new((), 1);
        assert!(matches!(client.contracts(), Err(MulticallError::UnknownChain(1))));

        // Known chain, but no deployment registered.
        let client = MulticallClient::new((), vsl_constants::mainnet::CHAIN_ID);
        assert!(matches!(client.contracts(), Err(MulticallError::UnknownChain(_))));

        let client = MulticallClient::new((), vsl_constants::test_utils::CHAIN_ID);
        assert_eq!(client.contracts().unwrap(), vsl_constants::test_utils::CONTRACTS);
    }
}
