use crate::{
    client::{batch, decode_all},
    MulticallClient, MulticallError,
};
use alloy::{
    eips::BlockId,
    primitives::{Address, U256},
    providers::Provider,
};
use tracing::{debug, instrument};
use vsl_bindings::{ChipInfo, Multicall3::Call3, Staking};

/// Build the `getChipInfo` sub-calls for `token_ids` against the staking
/// proxy, one per token id, in input order.
fn chip_calls(staking: Address, token_ids: &[U256]) -> Vec<Call3> {
    let calls: Vec<_> =
        token_ids.iter().map(|&id| Staking::getChipInfoCall { chipId: id }).collect();
    batch(staking, &calls)
}

impl<P: Provider> MulticallClient<P> {
    /// Fetch [`ChipInfo`] for each of `token_ids` as of `block`, with a
    /// single `aggregate3` call against the chain's staking contract.
    ///
    /// The result has one entry per token id, in input order. An empty
    /// input yields an empty result without any network I/O. If any
    /// `getChipInfo` call fails or returns undecodable data, the whole call
    /// fails with an error identifying the chip.
    #[instrument(skip_all, fields(chain_id = self.chain_id(), chips = token_ids.len(), block = ?block))]
    pub async fn get_chips_info(
        &self,
        block: BlockId,
        token_ids: &[U256],
    ) -> Result<Vec<ChipInfo>, MulticallError> {
        let staking = self.contracts()?.staking();
        if token_ids.is_empty() {
            debug!("no chips requested");
            return Ok(Vec::new());
        }

        let results = self.aggregate3(chip_calls(staking, token_ids), block).await?;
        let infos = decode_all::<Staking::getChipInfoCall>(results)
            .map_err(|e| e.for_chips(token_ids))?
            .into_iter()
            .map(ChipInfo::from)
            .collect();

        Ok(infos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{primitives::Bytes, sol_types::SolCall};

    #[test]
    fn one_call_per_chip_in_order() {
        let staking = vsl_constants::test_utils::STAKING;
        let token_ids = [U256::from(9), U256::from(1), U256::from(5)];

        let calls = chip_calls(staking, &token_ids);
        assert_eq!(calls.len(), token_ids.len());
        for (call, &chip_id) in calls.iter().zip(&token_ids) {
            assert_eq!(call.target, staking);
            assert!(call.allowFailure);

            let expected = Staking::getChipInfoCall { chipId: chip_id }.abi_encode();
            assert_eq!(call.callData, Bytes::from(expected));

            let decoded = Staking::getChipInfoCall::abi_decode(&call.callData).unwrap();
            assert_eq!(decoded.chipId, chip_id);
        }
    }

    #[test]
    fn no_chips_no_calls() {
        assert!(chip_calls(Address::ZERO, &[]).is_empty());
    }
}
