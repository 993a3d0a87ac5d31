//! Synthetic `Multicall3` responses.
use alloy::{
    primitives::{Address, Bytes, U256},
    sol_types::{Revert, SolError, SolValue},
};
use vsl_bindings::{ChipInfo, Multicall3};

/// A successful `getChipInfo` sub-call result.
pub fn chip_info_result(info: ChipInfo) -> Multicall3::Result {
    let data = (info.owner_node, info.token_balance, info.share_balance).abi_encode_params();
    Multicall3::Result { success: true, returnData: data.into() }
}

/// A [`ChipInfo`] fixture derived from `seed`, with a distinct owner and
/// balances.
pub fn chip_info_fixture(seed: u8) -> ChipInfo {
    ChipInfo::new(
        Address::repeat_byte(seed),
        U256::from(seed as u64 * 1_000),
        U256::from(seed as u64 * 999),
    )
}

/// A failed sub-call result, reverting with `Error(message)`.
pub fn reverted_result(message: &str) -> Multicall3::Result {
    Multicall3::Result { success: false, returnData: revert_data(message) }
}

/// ABI-encoded `Error(message)` revert data.
pub fn revert_data(message: &str) -> Bytes {
    Revert { reason: message.to_string() }.abi_encode().into()
}

/// A successful sub-call result carrying arbitrary return data.
pub fn raw_result(data: impl Into<Bytes>) -> Multicall3::Result {
    Multicall3::Result { success: true, returnData: data.into() }
}

/// The `eth_call` return data of `aggregate3` yielding `results`.
pub fn aggregate3_response(results: Vec<Multicall3::Result>) -> Bytes {
    (results,).abi_encode_params().into()
}
