use alloy::primitives::{Bytes, U256};

/// Errors returned by [`MulticallClient`].
///
/// [`MulticallClient`]: crate::MulticallClient
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MulticallError {
    /// No deployment is registered for the chain id.
    #[error("no deployment registered for chain id {0}")]
    UnknownChain(u64),
    /// The aggregate call itself failed, at the transport or on-chain.
    #[error("aggregate3 call failed: {0}")]
    Aggregate(#[from] alloy::contract::Error),
    /// The aggregate call returned a different number of results than
    /// calls were submitted.
    #[error("aggregate3 returned {actual} results for {expected} calls")]
    LengthMismatch {
        /// Number of submitted calls.
        expected: usize,
        /// Number of returned results.
        actual: usize,
    },
    /// A sub-call reported failure.
    #[error("call {index} failed: {revert_data}")]
    CallFailed {
        /// Position of the call in the batch.
        index: usize,
        /// Revert data of the call.
        revert_data: Bytes,
    },
    /// A sub-call's return data could not be decoded.
    #[error("failed to decode return data of call {index} ({data}): {source}")]
    Decode {
        /// Position of the call in the batch.
        index: usize,
        /// Raw return data.
        data: Bytes,
        /// Decoding error.
        #[source]
        source: alloy::sol_types::Error,
    },
    /// `getChipInfo` reported failure for a chip.
    #[error("getChipInfo failed for chip {token_id}: {revert_data}")]
    ChipCallFailed {
        /// The chip being queried.
        token_id: U256,
        /// Revert data of the call.
        revert_data: Bytes,
    },
    /// The `getChipInfo` return data of a chip could not be decoded.
    #[error("failed to decode chip info for chip {token_id} ({data}): {source}")]
    ChipDecode {
        /// The chip being queried.
        token_id: U256,
        /// Raw return data.
        data: Bytes,
        /// Decoding error.
        #[source]
        source: alloy::sol_types::Error,
    },
}

impl MulticallError {
    /// Get the chip id the error is attributed to, if any.
    pub const fn token_id(&self) -> Option<U256> {
        match self {
            Self::ChipCallFailed { token_id, .. } | Self::ChipDecode { token_id, .. } => {
                Some(*token_id)
            }
            _ => None,
        }
    }

    /// Attribute a per-call error to the chip queried at its index.
    pub(crate) fn for_chips(self, token_ids: &[U256]) -> Self {
        match self {
            Self::CallFailed { index, revert_data } => match token_ids.get(index) {
                Some(&token_id) => Self::ChipCallFailed { token_id, revert_data },
                None => Self::CallFailed { index, revert_data },
            },
            Self::Decode { index, data, source } => match token_ids.get(index) {
                Some(&token_id) => Self::ChipDecode { token_id, data, source },
                None => Self::Decode { index, data, source },
            },
            other => other,
        }
    }
}
