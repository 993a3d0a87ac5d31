//! Batched contract reads for the VSL.
//!
//! [`MulticallClient`] packs many read-only contract calls into a single
//! `Multicall3.aggregate3` `eth_call`, executed as of a given block, and
//! unpacks the per-call results. A failing or undecodable sub-call fails
//! the whole batch; partial results are never returned.
//!
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use alloy::{eips::BlockId, primitives::U256, providers::ProviderBuilder};
//! use vsl_constants::VslConstants;
//! use vsl_multicall::MulticallClient;
//!
//! let constants = VslConstants::from_env()?;
//! let provider = ProviderBuilder::new().connect_http("https://rpc.vsl.example".parse()?);
//! let client = MulticallClient::from_constants(provider, &constants);
//!
//! let chips = client.get_chips_info(BlockId::latest(), &[U256::from(1), U256::from(2)]).await?;
//! assert_eq!(chips.len(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod chips;

mod client;
pub use client::MulticallClient;

mod error;
pub use error::MulticallError;
