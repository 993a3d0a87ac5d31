//! Types for the VSL smart contracts.
//!
//! Bindings for the staking, chips, billing, governance token, settlement
//! and network params contracts, as well as `Multicall3`. Each binding
//! exposes an instance type for calls and transactions via an alloy
//! provider, per-call structs, and per-event structs carrying their
//! signature hash.
//!
//! The [`signatures`] module contains the method names, event names and
//! event signature hashes of every contract, and [`Events`] decodes the
//! events consumed downstream from raw logs.

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
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod bindings;
pub use bindings::{
    Billing, Chips, GovernanceToken, Multicall3, NetworkParams, Settlement, Staking,
};

mod chip;
pub use chip::ChipInfo;

mod events;
pub use events::Events;

pub mod signatures;
