//! Standalone calculation of Zcash block subsidies. 🪙
//!
//! The block subsidy is the newly issued coin amount awarded for mining a
//! block, as described in [protocol specification §7.8][7.8]. It is a pure
//! function of the block height and the network's consensus parameters:
//! an initial "slow start" ramp, then a fixed base subsidy that halves at
//! regular intervals, rescaled by the Blossom upgrade's faster block times.
//!
//! [7.8]: https://zips.z.cash/protocol/protocol.pdf#subsidies
#![deny(missing_docs)]

#[macro_use]
extern crate serde;

pub mod amount;
pub mod block;
pub mod parameters;
