//! Constants for block subsidy calculation.
//!
//! These constants are the system's true external interface: any deviation
//! from the network's agreed values breaks interoperability with independent
//! implementations.

use crate::{
    amount::COIN,
    block::{Height, HeightDiff},
};

/// An initial period from Genesis to this Height where the block subsidy is
/// gradually incremented. [What is slow-start mining][slow-mining]
///
/// [slow-mining]: https://z.cash/support/faq/#what-is-slow-start-mining
pub const SLOW_START_INTERVAL: Height = Height(20_000);

/// `SlowStartShift()` as described in [protocol specification §7.8][7.8]
///
/// [7.8]: https://zips.z.cash/protocol/protocol.pdf#subsidies
///
/// This calculation is exact, because `SLOW_START_INTERVAL` is divisible by 2.
pub const SLOW_START_SHIFT: Height = Height(SLOW_START_INTERVAL.0 / 2);

/// The amount the block subsidy increases per block during the first half of
/// the slow start interval, `SlowStartRate` as described in
/// [protocol specification §7.8][7.8]
///
/// [7.8]: https://zips.z.cash/protocol/protocol.pdf#subsidies
///
/// This calculation is exact: `SLOW_START_INTERVAL` needs to evenly divide
/// `MAX_BLOCK_SUBSIDY`, so the ramp reaches the base subsidy with no
/// rounding drift.
pub const SLOW_START_RATE: i64 = MAX_BLOCK_SUBSIDY as i64 / SLOW_START_INTERVAL.0 as i64;

/// The largest block subsidy, used before the first halving.
///
/// We use `25 / 2` instead of `12.5`, so that we can calculate the correct
/// value without using floating-point.
/// This calculation is exact, because COIN is divisible by 2, and the division
/// is done last.
pub const MAX_BLOCK_SUBSIDY: u64 = ((25 * COIN) / 2) as u64;

/// Used as a multiplier to get the new halving interval after Blossom.
///
/// Calculated as `PRE_BLOSSOM_POW_TARGET_SPACING / POST_BLOSSOM_POW_TARGET_SPACING`
/// (`150 / 75`) in the Zcash specification.
pub const BLOSSOM_POW_TARGET_SPACING_RATIO: u32 = 2;

/// Halving is at about every 4 years, before Blossom block time is 150 seconds.
///
/// `(60 * 60 * 24 * 365 * 4) / 150 = 840960`
pub const PRE_BLOSSOM_HALVING_INTERVAL: HeightDiff = 840_000;

/// After Blossom the block time is reduced to 75 seconds but halving period
/// should remain around 4 years.
pub const POST_BLOSSOM_HALVING_INTERVAL: HeightDiff =
    PRE_BLOSSOM_HALVING_INTERVAL * BLOSSOM_POW_TARGET_SPACING_RATIO as HeightDiff;

/// Mainnet-specific constants for block subsidies.
pub mod mainnet {
    use super::Height;

    /// The activation height of the Blossom network upgrade on Mainnet.
    pub const BLOSSOM_ACTIVATION_HEIGHT: Height = Height(653_600);
}

/// Testnet-specific constants for block subsidies.
pub mod testnet {
    use super::Height;

    /// The activation height of the Blossom network upgrade on Testnet.
    pub const BLOSSOM_ACTIVATION_HEIGHT: Height = Height(584_000);
}
