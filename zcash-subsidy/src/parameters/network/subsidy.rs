//! Calculations for the block subsidy.
//!
//! The subsidy schedule has three phases, each a pure function of the block
//! height and the network's consensus parameters:
//!
//! - **slow start**: for the first [`slow_start_interval`] blocks, the subsidy
//!   ramps up linearly from zero to [`MAX_BLOCK_SUBSIDY`], so early blocks
//!   carry a reduced reward.
//! - **pre-Blossom halving**: the base subsidy, halved once per
//!   [`pre_blossom_halving_interval`] blocks elapsed since the middle of the
//!   slow start interval.
//! - **post-Blossom halving**: Blossom halves the block target spacing, so
//!   elapsed pre-Blossom blocks are rescaled by
//!   [`BLOSSOM_POW_TARGET_SPACING_RATIO`] and the halving interval doubles,
//!   keeping halvings at the same absolute times. Each block's share of the
//!   fixed-rate reward shrinks by the same ratio, preserving issuance per
//!   unit time.
//!
//! All arithmetic uses exact integer operations on non-negative operands:
//! the results are consensus-critical and must match independent
//! implementations bit-for-bit.
//!
//! [`slow_start_interval`]: ParameterSubsidy::slow_start_interval
//! [`pre_blossom_halving_interval`]: ParameterSubsidy::pre_blossom_halving_interval
//! [`MAX_BLOCK_SUBSIDY`]: constants::MAX_BLOCK_SUBSIDY
//! [`BLOSSOM_POW_TARGET_SPACING_RATIO`]: constants::BLOSSOM_POW_TARGET_SPACING_RATIO

use crate::{
    amount::{self, Amount, NonNegative},
    block::{Height, HeightDiff},
    parameters::network::Network,
};

pub mod constants;

use constants::{
    BLOSSOM_POW_TARGET_SPACING_RATIO, MAX_BLOCK_SUBSIDY, POST_BLOSSOM_HALVING_INTERVAL,
    PRE_BLOSSOM_HALVING_INTERVAL, SLOW_START_INTERVAL, SLOW_START_RATE, SLOW_START_SHIFT,
};

/// Consensus parameters which are required for block subsidy calculation.
pub trait ParameterSubsidy {
    /// Returns the length of the slow start interval: the initial period
    /// where the block subsidy is gradually incremented.
    /// [What is slow-start mining][slow-mining]
    ///
    /// [slow-mining]: https://z.cash/support/faq/#what-is-slow-start-mining
    fn slow_start_interval(&self) -> Height;

    /// Returns the midpoint of the slow start interval,
    /// `SlowStartShift()` as described in [protocol specification §7.8][7.8]
    ///
    /// [7.8]: https://zips.z.cash/protocol/protocol.pdf#subsidies
    fn slow_start_shift(&self) -> Height;

    /// Returns the amount the block subsidy increases per block during the
    /// first half of the slow start interval,
    /// `SlowStartRate` as described in [protocol specification §7.8][7.8]
    ///
    /// [7.8]: https://zips.z.cash/protocol/protocol.pdf#subsidies
    fn slow_start_rate(&self) -> Amount<NonNegative>;

    /// Returns the halving interval before Blossom
    fn pre_blossom_halving_interval(&self) -> HeightDiff;

    /// Returns the halving interval after Blossom
    fn post_blossom_halving_interval(&self) -> HeightDiff;

    /// Returns the first height of the first halving,
    /// as described in [protocol specification §7.10][7.10]
    ///
    /// [7.10]: <https://zips.z.cash/protocol/protocol.pdf#fundingstreams>
    fn height_for_first_halving(&self) -> Height;
}

/// Network methods related to the block subsidy.
impl ParameterSubsidy for Network {
    fn slow_start_interval(&self) -> Height {
        match self {
            Network::Mainnet => SLOW_START_INTERVAL,
            Network::Testnet(params) => params.slow_start_interval(),
        }
    }

    fn slow_start_shift(&self) -> Height {
        match self {
            Network::Mainnet => SLOW_START_SHIFT,
            Network::Testnet(params) => params.slow_start_shift(),
        }
    }

    fn slow_start_rate(&self) -> Amount<NonNegative> {
        match self {
            Network::Mainnet => Amount::new(SLOW_START_RATE),
            Network::Testnet(params) => params.slow_start_rate(),
        }
    }

    fn pre_blossom_halving_interval(&self) -> HeightDiff {
        match self {
            Network::Mainnet => PRE_BLOSSOM_HALVING_INTERVAL,
            Network::Testnet(params) => params.pre_blossom_halving_interval(),
        }
    }

    fn post_blossom_halving_interval(&self) -> HeightDiff {
        match self {
            Network::Mainnet => POST_BLOSSOM_HALVING_INTERVAL,
            Network::Testnet(params) => params.post_blossom_halving_interval(),
        }
    }

    fn height_for_first_halving(&self) -> Height {
        height_for_halving(1, self).expect("first halving height should be available")
    }
}

/// Block subsidy errors.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum SubsidyError {
    #[error("invalid amount")]
    InvalidAmount(#[from] amount::Error),
}

/// The halving index for a block height and network.
///
/// `Halving(height)`, as described in [protocol specification §7.8][7.8]
///
/// [7.8]: https://zips.z.cash/protocol/protocol.pdf#subsidies
pub fn num_halvings(height: Height, network: &Network) -> u32 {
    let slow_start_shift = network.slow_start_shift();
    let blossom_height = network.blossom_activation_height();

    let halving_index = if height < slow_start_shift {
        0
    } else if height < blossom_height {
        let pre_blossom_height = height - slow_start_shift;
        pre_blossom_height / network.pre_blossom_halving_interval()
    } else {
        // Elapsed pre-Blossom blocks are rescaled into post-Blossom block
        // units, so all intermediate quantities stay integral.
        let pre_blossom_height = blossom_height - slow_start_shift;
        let scaled_pre_blossom_height =
            pre_blossom_height * HeightDiff::from(BLOSSOM_POW_TARGET_SPACING_RATIO);

        let post_blossom_height = height - blossom_height;

        (scaled_pre_blossom_height + post_blossom_height) / network.post_blossom_halving_interval()
    };

    halving_index
        .try_into()
        .expect("already checked for negatives")
}

/// The divisor used for halvings.
///
/// `1 << Halving(height)`, as described in [protocol specification §7.8][7.8]
///
/// [7.8]: https://zips.z.cash/protocol/protocol.pdf#subsidies
///
/// Returns `None` if the divisor would overflow a `u64`.
pub fn halving_divisor(height: Height, network: &Network) -> Option<u64> {
    // Some far-future shifts can be more than 63 bits
    1u64.checked_shl(num_halvings(height, network))
}

/// The first block height of the halving at the provided halving index for a network.
///
/// The inverse of `Halving(height)`, as described in
/// [protocol specification §7.8][7.8]
///
/// [7.8]: https://zips.z.cash/protocol/protocol.pdf#subsidies
pub fn height_for_halving(halving: u32, network: &Network) -> Option<Height> {
    if halving == 0 {
        return Some(Height(0));
    }

    let slow_start_shift = HeightDiff::from(network.slow_start_shift().0);
    let blossom_height = HeightDiff::from(network.blossom_activation_height().0);
    let spacing_ratio = HeightDiff::from(BLOSSOM_POW_TARGET_SPACING_RATIO);
    let halving_index = HeightDiff::from(halving);

    let unscaled_height = halving_index.checked_mul(network.pre_blossom_halving_interval())?;
    let pre_blossom_candidate = unscaled_height.checked_add(slow_start_shift)?;

    let height = if pre_blossom_candidate < blossom_height {
        // The halving happens before Blossom activates.
        pre_blossom_candidate
    } else {
        // Solve `(blossom - shift) * ratio + (height - blossom) = unscaled * ratio`
        // for the height where the scaled halving time reaches the halving index.
        blossom_height
            .checked_add(
                unscaled_height
                    .checked_sub(blossom_height)?
                    .checked_mul(spacing_ratio)?,
            )?
            .checked_add(slow_start_shift.checked_mul(spacing_ratio)?)?
    };

    let height = u32::try_from(height).ok()?;
    height.try_into().ok()
}

/// `BlockSubsidy(height)` as described in [protocol specification §7.8][7.8]
///
/// [7.8]: https://zips.z.cash/protocol/protocol.pdf#subsidies
pub fn block_subsidy(
    height: Height,
    network: &Network,
) -> Result<Amount<NonNegative>, SubsidyError> {
    // The slow start ramp is a plain lookup, it never evaluates halving logic.
    if height < network.slow_start_interval() {
        return slow_start_subsidy(height, network);
    }

    // If the halving divisor is larger than u64::MAX, the block subsidy is zero,
    // because amounts fit in an i64.
    //
    // Note: bitcoind incorrectly wraps here, which restarts large block rewards.
    let Some(halving_div) = halving_divisor(height, network) else {
        return Ok(Amount::zero());
    };

    if height < network.blossom_activation_height() {
        Ok(Amount::try_from(MAX_BLOCK_SUBSIDY / halving_div)?)
    } else {
        // Post-Blossom blocks arrive twice as often, so each block carries
        // half the fixed-rate reward, preserving issuance per unit time.
        let scaled_max_block_subsidy =
            MAX_BLOCK_SUBSIDY / u64::from(BLOSSOM_POW_TARGET_SPACING_RATIO);

        // in future halvings, this calculation might not be exact
        // Amount division is implemented using integer division,
        // which truncates (rounds down) the result, as specified
        Ok(Amount::try_from(scaled_max_block_subsidy / halving_div)?)
    }
}

/// The block subsidy for a height in the slow start interval.
///
/// The subsidy ramps up linearly: the first half of the interval uses
/// `SlowStartRate * height`, so the genesis-adjacent blocks have a zero
/// subsidy, and the second half uses `SlowStartRate * (height + 1)`, one ramp
/// step ahead, so the last slow start block reaches `MAX_BLOCK_SUBSIDY`
/// exactly.
fn slow_start_subsidy(
    height: Height,
    network: &Network,
) -> Result<Amount<NonNegative>, SubsidyError> {
    let ramp_position = if height < network.slow_start_shift() {
        u64::from(height.0)
    } else {
        u64::from(height.0) + 1
    };

    Ok((network.slow_start_rate() * ramp_position)?)
}
