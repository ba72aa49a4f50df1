//! Randomised property tests for the block subsidy schedule.

use proptest::prelude::*;

use crate::{
    amount::{Amount, NonNegative},
    block::Height,
    parameters::{
        subsidy::{
            block_subsidy,
            constants::{MAX_BLOCK_SUBSIDY, SLOW_START_INTERVAL},
            num_halvings,
        },
        Network,
    },
};

proptest! {
    /// The subsidy is a pure function of the height and network parameters.
    #[test]
    fn block_subsidy_is_deterministic(height in any::<Height>()) {
        for network in Network::iter() {
            let subsidy = block_subsidy(height, &network)
                .expect("subsidy calculation should not fail");
            let subsidy_again = block_subsidy(height, &network)
                .expect("subsidy calculation should not fail");

            prop_assert_eq!(subsidy, subsidy_again);
        }
    }

    /// No block's subsidy ever exceeds the base block subsidy.
    #[test]
    fn block_subsidy_is_at_most_the_base_subsidy(height in any::<Height>()) {
        for network in Network::iter() {
            let max_subsidy: Amount<NonNegative> = MAX_BLOCK_SUBSIDY
                .try_into()
                .expect("MAX_BLOCK_SUBSIDY is a valid amount");

            let subsidy = block_subsidy(height, &network)
                .expect("subsidy calculation should not fail");

            prop_assert!(subsidy <= max_subsidy);
        }
    }

    /// After the slow start interval, the subsidy never increases with height.
    #[test]
    fn block_subsidy_is_non_increasing_after_slow_start(
        height in (SLOW_START_INTERVAL.0..=Height::MAX_AS_U32).prop_map(Height),
        advance in 0..10_000_000_i64,
    ) {
        for network in Network::iter() {
            let later_height = (height + advance).unwrap_or(Height::MAX);

            let subsidy = block_subsidy(height, &network)
                .expect("subsidy calculation should not fail");
            let later_subsidy = block_subsidy(later_height, &network)
                .expect("subsidy calculation should not fail");

            prop_assert!(later_subsidy <= subsidy);
        }
    }

    /// During the slow start interval, the subsidy never decreases with height.
    #[test]
    fn slow_start_subsidy_is_non_decreasing(
        height in (0..SLOW_START_INTERVAL.0).prop_map(Height),
    ) {
        for network in Network::iter() {
            let next_height = height.next().expect("below the maximum height");

            let subsidy = block_subsidy(height, &network)
                .expect("subsidy calculation should not fail");
            let next_subsidy = block_subsidy(next_height, &network)
                .expect("subsidy calculation should not fail");

            prop_assert!(subsidy <= next_subsidy);
        }
    }

    /// Once 64 or more halvings have elapsed, issuance has permanently stopped.
    #[test]
    fn block_subsidy_is_zero_after_64_halvings(
        height in (120_000_000..=Height::MAX_AS_U32).prop_map(Height),
    ) {
        for network in Network::iter() {
            prop_assert!(num_halvings(height, &network) >= 64);

            let subsidy = block_subsidy(height, &network)
                .expect("subsidy calculation should not fail");

            prop_assert_eq!(Amount::<NonNegative>::zero(), subsidy);
        }
    }
}
