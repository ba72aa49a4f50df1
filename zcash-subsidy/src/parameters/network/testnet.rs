//! Types and implementation for Testnet consensus parameters.

use crate::{
    amount::{Amount, NonNegative},
    block::{Height, HeightDiff},
    parameters::network::{
        subsidy::constants::{
            testnet, BLOSSOM_POW_TARGET_SPACING_RATIO, MAX_BLOCK_SUBSIDY,
            PRE_BLOSSOM_HALVING_INTERVAL, SLOW_START_INTERVAL,
        },
        Network,
    },
};

/// Builder for the [`Parameters`] struct.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ParametersBuilder {
    /// The slow start interval for this network, see
    /// [`Parameters::slow_start_interval`] for more details.
    slow_start_interval: Height,

    /// The Blossom activation height for this network, see
    /// [`Parameters::blossom_activation_height`] for more details.
    blossom_activation_height: Height,

    /// The pre-Blossom halving interval for this network, see
    /// [`Parameters::pre_blossom_halving_interval`] for more details.
    pre_blossom_halving_interval: HeightDiff,
}

impl Default for ParametersBuilder {
    fn default() -> Self {
        Self {
            slow_start_interval: SLOW_START_INTERVAL,
            blossom_activation_height: testnet::BLOSSOM_ACTIVATION_HEIGHT,
            pre_blossom_halving_interval: PRE_BLOSSOM_HALVING_INTERVAL,
        }
    }
}

impl ParametersBuilder {
    /// Sets the slow start interval to be used in the [`Parameters`] being built.
    ///
    /// # Panics
    ///
    /// If the interval is odd, or if it does not evenly divide
    /// [`MAX_BLOCK_SUBSIDY`]: the slow start ramp must reach the base subsidy
    /// exactly, with no rounding drift.
    pub fn with_slow_start_interval(mut self, slow_start_interval: Height) -> Self {
        assert!(
            slow_start_interval.0 % 2 == 0,
            "slow start interval must be divisible by 2",
        );
        assert!(
            slow_start_interval.0 == 0
                || MAX_BLOCK_SUBSIDY % u64::from(slow_start_interval.0) == 0,
            "slow start interval must evenly divide MAX_BLOCK_SUBSIDY",
        );

        self.slow_start_interval = slow_start_interval;
        self
    }

    /// Sets the Blossom activation height to be used in the [`Parameters`] being built.
    pub fn with_blossom_activation_height(mut self, blossom_activation_height: Height) -> Self {
        self.blossom_activation_height = blossom_activation_height;
        self
    }

    /// Sets the pre-Blossom halving interval to be used in the [`Parameters`] being built.
    ///
    /// The post-Blossom halving interval is always the pre-Blossom interval
    /// times [`BLOSSOM_POW_TARGET_SPACING_RATIO`].
    ///
    /// # Panics
    ///
    /// If the halving interval is not positive.
    pub fn with_halving_interval(mut self, halving_interval: HeightDiff) -> Self {
        assert!(halving_interval > 0, "halving interval must be positive");

        self.pre_blossom_halving_interval = halving_interval;
        self
    }

    /// Converts the builder to a [`Parameters`] struct.
    ///
    /// # Panics
    ///
    /// If Blossom would activate before the end of the slow start interval.
    pub fn finish(self) -> Parameters {
        let Self {
            slow_start_interval,
            blossom_activation_height,
            pre_blossom_halving_interval,
        } = self;

        assert!(
            blossom_activation_height >= slow_start_interval,
            "Blossom must activate at or after the end of the slow start interval",
        );

        Parameters {
            slow_start_interval,
            // This calculation is exact, the builder requires an even interval.
            slow_start_shift: Height(slow_start_interval.0 / 2),
            blossom_activation_height,
            pre_blossom_halving_interval,
            post_blossom_halving_interval: pre_blossom_halving_interval
                * HeightDiff::from(BLOSSOM_POW_TARGET_SPACING_RATIO),
        }
    }

    /// Converts the builder to a configured [`Network::Testnet`].
    pub fn to_network(self) -> Network {
        Network::new_configured_testnet(self.finish())
    }
}

/// Network consensus parameters for test networks.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Parameters {
    /// The slow start interval for this network: the initial period where the
    /// block subsidy is gradually incremented.
    slow_start_interval: Height,

    /// The midpoint of the slow start interval, always half
    /// [`Parameters::slow_start_interval`].
    slow_start_shift: Height,

    /// The activation height of the Blossom network upgrade on this network.
    blossom_activation_height: Height,

    /// The halving interval before Blossom activates on this network.
    pre_blossom_halving_interval: HeightDiff,

    /// The halving interval after Blossom activates on this network, always
    /// [`Parameters::pre_blossom_halving_interval`] times
    /// [`BLOSSOM_POW_TARGET_SPACING_RATIO`].
    post_blossom_halving_interval: HeightDiff,
}

impl Default for Parameters {
    /// Returns an instance of the default public testnet [`Parameters`].
    fn default() -> Self {
        ParametersBuilder::default().finish()
    }
}

impl Parameters {
    /// Creates a new [`ParametersBuilder`].
    pub fn build() -> ParametersBuilder {
        ParametersBuilder::default()
    }

    /// Returns true if the instance of [`Parameters`] represents the default public Testnet.
    pub fn is_default_testnet(&self) -> bool {
        self == &Self::default()
    }

    /// Returns the slow start interval for this network.
    pub fn slow_start_interval(&self) -> Height {
        self.slow_start_interval
    }

    /// Returns the midpoint of the slow start interval for this network.
    pub fn slow_start_shift(&self) -> Height {
        self.slow_start_shift
    }

    /// Returns the amount the block subsidy increases per block during the
    /// first half of the slow start interval for this network.
    pub fn slow_start_rate(&self) -> Amount<NonNegative> {
        if self.slow_start_interval.is_min() {
            // With an empty slow start interval there is no ramp at all.
            Amount::zero()
        } else {
            Amount::try_from(MAX_BLOCK_SUBSIDY / u64::from(self.slow_start_interval.0))
                .expect("slow start rate is a fraction of MAX_BLOCK_SUBSIDY, which is valid")
        }
    }

    /// Returns the activation height of the Blossom network upgrade on this network.
    pub fn blossom_activation_height(&self) -> Height {
        self.blossom_activation_height
    }

    /// Returns the halving interval before Blossom on this network.
    pub fn pre_blossom_halving_interval(&self) -> HeightDiff {
        self.pre_blossom_halving_interval
    }

    /// Returns the halving interval after Blossom on this network.
    pub fn post_blossom_halving_interval(&self) -> HeightDiff {
        self.post_blossom_halving_interval
    }
}
