//! The networks a subsidy can be calculated on, and their consensus parameters.
//!
//! Consensus parameters are accessed via the [`ParameterSubsidy`] trait, which
//! is implemented by [`Network`]: the production Mainnet uses the hard-coded
//! constants in [`subsidy::constants`], while test networks carry an explicit
//! [`testnet::Parameters`] value, so test fixtures and alternate networks can
//! supply different parameters without code changes.
//!
//! [`ParameterSubsidy`]: subsidy::ParameterSubsidy

use std::{fmt, str::FromStr, sync::Arc};

use thiserror::Error;

use crate::block::Height;

pub mod subsidy;
pub mod testnet;


/// An enum describing the possible network choices.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// The production mainnet.
    #[default]
    Mainnet,

    /// A test network with the given consensus parameters.
    Testnet(Arc<testnet::Parameters>),
}

impl Network {
    /// Creates a new [`Network::Testnet`] with the default Testnet consensus parameters.
    pub fn new_default_testnet() -> Self {
        Self::Testnet(Arc::new(testnet::Parameters::default()))
    }

    /// Creates a new configured [`Network::Testnet`] with the provided parameters.
    pub fn new_configured_testnet(params: testnet::Parameters) -> Self {
        Self::Testnet(Arc::new(params))
    }

    /// Returns an iterator over the default [`Network`] variants.
    pub fn iter() -> impl Iterator<Item = Self> {
        [Self::Mainnet, Self::new_default_testnet()].into_iter()
    }

    /// Returns `true` if this network is a testing network.
    pub fn is_a_test_network(&self) -> bool {
        *self != Network::Mainnet
    }

    /// Returns the activation height of the Blossom network upgrade on this network.
    ///
    /// Blossom halves the block target spacing, so halving intervals and the
    /// per-block subsidy are rescaled from this height onwards.
    pub fn blossom_activation_height(&self) -> Height {
        match self {
            Network::Mainnet => subsidy::constants::mainnet::BLOSSOM_ACTIVATION_HEIGHT,
            Network::Testnet(params) => params.blossom_activation_height(),
        }
    }

    /// Returns a static string representing this kind of network.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Testnet(_) => "Testnet",
        }
    }

    /// Return the lowercase network name.
    pub fn lowercase_name(&self) -> String {
        self.name().to_ascii_lowercase()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = InvalidNetworkError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::new_default_testnet()),
            _ => Err(InvalidNetworkError(string.to_owned())),
        }
    }
}

/// The provided string is not a known network name.
#[derive(Clone, Debug, Error)]
#[error("Invalid network: {0}")]
pub struct InvalidNetworkError(String);
