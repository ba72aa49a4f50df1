//! Consensus parameters for each Zcash network.

pub mod network;

pub use network::{subsidy, testnet, InvalidNetworkError, Network};
