//! block-subsidy arguments
//!
//! For usage please refer to the program help: `block-subsidy --help`

#![deny(missing_docs)]

use structopt::StructOpt;

use zcash_subsidy::{block::Height, parameters::Network};

/// block-subsidy arguments
#[derive(Debug, StructOpt)]
pub struct Args {
    /// The block height to calculate the subsidy for.
    pub height: Height,

    /// The network the block height belongs to.
    #[structopt(default_value = "mainnet", short, long)]
    pub network: Network,
}
