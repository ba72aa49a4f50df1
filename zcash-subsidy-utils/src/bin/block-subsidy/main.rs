//! Prints the block subsidy for a block height on a network.
//!
//! For usage please refer to the program help: `block-subsidy --help`

use color_eyre::eyre::Result;
use structopt::StructOpt;

use zcash_subsidy::parameters::subsidy::block_subsidy;
use zcash_subsidy_utils::init_tracing;

mod args;
use self::args::Args;

/// `block-subsidy` entrypoint.
///
/// Calculates the block subsidy for the height and network in the provided
/// [`Args`], and prints it in zatoshis.
#[allow(clippy::print_stdout)]
fn main() -> Result<()> {
    init_tracing();

    color_eyre::install()?;

    let args = Args::from_args();

    let subsidy = block_subsidy(args.height, &args.network)?;

    println!("{}", subsidy.zatoshis());

    Ok(())
}
