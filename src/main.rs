//! excaclean - strip trailing Excalidraw data from markdown note trees
//!
//! excaclean provides:
//! - A cleaned mirror of a note directory (`duplicate`, `noxk` modes)
//! - A single concatenated blob of all cleaned notes on the clipboard (`concat` mode)

use anyhow::Result;
use clap::Parser;

use excaclean::cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
