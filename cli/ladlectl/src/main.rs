//! ladlectl (ladle) - CLI for minting and inspecting ladle IDs.
//!
//! Developer tooling over the `ladle-id` library: mint prefixed or bare
//! IDs from the shell, decode existing ones, and list the kind registry.

use anyhow::Result;
use clap::Parser;

mod commands;

use commands::Cli;

fn main() -> Result<()> {
    Cli::parse().run()
}
