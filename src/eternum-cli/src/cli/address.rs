//! Address command CLI definitions

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum AddressCommand {
    /// Print the canonical 64-digit form of each address
    Normalize {
        #[arg(required = true, num_args = 1..)]
        addresses: Vec<String>,
    },

    /// Resolve addresses against the known-address registry
    Lookup {
        #[arg(required = true, num_args = 1..)]
        addresses: Vec<String>,

        /// Known-address registry (defaults to <data_dir>/known-addresses.json)
        #[arg(long)]
        known: Option<PathBuf>,
    },
}
