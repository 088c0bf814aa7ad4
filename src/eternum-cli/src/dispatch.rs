//! Command dispatch functions
//!
//! Breaks up the main match statement into focused dispatch functions.

use anyhow::Result;
use eternum::PriceSnapshot;

use crate::cli::*;
use crate::commands;
use crate::config::Config;

/// Dispatch achievements subcommands
pub fn dispatch_achievements(
    config: &Config,
    prices: &PriceSnapshot,
    command: AchievementsCommand,
) -> Result<()> {
    commands::achievements::handle(config, prices, command)
}

/// Dispatch address subcommands
pub fn dispatch_address(config: &Config, command: AddressCommand) -> Result<()> {
    match command {
        AddressCommand::Normalize { addresses } => commands::address::normalize_all(&addresses),

        AddressCommand::Lookup { addresses, known } => {
            commands::address::lookup(config, &addresses, known.as_deref())
        }
    }
}
