//! CLI argument definitions for eternum
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod achievements;
mod address;
mod core;
mod victory;

pub use achievements::AchievementsCommand;
pub use address::AddressCommand;
pub use core::{Cli, Commands, OutputFormat};
pub use victory::VictoryArgs;
