//! Command handlers for eternum CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod achievements;
pub mod address;
pub mod configure;
pub mod revenue;
pub mod season_pass;
pub mod victory;

use anyhow::Result;
use eternum::data::KNOWN_ADDRESSES_FILE;
use eternum::KnownAddresses;
use std::path::Path;

use crate::config::Config;
use crate::display::CellStyle;

/// Load the known-address registry.
///
/// An explicit path must load. The default `<data_dir>` file is optional and
/// an empty registry is used when it is absent.
pub fn load_known(config: &Config, explicit: Option<&Path>) -> Result<KnownAddresses> {
    if let Some(path) = explicit {
        return Ok(KnownAddresses::load(path)?);
    }

    let default_path = config.data_path(None, KNOWN_ADDRESSES_FILE);
    if !default_path.exists() {
        tracing::debug!("No known-address registry at {}", default_path.display());
        return Ok(KnownAddresses::default());
    }

    Ok(KnownAddresses::load(&default_path)?)
}

/// Registered name for an address.
///
/// Tables fall back to the shortened address; CSV leaves the cell empty
/// since the address has its own column.
pub fn player_name(known: &KnownAddresses, address: &str, style: CellStyle) -> String {
    match style {
        CellStyle::Display => known.display_name(address),
        CellStyle::Raw => known.name_for(address).unwrap_or_default().to_string(),
    }
}
