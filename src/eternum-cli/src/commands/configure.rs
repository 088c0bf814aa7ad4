//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting eternum CLI defaults.

use crate::config::Config;
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `data_dir` - Directory holding the JSON datasets
/// * `lords_price` / `strk_price` - Default USD prices
/// * `show` - If true, show current configuration
pub fn handle(
    data_dir: Option<PathBuf>,
    lords_price: Option<f64>,
    strk_price: Option<f64>,
    show: bool,
) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if apply(&mut config, data_dir, lords_price, strk_price)? {
        config.save()?;
        println!("Configuration updated");
        if let Ok(path) = Config::config_path() {
            println!("Config saved to: {}", path.display());
        }
    } else {
        show_usage();
    }

    Ok(())
}

/// Apply settings; returns whether anything changed
fn apply(
    config: &mut Config,
    data_dir: Option<PathBuf>,
    lords_price: Option<f64>,
    strk_price: Option<f64>,
) -> Result<bool> {
    for (name, price) in [("LORDS", lords_price), ("STRK", strk_price)] {
        if let Some(price) = price {
            if !price.is_finite() || price < 0.0 {
                bail!("{} price must be a non-negative number, got {}", name, price);
            }
        }
    }

    let changed = data_dir.is_some() || lords_price.is_some() || strk_price.is_some();
    if data_dir.is_some() {
        config.data_dir = data_dir;
    }
    if lords_price.is_some() {
        config.lords_price = lords_price;
    }
    if strk_price.is_some() {
        config.strk_price = strk_price;
    }
    Ok(changed)
}

/// Display current configuration
fn show_config(config: &Config) {
    println!("Data directory: {}", config.data_dir().display());
    match config.lords_price {
        Some(price) => println!("LORDS price: ${}", price),
        None => println!("LORDS price: not set"),
    }
    match config.strk_price {
        Some(price) => println!("STRK price: ${}", price),
        None => println!("STRK price: not set"),
    }

    let policy = &config.policy;
    println!(
        "Tribe split: {:.0}% members / {:.0}% owner",
        policy.member_ratio * 100.0,
        policy.owner_ratio * 100.0
    );
    println!("Achievement pool: {} LORDS", policy.achievement_pool);
    println!("Agent pool: {} STRK", policy.agent_pool);
    println!(
        "Victory pool: {} LORDS + {} STRK",
        policy.victory_pool.lords, policy.victory_pool.strk
    );

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: eternum configure --data-dir DIR");
    println!("   or: eternum configure --lords-price 0.02 --strk-price 1.15");
    println!("   or: eternum configure --show");
    println!();
    println!("Reward pools and split ratios are set in the [policy] table");
    println!("of the config file.");
}
