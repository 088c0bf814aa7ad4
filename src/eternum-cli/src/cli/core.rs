//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::achievements::AchievementsCommand;
use super::address::AddressCommand;
use super::victory::VictoryArgs;

/// Output format for report commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Parser)]
#[command(name = "eternum")]
#[command(about = "Eternum season rewards and revenue reports", long_about = None)]
pub struct Cli {
    /// Saved CoinGecko price response (falls back to configured prices)
    #[arg(long, global = true, env = "ETERNUM_PRICES")]
    pub prices: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Victory prize distribution per player
    #[command(visible_alias = "v")]
    Victory(VictoryArgs),

    /// Achievement pool splits (proportional and equal)
    #[command(visible_alias = "a")]
    Achievements {
        #[command(subcommand)]
        command: AchievementsCommand,
    },

    /// Season revenue breakdown by fee category
    #[command(visible_alias = "r")]
    Revenue {
        /// Revenue table JSON (defaults to the built-in season one table)
        #[arg(long)]
        table: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Season pass value estimated from marketplace sales
    #[command(visible_alias = "sp")]
    SeasonPass {
        /// Marketplace sales JSON (defaults to <data_dir>/marketplace-sales.json)
        #[arg(long)]
        sales: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Address utilities (normalize, lookup)
    Address {
        #[command(subcommand)]
        command: AddressCommand,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Directory holding the JSON datasets
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Default LORDS/USD price
        #[arg(long)]
        lords_price: Option<f64>,

        /// Default STRK/USD price
        #[arg(long)]
        strk_price: Option<f64>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
