//! Achievements command CLI definitions

use clap::Subcommand;
use std::path::PathBuf;

use super::core::OutputFormat;

#[derive(Subcommand)]
pub enum AchievementsCommand {
    /// Split the LORDS achievement pool by earned points
    Proportional {
        /// Achievement or points export JSON
        /// (defaults to <data_dir>/cartridge-points.json)
        #[arg(long)]
        points: Option<PathBuf>,

        /// Pool size in LORDS (defaults to the configured achievement pool)
        #[arg(long)]
        pool: Option<f64>,

        /// Known-address registry for display names
        #[arg(long)]
        known: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Split the STRK agent pool evenly among qualifying addresses
    Equal {
        /// Qualifying-address list JSON
        /// (defaults to <data_dir>/daydreams-agents.json)
        #[arg(long, conflicts_with = "players")]
        qualifying: Option<PathBuf>,

        /// Achievement players JSON; qualify by completed achievement instead
        #[arg(long, requires = "achievement")]
        players: Option<PathBuf>,

        /// Achievement identifier a player must have completed
        #[arg(long, requires = "players")]
        achievement: Option<String>,

        /// Pool size in STRK (defaults to the configured agent pool)
        #[arg(long)]
        pool: Option<f64>,

        /// Known-address registry for display names
        #[arg(long)]
        known: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}
