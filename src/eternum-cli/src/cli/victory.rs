//! Victory command CLI definitions

use clap::Args;
use eternum::{SortKey, SortOrder};
use std::path::PathBuf;

use super::core::OutputFormat;

#[derive(Args)]
pub struct VictoryArgs {
    /// Roster export JSON (defaults to <data_dir>/eternum-social-export.json)
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Filter by player name, address, or tribe
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort by: lords, strk, points, name
    #[arg(long, default_value = "lords")]
    pub sort: SortKey,

    /// Sort order: asc, desc
    #[arg(long, default_value = "desc")]
    pub order: SortOrder,

    /// Show at most this many players
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Re-derive tribe prizes from rank and the configured victory pool
    #[arg(long)]
    pub recompute_prizes: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}
