//! # eternum
//!
//! Eternum season rewards library - victory prize aggregation, achievement
//! splits, and revenue accounting.
//!
//! This library provides functionality to:
//! - Compute per-member LORDS/STRK rewards from a ranked tribe roster
//! - Split fixed achievement pools proportionally or evenly
//! - Normalize Starknet addresses and resolve known names
//! - Value season passes from marketplace sales
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let roster = eternum::load_roster(Path::new("public/data/eternum-social-export.json"))?;
//! let policy = eternum::RewardPolicy::default();
//!
//! for record in eternum::compute_member_rewards(&roster.tribes, &policy) {
//!     println!("{}: {:.2} LORDS", record.address, record.total_lords_reward);
//! }
//! # Ok(())
//! # }
//! ```

pub mod achievements;
pub mod address;
pub mod data;
pub mod leaderboard;
pub mod policy;
pub mod prices;
pub mod registry;
pub mod revenue;
pub mod rewards;
pub mod roster;
pub mod season_pass;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use achievements::{
    compute_equal_split_rewards, compute_proportional_rewards, dedup_qualifying,
    qualifying_addresses, AchievementEntry, AchievementPlayer, AchievementRewardRecord,
    EqualSplitRewardRecord, PointsRecord, QualifyingEntry,
};
#[doc(inline)]
pub use address::{normalize, shorten, Address, AddressError};
#[doc(inline)]
pub use data::{
    load_achievement_entries, load_achievement_players, load_qualifying, load_revenue_table,
    load_roster, load_sales, DataError,
};
#[doc(inline)]
pub use leaderboard::{build_rows, filter_rows, sort_rows, PlayerRow, SortKey, SortOrder};
#[doc(inline)]
pub use policy::{PolicyError, RankShare, RewardPolicy, SEASON_ONE_RANK_SHARES};
#[doc(inline)]
pub use prices::{PriceError, PriceSnapshot};
#[doc(inline)]
pub use registry::KnownAddresses;
#[doc(inline)]
pub use revenue::{RevenueEntry, RevenueSplit};
#[doc(inline)]
pub use rewards::{
    allocate_prizes, compute_member_rewards, compute_tribe_rewards, PlayerRewardRecord,
    RewardTotals,
};
#[doc(inline)]
pub use roster::{GameInfo, Player, RosterExport, TokenAmounts, Tribe, TribeOwner, TribePrize};
#[doc(inline)]
pub use season_pass::{hex_to_lords, MarketplaceSale, SaleError, SeasonPassStats, ValueScenario};
