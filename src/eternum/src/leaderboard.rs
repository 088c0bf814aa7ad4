//! Player leaderboard view over computed rewards
//!
//! Flattens tribes into rows carrying both the player and the tribe context,
//! then filters and sorts them for display. Ordering lives here, not in the
//! reward computation.

use crate::policy::RewardPolicy;
use crate::rewards::{compute_tribe_rewards, PlayerRewardRecord};
use crate::roster::{Player, Tribe, TribePrize};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRow {
    #[serde(flatten)]
    pub player: Player,
    pub tribe_name: String,
    pub tribe_rank: u32,
    pub tribe_prize: TribePrize,
    pub reward: PlayerRewardRecord,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Lords,
    Strk,
    Points,
    Name,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Lords => "lords",
            SortKey::Strk => "strk",
            SortKey::Points => "points",
            SortKey::Name => "name",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lords" => Ok(SortKey::Lords),
            "strk" => Ok(SortKey::Strk),
            "points" => Ok(SortKey::Points),
            "name" => Ok(SortKey::Name),
            _ => Err(format!("Invalid sort key: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("Invalid sort order: {}", s)),
        }
    }
}

/// Compute rewards and flatten every tribe member into a row
pub fn build_rows(tribes: &[Tribe], policy: &RewardPolicy) -> Vec<PlayerRow> {
    let mut rows = Vec::new();
    for tribe in tribes {
        let records = compute_tribe_rewards(tribe, policy);
        for (player, reward) in tribe.members.iter().zip(records) {
            rows.push(PlayerRow {
                player: player.clone(),
                tribe_name: tribe.name.clone(),
                tribe_rank: tribe.rank,
                tribe_prize: tribe.prize,
                reward,
            });
        }
    }
    rows
}

/// Keep rows whose player name, address or tribe name contains `search`
/// (case-insensitive). An empty search keeps everything.
pub fn filter_rows(rows: Vec<PlayerRow>, search: &str) -> Vec<PlayerRow> {
    let search = search.trim().to_lowercase();
    if search.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| {
            row.player.name.to_lowercase().contains(&search)
                || row.player.address.to_lowercase().contains(&search)
                || row.tribe_name.to_lowercase().contains(&search)
        })
        .collect()
}

fn compare(a: &PlayerRow, b: &PlayerRow, key: SortKey) -> Ordering {
    match key {
        SortKey::Lords => a
            .reward
            .total_lords_reward
            .total_cmp(&b.reward.total_lords_reward),
        SortKey::Strk => a
            .reward
            .total_strk_reward
            .total_cmp(&b.reward.total_strk_reward),
        SortKey::Points => a.player.points.total_cmp(&b.player.points),
        SortKey::Name => a
            .player
            .name
            .to_lowercase()
            .cmp(&b.player.name.to_lowercase()),
    }
}

/// Stable sort by `key` in `order`
pub fn sort_rows(rows: &mut [PlayerRow], key: SortKey, order: SortOrder) {
    rows.sort_by(|a, b| match order {
        SortOrder::Asc => compare(a, b, key),
        SortOrder::Desc => compare(b, a, key),
    });
}
