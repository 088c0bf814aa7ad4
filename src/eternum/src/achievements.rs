//! Achievement reward splitting.
//!
//! Two fixed pools are paid out from achievement data:
//! - a LORDS pool split in proportion to each player's earned points
//! - a STRK pool split evenly among players that completed a given achievement

use crate::address::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A player's earned points, input to the proportional split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementEntry {
    pub address: String,
    pub earnings: f64,
}

impl AchievementEntry {
    pub fn new(address: impl Into<String>, earnings: f64) -> Self {
        Self {
            address: address.into(),
            earnings,
        }
    }

    fn effective_earnings(&self) -> f64 {
        if self.earnings.is_finite() && self.earnings >= 0.0 {
            self.earnings
        } else {
            tracing::warn!(
                address = %self.address,
                earnings = self.earnings,
                "ignoring invalid achievement earnings"
            );
            0.0
        }
    }
}

/// Achievement export row with the list of completed achievement ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementPlayer {
    pub address: String,
    pub earnings: f64,
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub completeds: Vec<String>,
}

impl AchievementPlayer {
    pub fn has_completed(&self, achievement_id: &str) -> bool {
        self.completeds.iter().any(|c| c == achievement_id)
    }
}

impl From<AchievementPlayer> for AchievementEntry {
    fn from(player: AchievementPlayer) -> Self {
        AchievementEntry::new(player.address, player.earnings)
    }
}

/// Row of the points export (`player_id`, `total_points`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsRecord {
    pub player_id: String,
    pub total_points: f64,
}

impl From<PointsRecord> for AchievementEntry {
    fn from(record: PointsRecord) -> Self {
        AchievementEntry::new(record.player_id, record.total_points)
    }
}

/// `{ "address": ... }` row of a qualifying-address list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifyingEntry {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRewardRecord {
    pub address: String,
    pub earnings: f64,
    /// Share of the total earnings, 0..=100
    pub percentage: f64,
    pub lords_reward: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EqualSplitRewardRecord {
    pub address: String,
    pub reward: f64,
}

/// Split `pool` across entries in proportion to their earnings.
///
/// Returns an empty list when there is nothing to divide by.
pub fn compute_proportional_rewards(
    entries: &[AchievementEntry],
    pool: f64,
) -> Vec<AchievementRewardRecord> {
    let earnings: Vec<f64> = entries.iter().map(|e| e.effective_earnings()).collect();
    let total_earnings: f64 = earnings.iter().sum();

    if total_earnings <= 0.0 {
        return Vec::new();
    }

    entries
        .iter()
        .zip(earnings)
        .map(|(entry, earned)| {
            let fraction = earned / total_earnings;
            AchievementRewardRecord {
                address: entry.address.clone(),
                earnings: entry.earnings,
                percentage: fraction * 100.0,
                lords_reward: fraction * pool,
            }
        })
        .collect()
}

/// Give every qualifying address the same slice of `pool`
pub fn compute_equal_split_rewards(
    qualifying_addresses: &[String],
    pool: f64,
) -> Vec<EqualSplitRewardRecord> {
    if qualifying_addresses.is_empty() {
        return Vec::new();
    }

    let reward = pool / qualifying_addresses.len() as f64;
    qualifying_addresses
        .iter()
        .map(|address| EqualSplitRewardRecord {
            address: address.clone(),
            reward,
        })
        .collect()
}

/// Addresses of players that completed `achievement_id`.
///
/// First-seen order is kept and duplicates (by normalized address) dropped.
/// Malformed addresses are compared verbatim.
pub fn qualifying_addresses(players: &[AchievementPlayer], achievement_id: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    players
        .iter()
        .filter(|p| p.has_completed(achievement_id))
        .filter(|p| {
            let key = normalize(&p.address).unwrap_or_else(|e| {
                tracing::warn!("{}", e);
                p.address.clone()
            });
            seen.insert(key)
        })
        .map(|p| p.address.clone())
        .collect()
}

/// Flatten a qualifying-address list, dropping duplicate addresses
pub fn dedup_qualifying(entries: Vec<QualifyingEntry>) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .map(|e| e.address)
        .filter(|address| seen.insert(normalize(address).unwrap_or_else(|_| address.clone())))
        .collect()
}
