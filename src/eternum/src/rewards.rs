//! Victory prize aggregation.
//!
//! Each ranked tribe arrives with a prize already allocated. Within a tribe
//! the member pool (`member_ratio` of the prize) is split by point share,
//! and the one owner (see [`Tribe::owner_index`]) additionally collects
//! `owner_ratio` of the prize. Both currencies are handled independently
//! and nothing is rounded here.

use crate::policy::RewardPolicy;
use crate::roster::{TokenAmounts, Tribe};
use serde::{Deserialize, Serialize};

/// Computed reward for one tribe member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRewardRecord {
    pub address: String,
    /// Fraction of the tribe's point total, 0.0..=1.0
    pub points_share: f64,
    pub member_share: TokenAmounts,
    pub owner_bonus: TokenAmounts,
    /// Whether this member collected the tribe's owner bonus
    #[serde(default)]
    pub is_owner: bool,
    pub total_lords_reward: f64,
    pub total_strk_reward: f64,
}

impl PlayerRewardRecord {
    pub fn total(&self) -> TokenAmounts {
        TokenAmounts::new(self.total_lords_reward, self.total_strk_reward)
    }
}

/// Rewards for every member of one tribe, in member order
pub fn compute_tribe_rewards(tribe: &Tribe, policy: &RewardPolicy) -> Vec<PlayerRewardRecord> {
    let points: Vec<f64> = tribe.members.iter().map(|m| m.effective_points()).collect();
    let total_points: f64 = points.iter().sum();

    if total_points <= 0.0 && !tribe.members.is_empty() {
        tracing::debug!(
            tribe = %tribe.name,
            rank = tribe.rank,
            "tribe has no points, member shares are zero"
        );
    }

    let member_pool = tribe.prize.scale(policy.member_ratio);
    let owner_pool = tribe.prize.scale(policy.owner_ratio);
    let owner = tribe.owner_index();

    tribe
        .members
        .iter()
        .zip(points)
        .enumerate()
        .map(|(i, (member, points))| {
            let points_share = if total_points > 0.0 {
                points / total_points
            } else {
                0.0
            };
            let member_share = member_pool.scale(points_share);
            let is_owner = owner == Some(i);
            let owner_bonus = if is_owner {
                owner_pool
            } else {
                TokenAmounts::ZERO
            };
            let total = member_share + owner_bonus;

            PlayerRewardRecord {
                address: member.address.clone(),
                points_share,
                member_share,
                owner_bonus,
                is_owner,
                total_lords_reward: total.lords,
                total_strk_reward: total.strk,
            }
        })
        .collect()
}

/// Rewards for every member of every tribe.
///
/// Records follow tribe order then member order, but callers must not rely
/// on any ordering; sorting is a display concern.
pub fn compute_member_rewards(tribes: &[Tribe], policy: &RewardPolicy) -> Vec<PlayerRewardRecord> {
    let records: Vec<PlayerRewardRecord> = tribes
        .iter()
        .flat_map(|tribe| compute_tribe_rewards(tribe, policy))
        .collect();

    tracing::debug!(
        tribes = tribes.len(),
        records = records.len(),
        "computed member rewards"
    );

    records
}

/// Overwrite every tribe's prize from its rank and the policy's victory pool
pub fn allocate_prizes(tribes: &mut [Tribe], policy: &RewardPolicy) {
    for tribe in tribes.iter_mut() {
        tribe.prize = policy.prize_for_rank(tribe.rank, policy.victory_pool);
    }
}

/// Sum of all tribe prizes (the headline totals)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardTotals {
    pub total_lords: f64,
    pub total_strk: f64,
}

impl RewardTotals {
    pub fn from_tribes(tribes: &[Tribe]) -> Self {
        let sum = tribes
            .iter()
            .fold(TokenAmounts::ZERO, |acc, tribe| acc + tribe.prize);
        Self {
            total_lords: sum.lords,
            total_strk: sum.strk,
        }
    }
}
