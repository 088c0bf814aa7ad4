//! Reward policy tables.
//!
//! Split ratios, the rank prize table and the fixed pool sizes for a season.
//! Everything the reward math treats as a constant lives here so a new
//! season or event only needs a different [`RewardPolicy`].

use crate::roster::{TokenAmounts, TribePrize};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const EPSILON: f64 = 1e-9;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolicyError {
    #[error("Invalid ratio {name}: {value}")]
    InvalidRatio { name: &'static str, value: f64 },

    #[error("Member ratio {member} and owner ratio {owner} exceed the tribe prize")]
    RatiosExceedPrize { member: f64, owner: f64 },

    #[error("Invalid percentage {percent} for rank {rank}")]
    InvalidRankShare { rank: u32, percent: f64 },

    #[error("Rank table allocates {0}% of the pool")]
    RankTableOverallocated(f64),
}

/// Share of the season pool awarded to one tribe rank
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankShare {
    pub rank: u32,
    pub percent: f64,
}

/// Season-1 rank table: rank 1 takes 30% of the pool down to 4% for rank 10
pub const SEASON_ONE_RANK_SHARES: &[RankShare] = &[
    RankShare { rank: 1, percent: 30.0 },
    RankShare { rank: 2, percent: 18.0 },
    RankShare { rank: 3, percent: 12.0 },
    RankShare { rank: 4, percent: 9.0 },
    RankShare { rank: 5, percent: 7.0 },
    RankShare { rank: 6, percent: 6.0 },
    RankShare { rank: 7, percent: 5.0 },
    RankShare { rank: 8, percent: 5.0 },
    RankShare { rank: 9, percent: 4.0 },
    RankShare { rank: 10, percent: 4.0 },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardPolicy {
    /// Fraction of a tribe prize split among members by points
    pub member_ratio: f64,
    /// Fraction of a tribe prize reserved for the tribe owner
    pub owner_ratio: f64,
    /// LORDS pool split proportionally by achievement points
    pub achievement_pool: f64,
    /// STRK pool split evenly among qualifying agents
    pub agent_pool: f64,
    /// Season victory pool distributed across ranked tribes
    pub victory_pool: TokenAmounts,
    pub rank_shares: Vec<RankShare>,
}

impl Default for RewardPolicy {
    fn default() -> Self {
        Self {
            member_ratio: 0.70,
            owner_ratio: 0.30,
            achievement_pool: 100_000.0,
            agent_pool: 25_000.0,
            victory_pool: TokenAmounts::new(300_000.0, 50_000.0),
            rank_shares: SEASON_ONE_RANK_SHARES.to_vec(),
        }
    }
}

impl RewardPolicy {
    /// Check that the policy never pays out more than a prize holds
    pub fn validate(&self) -> Result<(), PolicyError> {
        for (name, value) in [
            ("member_ratio", self.member_ratio),
            ("owner_ratio", self.owner_ratio),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PolicyError::InvalidRatio { name, value });
            }
        }
        if self.member_ratio + self.owner_ratio > 1.0 + EPSILON {
            return Err(PolicyError::RatiosExceedPrize {
                member: self.member_ratio,
                owner: self.owner_ratio,
            });
        }

        let mut allocated = 0.0;
        for share in &self.rank_shares {
            if !share.percent.is_finite() || share.percent < 0.0 {
                return Err(PolicyError::InvalidRankShare {
                    rank: share.rank,
                    percent: share.percent,
                });
            }
            allocated += share.percent;
        }
        if allocated > 100.0 + EPSILON {
            return Err(PolicyError::RankTableOverallocated(allocated));
        }

        Ok(())
    }

    /// Percentage of the victory pool for a rank, if the rank is paid
    pub fn percent_for_rank(&self, rank: u32) -> Option<f64> {
        self.rank_shares
            .iter()
            .find(|s| s.rank == rank)
            .map(|s| s.percent)
    }

    /// Prize for a tribe finishing at `rank`; unpaid ranks get nothing
    pub fn prize_for_rank(&self, rank: u32, pool: TokenAmounts) -> TribePrize {
        match self.percent_for_rank(rank) {
            Some(percent) => pool.scale(percent / 100.0),
            None => TokenAmounts::ZERO,
        }
    }
}
