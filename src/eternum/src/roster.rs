//! Tribe and player roster types
//!
//! Mirrors the `eternum-social-export.json` document. Reward fields that
//! older exports carry precomputed on each member are ignored on load; they
//! are always recomputed by [`crate::rewards`].

use crate::address::Address;
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A LORDS/STRK amount pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenAmounts {
    #[serde(default)]
    pub lords: f64,
    #[serde(default)]
    pub strk: f64,
}

impl TokenAmounts {
    pub const ZERO: TokenAmounts = TokenAmounts {
        lords: 0.0,
        strk: 0.0,
    };

    pub fn new(lords: f64, strk: f64) -> Self {
        Self { lords, strk }
    }

    /// Scale both currencies by the same factor
    pub fn scale(self, factor: f64) -> Self {
        Self {
            lords: self.lords * factor,
            strk: self.strk * factor,
        }
    }
}

impl Add for TokenAmounts {
    type Output = TokenAmounts;

    fn add(self, rhs: TokenAmounts) -> TokenAmounts {
        TokenAmounts {
            lords: self.lords + rhs.lords,
            strk: self.strk + rhs.strk,
        }
    }
}

/// A tribe's prize allotment, allocated upstream from its rank
pub type TribePrize = TokenAmounts;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub realms: u32,
    #[serde(default)]
    pub mines: u32,
    #[serde(default)]
    pub hyperstructures: u32,
    #[serde(default)]
    pub villages: u32,
    #[serde(default)]
    pub banks: u32,
}

impl Player {
    /// Point total usable as a share numerator.
    ///
    /// Negative or non-finite totals count as zero.
    pub fn effective_points(&self) -> f64 {
        if self.points.is_finite() && self.points >= 0.0 {
            self.points
        } else {
            tracing::warn!(
                address = %self.address,
                points = self.points,
                "ignoring invalid point total"
            );
            0.0
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TribeOwner {
    pub address: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tribe {
    #[serde(default)]
    pub entity_id: String,
    #[serde(default)]
    pub name: String,
    pub rank: u32,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub prize: TribePrize,
    #[serde(default)]
    pub owner: Option<TribeOwner>,
    #[serde(default)]
    pub members: Vec<Player>,
}

impl Tribe {
    /// Sum of member point totals, the share denominator
    pub fn total_points(&self) -> f64 {
        self.members.iter().map(Player::effective_points).sum()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn total_realms(&self) -> u32 {
        self.members.iter().map(|m| m.realms).sum()
    }

    /// Index of the one member entitled to the owner bonus.
    ///
    /// The member matching `owner` wins, else the first member flagged
    /// `is_owner`. Any other flagged member is logged and ignored.
    pub fn owner_index(&self) -> Option<usize> {
        let declared = self.owner.as_ref().and_then(|owner| {
            self.members
                .iter()
                .position(|m| same_address(&m.address, &owner.address))
        });
        let index = declared.or_else(|| self.members.iter().position(|m| m.is_owner));

        for (i, member) in self.members.iter().enumerate() {
            if member.is_owner && Some(i) != index {
                tracing::warn!(
                    tribe = %self.name,
                    address = %member.address,
                    "ignoring extra owner flag"
                );
            }
        }
        index
    }
}

fn same_address(a: &str, b: &str) -> bool {
    match (a.parse::<Address>(), b.parse::<Address>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a.trim().eq_ignore_ascii_case(b.trim()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    #[serde(default)]
    pub total_players: u64,
    #[serde(default)]
    pub total_tribes: u64,
}

/// The full roster export document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterExport {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub game_info: GameInfo,
    #[serde(default)]
    pub tribes: Vec<Tribe>,
}

impl RosterExport {
    pub fn player_count(&self) -> usize {
        self.tribes.iter().map(Tribe::member_count).sum()
    }
}
