//! WebAssembly bindings for eternum
//!
//! JavaScript-friendly bindings for the dashboard. Datasets go in and
//! records come out as JSON strings.

use crate::achievements::{
    compute_equal_split_rewards as rust_equal_split,
    compute_proportional_rewards as rust_proportional, AchievementEntry,
};
use crate::address::normalize;
use crate::leaderboard::{build_rows, filter_rows, sort_rows, PlayerRow, SortKey, SortOrder};
use crate::policy::RewardPolicy;
use crate::rewards::{compute_member_rewards as rust_member_rewards, RewardTotals};
use crate::roster::RosterExport;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn parse<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid {}: {}", what, e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}

fn policy_or_default(policy_json: Option<String>) -> Result<RewardPolicy, JsValue> {
    let policy = match policy_json {
        Some(json) => parse(&json, "policy")?,
        None => RewardPolicy::default(),
    };
    policy
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(policy)
}

/// Compute per-member victory rewards
///
/// # Arguments
/// * `roster_json` - The roster export document
/// * `policy_json` - Optional reward policy overrides
///
/// # Returns
/// JSON array of reward records
#[wasm_bindgen(js_name = computeMemberRewards)]
pub fn compute_member_rewards(
    roster_json: &str,
    policy_json: Option<String>,
) -> Result<String, JsValue> {
    let roster: RosterExport = parse(roster_json, "roster")?;
    let policy = policy_or_default(policy_json)?;
    to_json(&rust_member_rewards(&roster.tribes, &policy))
}

/// Split a LORDS pool in proportion to `[{address, earnings}]` entries
#[wasm_bindgen(js_name = computeProportionalRewards)]
pub fn compute_proportional_rewards(entries_json: &str, pool: f64) -> Result<String, JsValue> {
    let entries: Vec<AchievementEntry> = parse(entries_json, "entries")?;
    to_json(&rust_proportional(&entries, pool))
}

/// Split a pool evenly across a JSON array of address strings
#[wasm_bindgen(js_name = computeEqualSplitRewards)]
pub fn compute_equal_split_rewards(addresses_json: &str, pool: f64) -> Result<String, JsValue> {
    let addresses: Vec<String> = parse(addresses_json, "addresses")?;
    to_json(&rust_equal_split(&addresses, pool))
}

/// Canonical `0x` + 64 hex digit form of an address
#[wasm_bindgen(js_name = normalizeAddress)]
pub fn normalize_address(address: &str) -> Result<String, JsValue> {
    normalize(address).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Total prizes across all tribes as `[lords, strk]`
#[wasm_bindgen(js_name = rewardTotals)]
pub fn reward_totals(roster_json: &str) -> Result<js_sys::Array, JsValue> {
    let roster: RosterExport = parse(roster_json, "roster")?;
    let totals = RewardTotals::from_tribes(&roster.tribes);
    let arr = js_sys::Array::new();
    arr.push(&JsValue::from_f64(totals.total_lords));
    arr.push(&JsValue::from_f64(totals.total_strk));
    Ok(arr)
}

/// JavaScript-friendly leaderboard with search and sort state
#[wasm_bindgen]
pub struct Leaderboard {
    rows: Vec<PlayerRow>,
    key: SortKey,
    order: SortOrder,
}

#[wasm_bindgen]
impl Leaderboard {
    /// Build from a roster export and optional policy overrides
    #[wasm_bindgen(constructor)]
    pub fn new(roster_json: &str, policy_json: Option<String>) -> Result<Leaderboard, JsValue> {
        let roster: RosterExport = parse(roster_json, "roster")?;
        let policy = policy_or_default(policy_json)?;
        Ok(Leaderboard {
            rows: build_rows(&roster.tribes, &policy),
            key: SortKey::default(),
            order: SortOrder::default(),
        })
    }

    /// Set the sort key (`lords`, `strk`, `points`, `name`)
    #[wasm_bindgen(js_name = setSortKey)]
    pub fn set_sort_key(&mut self, key: &str) -> Result<(), JsValue> {
        self.key = key.parse().map_err(|e: String| JsValue::from_str(&e))?;
        Ok(())
    }

    #[wasm_bindgen(js_name = toggleOrder)]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
    }

    #[wasm_bindgen(getter)]
    pub fn ascending(&self) -> bool {
        self.order == SortOrder::Asc
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Filtered and sorted rows as JSON
    pub fn view(&self, search: &str) -> Result<String, JsValue> {
        let mut rows = filter_rows(self.rows.clone(), search);
        sort_rows(&mut rows, self.key, self.order);
        to_json(&rows)
    }
}
