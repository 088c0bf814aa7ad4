//! Season revenue breakdown
//!
//! Fee categories collected during the season, in LORDS, plus the helpers
//! the revenue table needs (totals, shares, USD conversion).

use serde::{Deserialize, Serialize};

/// Address marker for revenue without an on-chain destination
pub const NO_SPECIFIC_ADDRESS: &str = "No specific address";
/// Address marker for revenue spread over several wallets
pub const MULTIPLE_WALLETS: &str = "Multiple wallets";

/// Part of a category paid to its own wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSplit {
    pub label: String,
    pub amount: f64,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueEntry {
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Amount collected in LORDS
    pub amount: f64,
    /// Percentage as published alongside the figures
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub breakdown: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub splits: Vec<RevenueSplit>,
}

impl RevenueEntry {
    /// Whether `address` points at a real contract
    pub fn has_contract_address(&self) -> bool {
        !self.address.is_empty()
            && self.address != NO_SPECIFIC_ADDRESS
            && self.address != MULTIPLE_WALLETS
    }

    /// The season-one revenue table
    pub fn season_one() -> Vec<RevenueEntry> {
        let entry = |category: &str,
                     description: &str,
                     amount: f64,
                     percentage: f64,
                     address: &str,
                     source: &str,
                     breakdown: &str| RevenueEntry {
            category: category.to_string(),
            description: description.to_string(),
            amount,
            percentage,
            address: address.to_string(),
            source: source.to_string(),
            breakdown: breakdown.to_string(),
            splits: Vec::new(),
        };

        let split = |label: &str, amount: f64, address: &str| RevenueSplit {
            label: label.to_string(),
            amount,
            address: address.to_string(),
        };

        let mut bridge_fees = entry(
            "Bridge Fees",
            "Bridge commissions and distributions",
            55_282.0,
            9.9,
            MULTIPLE_WALLETS,
            "7.5% commission distributed across multiple wallets",
            "",
        );
        bridge_fees.splits = vec![
            split(
                "Season Pool",
                18_637.0,
                "0x04cd21aa3e634e36d6379bdbb3fef78f7e0a882eb8a048624c4b02eead1bc553",
            ),
            split(
                "VeLords Bridge Fees",
                18_637.0,
                "0x045c587318c9ebcf2fbe21febf288ee2e3597a21cd48676005a5770a50d433c5",
            ),
            split(
                "Client Integration",
                18_008.0,
                "0x009d838f2db23afd64e4a2a116eda44a00cda1b1c8cb2ce9c11eb534e8bc50e0",
            ),
        ];

        vec![
            entry(
                "Village Passes",
                "Direct village NFT sales revenue",
                316_000.0,
                56.8,
                NO_SPECIFIC_ADDRESS,
                "Paid in USD: $6,320 (1,264 villages × $5 each)",
                "",
            ),
            entry(
                "Donkey Network Fees",
                "Main bridge infrastructure operations",
                162_482.0,
                29.2,
                "0x01d490c9345ae1fc0c10c8fd69f6a9f31f893ba7486eae489b020eea1f8a8ef7",
                "Bridge operations + remaining LORDS tokens",
                "Core bridge infrastructure fees",
            ),
            entry(
                "Daydreams Agent Prize Pool",
                "Portion of the prize pool planned for AI agent rewards",
                250_000.0,
                31.2,
                "0x045c587318c9ebcf2fbe21febf288ee2e3597a21cd48676005a5770a50d433c5",
                "Portion of the prize pool planned for AI agent rewards",
                "Distributed to veLORDS stakers",
            ),
            bridge_fees,
            entry(
                "Marketplace Fees",
                "Trading volume commissions",
                22_487.0,
                4.0,
                "0x045c587318c9ebcf2fbe21febf288ee2e3597a21cd48676005a5770a50d433c5",
                "5% commission on marketplace trading volume",
                "Distributed to VeLords stakers",
            ),
        ]
    }
}

/// Total LORDS collected across all categories
pub fn total_lords(entries: &[RevenueEntry]) -> f64 {
    entries.iter().map(|e| e.amount).sum()
}

/// Computed share of `total`, 0..=100 (0 when there is no total)
pub fn share_of_total(amount: f64, total: f64) -> f64 {
    if total > 0.0 {
        amount / total * 100.0
    } else {
        0.0
    }
}

/// USD value of a LORDS amount
pub fn usd_value(lords: f64, lords_price: f64) -> f64 {
    lords * lords_price
}
