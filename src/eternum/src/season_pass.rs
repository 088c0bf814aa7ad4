//! Season pass valuation from marketplace sales
//!
//! Season passes were given to Realms holders for free. The average
//! marketplace sale price gives a per-pass value, which is applied to the
//! number of passes used, minted, or theoretically claimable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Realms NFTs across Ethereum and Starknet
pub const TOTAL_REALMS_NFTS: u32 = 8000;
pub const REALMS_BRIDGED_TO_STARKNET: u32 = 5106;
/// Passes minted for Realms holders
pub const SEASON_PASSES_MINTED: u32 = 3614;
/// Passes actually used in the game
pub const SEASON_PASSES_USED: u32 = 2173;
/// LORDS has 18 decimals
pub const WEI_PER_LORDS: f64 = 1e18;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaleError {
    #[error("Invalid hex price {0:?}")]
    InvalidHexPrice(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceSale {
    pub hex_price: String,
}

/// Convert a wei amount in hex (`0x` optional) to LORDS
pub fn hex_to_lords(hex_price: &str) -> Result<f64, SaleError> {
    let trimmed = hex_price.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let wei = u128::from_str_radix(digits, 16)
        .map_err(|_| SaleError::InvalidHexPrice(hex_price.to_string()))?;
    Ok(wei as f64 / WEI_PER_LORDS)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueScenario {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub count: u32,
    /// count × average sale price, in LORDS
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonPassStats {
    pub total_sold: usize,
    pub total_revenue: f64,
    pub average_price: f64,
    pub scenarios: Vec<ValueScenario>,
}

impl SeasonPassStats {
    /// Aggregate sales; unparseable prices are skipped
    pub fn from_sales(sales: &[MarketplaceSale]) -> Self {
        let prices: Vec<f64> = sales
            .iter()
            .filter_map(|sale| match hex_to_lords(&sale.hex_price) {
                Ok(lords) => Some(lords),
                Err(e) => {
                    tracing::warn!("skipping sale: {}", e);
                    None
                }
            })
            .collect();

        if prices.is_empty() {
            return Self::default();
        }

        let total_sold = prices.len();
        let total_revenue: f64 = prices.iter().sum();
        let average_price = total_revenue / total_sold as f64;

        Self {
            total_sold,
            total_revenue,
            average_price,
            scenarios: scenarios(average_price),
        }
    }
}

fn scenarios(average_price: f64) -> Vec<ValueScenario> {
    let scenario = |id, title, description, count: u32| ValueScenario {
        id,
        title,
        description,
        count,
        value: count as f64 * average_price,
    };

    vec![
        scenario(
            "used",
            "Season Passes Used in Game",
            "Value of season passes actually used during Season 1",
            SEASON_PASSES_USED,
        ),
        scenario(
            "minted",
            "Season Passes Minted",
            "Value of all season passes minted for Realms holders",
            SEASON_PASSES_MINTED,
        ),
        scenario(
            "bridged",
            "Realms Bridged to Starknet",
            "Potential value if all bridged Realms got season passes",
            REALMS_BRIDGED_TO_STARKNET,
        ),
        scenario(
            "total",
            "All Realms NFTs",
            "Maximum theoretical value across all Realms",
            TOTAL_REALMS_NFTS,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(hex_price: &str) -> MarketplaceSale {
        MarketplaceSale {
            hex_price: hex_price.to_string(),
        }
    }

    #[test]
    fn test_hex_to_lords() {
        // 1e18 wei
        assert_eq!(hex_to_lords("0xde0b6b3a7640000").unwrap(), 1.0);
        // 250e18 wei
        assert_eq!(hex_to_lords("0xD8D726B7177A80000").unwrap(), 250.0);
        assert_eq!(hex_to_lords("0").unwrap(), 0.0);
    }

    #[test]
    fn test_hex_to_lords_rejects_garbage() {
        assert!(hex_to_lords("0xgg").is_err());
        assert!(hex_to_lords("").is_err());
        assert!(hex_to_lords(&format!("0x{}", "f".repeat(33))).is_err());
    }

    #[test]
    fn test_stats_from_sales() {
        let sales = vec![
            sale("0xde0b6b3a7640000"),   // 1 LORDS
            sale("0x1bc16d674ec80000"),  // 2 LORDS
            sale("0x29a2241af62c0000"),  // 3 LORDS
        ];
        let stats = SeasonPassStats::from_sales(&sales);

        assert_eq!(stats.total_sold, 3);
        assert!((stats.total_revenue - 6.0).abs() < 1e-9);
        assert!((stats.average_price - 2.0).abs() < 1e-9);
        assert_eq!(stats.scenarios.len(), 4);
        assert_eq!(stats.scenarios[0].id, "used");
        assert!((stats.scenarios[0].value - 4346.0).abs() < 1e-6);
        assert!((stats.scenarios[3].value - 16_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_stats_skip_bad_sales() {
        let sales = vec![sale("0xde0b6b3a7640000"), sale("not-a-price")];
        let stats = SeasonPassStats::from_sales(&sales);
        assert_eq!(stats.total_sold, 1);
        assert_eq!(stats.average_price, 1.0);
    }

    #[test]
    fn test_stats_empty() {
        let stats = SeasonPassStats::from_sales(&[]);
        assert_eq!(stats, SeasonPassStats::default());
        assert!(stats.scenarios.is_empty());
    }
}
