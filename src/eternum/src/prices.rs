//! Token price snapshot
//!
//! Parses the CoinGecko `simple/price` response for LORDS and STRK. Fetching
//! is left to the caller; a saved response or configured prices are enough.

use serde::Deserialize;
use thiserror::Error;

/// LORDS/USD used when no price data is available
pub const FALLBACK_LORDS_USD: f64 = 0.02;
/// STRK/USD used when no price data is available
pub const FALLBACK_STRK_USD: f64 = 1.15;

#[derive(Error, Debug)]
pub enum PriceError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Price data not found for {0}")]
    MissingCoin(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSnapshot {
    pub lords_usd: f64,
    pub strk_usd: f64,
    /// LORDS 24h change in percent
    pub lords_24h_change: Option<f64>,
    /// Unix timestamp of the LORDS quote
    pub last_updated_at: Option<u64>,
}

#[derive(Deserialize)]
struct CoinQuote {
    usd: f64,
    #[serde(default)]
    usd_24h_change: Option<f64>,
    #[serde(default)]
    last_updated_at: Option<u64>,
}

#[derive(Deserialize)]
struct CoinGeckoResponse {
    lords: Option<CoinQuote>,
    starknet: Option<CoinQuote>,
}

impl PriceSnapshot {
    /// Fixed prices, no change data
    pub fn fixed(lords_usd: f64, strk_usd: f64) -> Self {
        Self {
            lords_usd,
            strk_usd,
            lords_24h_change: None,
            last_updated_at: None,
        }
    }

    pub fn fallback() -> Self {
        Self::fixed(FALLBACK_LORDS_USD, FALLBACK_STRK_USD)
    }

    /// Parse a CoinGecko `simple/price?ids=lords,starknet` response
    pub fn from_coingecko(json: &str) -> Result<Self, PriceError> {
        let response: CoinGeckoResponse = serde_json::from_str(json)?;
        let lords = response.lords.ok_or(PriceError::MissingCoin("lords"))?;
        let strk = response.starknet.ok_or(PriceError::MissingCoin("starknet"))?;

        Ok(Self {
            lords_usd: lords.usd,
            strk_usd: strk.usd,
            lords_24h_change: lords.usd_24h_change,
            last_updated_at: lords.last_updated_at,
        })
    }

    pub fn lords_to_usd(&self, lords: f64) -> f64 {
        lords * self.lords_usd
    }

    pub fn strk_to_usd(&self, strk: f64) -> f64 {
        strk * self.strk_usd
    }
}

impl Default for PriceSnapshot {
    fn default() -> Self {
        Self::fallback()
    }
}
