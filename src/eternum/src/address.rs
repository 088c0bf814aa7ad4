//! Starknet address normalization.
//!
//! Addresses show up in several spellings across the datasets: short hex
//! (`0x1`), full 64-digit padded hex, upper or lower case, with or without
//! the `0x` prefix. Every cross-dataset join goes through [`normalize`] so
//! that all of these compare equal.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of hex digits in a canonical address (32 bytes)
pub const ADDRESS_HEX_WIDTH: usize = 64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid address {input:?}: {reason}")]
    InvalidAddress { input: String, reason: String },
}

impl AddressError {
    fn invalid(input: &str, reason: impl Into<String>) -> Self {
        AddressError::InvalidAddress {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// A 32-byte Starknet address in canonical form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; 32]);

impl Address {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(AddressError::invalid(s, "no hex digits"));
        }
        if digits.len() > ADDRESS_HEX_WIDTH {
            return Err(AddressError::invalid(
                s,
                format!("{} hex digits exceeds {}", digits.len(), ADDRESS_HEX_WIDTH),
            ));
        }

        let padded = format!("{:0>width$}", digits, width = ADDRESS_HEX_WIDTH);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|e| AddressError::invalid(s, e.to_string()))?;

        Ok(Address(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Map any accepted spelling of an address to `0x` + 64 lowercase hex digits.
///
/// Idempotent: `normalize(&normalize(x)?)? == normalize(x)?`.
pub fn normalize(address: &str) -> Result<String, AddressError> {
    address.parse::<Address>().map(|a| a.to_string())
}

/// Shortened display form (`0x04cd...c553`) of a raw address string.
///
/// Works on malformed input too, since it is the fallback display.
pub fn shorten(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
