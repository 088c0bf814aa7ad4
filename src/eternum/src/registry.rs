//! Known-address registry
//!
//! Maps normalized addresses to human-readable names (contracts, team
//! wallets, well-known players). Lookups accept any address spelling.

use crate::address::{shorten, Address};
use crate::data::{load_json, DataError};
use std::collections::HashMap;
use std::path::Path;

/// Registry of display names indexed by canonical address
#[derive(Debug, Clone, Default)]
pub struct KnownAddresses {
    names: HashMap<Address, String>,
}

impl KnownAddresses {
    /// Load a registry from a JSON object of `address -> name`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let map: HashMap<String, String> = load_json(path.as_ref())?;
        Ok(Self::from_map(map))
    }

    /// Build from raw entries; keys that are not addresses are skipped
    pub fn from_map(map: HashMap<String, String>) -> Self {
        let mut names = HashMap::with_capacity(map.len());
        for (raw, name) in map {
            match raw.parse::<Address>() {
                Ok(address) => {
                    names.insert(address, name);
                }
                Err(e) => tracing::warn!("skipping known address entry: {}", e),
            }
        }
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Registered name for an address, if any
    pub fn name_for(&self, address: &str) -> Option<&str> {
        let address = address.parse::<Address>().ok()?;
        self.names.get(&address).map(String::as_str)
    }

    /// Name for display: the registered name, else the shortened address.
    ///
    /// Malformed addresses are logged and shown shortened.
    pub fn display_name(&self, address: &str) -> String {
        match address.parse::<Address>() {
            Ok(parsed) => match self.names.get(&parsed) {
                Some(name) => name.clone(),
                None => shorten(address),
            },
            Err(e) => {
                tracing::warn!("{}", e);
                shorten(address)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> KnownAddresses {
        let mut map = HashMap::new();
        map.insert(
            "0x045c587318c9ebcf2fbe21febf288ee2e3597a21cd48676005a5770a50d433c5".to_string(),
            "veLORDS".to_string(),
        );
        map.insert("0x1".to_string(), "genesis".to_string());
        map.insert("not an address".to_string(), "ignored".to_string());
        KnownAddresses::from_map(map)
    }

    #[test]
    fn test_skips_malformed_keys() {
        assert_eq!(registry().len(), 2);
    }

    #[test]
    fn test_lookup_across_spellings() {
        let reg = registry();
        assert_eq!(
            reg.name_for("0x45c587318c9ebcf2fbe21febf288ee2e3597a21cd48676005a5770a50d433c5"),
            Some("veLORDS")
        );
        assert_eq!(
            reg.name_for("0x0000000000000000000000000000000000000000000000000000000000000001"),
            Some("genesis")
        );
        assert_eq!(reg.name_for("1"), Some("genesis"));
    }

    #[test]
    fn test_unregistered_falls_back_to_short_form() {
        let reg = registry();
        assert_eq!(reg.name_for("0x2"), None);
        assert_eq!(
            reg.display_name("0x01d490c9345ae1fc0c10c8fd69f6a9f31f893ba7486eae489b020eea1f8a8ef7"),
            "0x01d4...8ef7"
        );
    }

    #[test]
    fn test_malformed_lookup_is_not_fatal() {
        let reg = registry();
        assert_eq!(reg.name_for("0xnope"), None);
        assert_eq!(reg.display_name("Multiple wallets"), "Multip...lets");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("known-addresses.json");
        std::fs::write(&path, r#"{"0xabc": "Realms DAO"}"#).unwrap();

        let reg = KnownAddresses::load(&path).unwrap();
        assert_eq!(reg.display_name("0x0abc"), "Realms DAO");
    }
}
