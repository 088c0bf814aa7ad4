//! Address utility commands

use anyhow::{bail, Result};
use eternum::{normalize, KnownAddresses};
use std::path::Path;

use crate::config::Config;

/// Print the normalized form of each address.
///
/// Every input is reported; the command fails if any was invalid.
pub fn normalize_all(addresses: &[String]) -> Result<()> {
    let mut failed = 0;
    for address in addresses {
        match normalize(address) {
            Ok(normalized) => println!("{}", normalized),
            Err(e) => {
                eprintln!("{}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} addresses were invalid", failed, addresses.len());
    }
    Ok(())
}

/// Print each address with its registered name
pub fn lookup(config: &Config, addresses: &[String], known: Option<&Path>) -> Result<()> {
    let known = super::load_known(config, known)?;
    if known.is_empty() {
        tracing::warn!("Known-address registry is empty");
    }

    for address in addresses {
        println!("{}", lookup_line(&known, address));
    }
    Ok(())
}

fn lookup_line(known: &KnownAddresses, address: &str) -> String {
    let canonical = normalize(address).unwrap_or_else(|_| address.to_string());
    match known.name_for(address) {
        Some(name) => format!("{}  {}", canonical, name),
        None => format!("{}  (unknown)", canonical),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_normalize_all_reports_invalid() {
        let addresses = vec!["0x1".to_string(), "not-hex".to_string()];
        assert!(normalize_all(&addresses).is_err());
        assert!(normalize_all(&addresses[..1]).is_ok());
    }

    #[test]
    fn test_lookup_line() {
        let mut map = HashMap::new();
        map.insert("0x049d3".to_string(), "LORDS Bridge".to_string());
        let known = KnownAddresses::from_map(map);

        let line = lookup_line(&known, "0x49D3");
        assert!(line.ends_with("  LORDS Bridge"));
        assert!(line.starts_with("0x000000"));

        assert!(lookup_line(&known, "0x5").ends_with("(unknown)"));
        assert_eq!(lookup_line(&known, "zz"), "zz  (unknown)");
    }
}
