//! Achievement pool reports
//!
//! Proportional LORDS split by earned points, and the even STRK split across
//! qualifying agent addresses.

use anyhow::{bail, Result};
use eternum::data::{POINTS_FILE, QUALIFYING_FILE};
use eternum::{
    compute_equal_split_rewards, compute_proportional_rewards, dedup_qualifying,
    load_achievement_entries, load_achievement_players, load_qualifying, qualifying_addresses,
    AchievementRewardRecord, EqualSplitRewardRecord, KnownAddresses, PriceSnapshot,
};
use std::path::{Path, PathBuf};

use crate::cli::{AchievementsCommand, OutputFormat};
use crate::config::Config;
use crate::display::{format_amount, format_usd, print_report, CellStyle, Column};

const PROPORTIONAL_COLUMNS: [Column; 6] = [
    Column::right("#"),
    Column::left("Player"),
    Column::left("Address"),
    Column::right("Points"),
    Column::right("Share"),
    Column::right("LORDS"),
];

const EQUAL_COLUMNS: [Column; 4] = [
    Column::right("#"),
    Column::left("Player"),
    Column::left("Address"),
    Column::right("STRK"),
];

/// Where the equal split gets its qualifying addresses
enum Qualifiers {
    List(PathBuf),
    Achievement { players: PathBuf, id: String },
}

/// Dispatch achievements subcommands
pub fn handle(config: &Config, prices: &PriceSnapshot, command: AchievementsCommand) -> Result<()> {
    match command {
        AchievementsCommand::Proportional {
            points,
            pool,
            known,
            format,
        } => {
            let path = config.data_path(points.as_deref(), POINTS_FILE);
            let pool = pool.unwrap_or(config.policy.achievement_pool);
            let known = super::load_known(config, known.as_deref())?;
            proportional(&path, pool, &known, prices, format)
        }

        AchievementsCommand::Equal {
            qualifying,
            players,
            achievement,
            pool,
            known,
            format,
        } => {
            let source = match (players, achievement) {
                (Some(players), Some(id)) => Qualifiers::Achievement { players, id },
                (None, None) => {
                    Qualifiers::List(config.data_path(qualifying.as_deref(), QUALIFYING_FILE))
                }
                _ => bail!("--players and --achievement must be given together"),
            };
            let pool = pool.unwrap_or(config.policy.agent_pool);
            let known = super::load_known(config, known.as_deref())?;
            equal(source, pool, &known, prices, format)
        }
    }
}

fn proportional(
    path: &Path,
    pool: f64,
    known: &KnownAddresses,
    prices: &PriceSnapshot,
    format: OutputFormat,
) -> Result<()> {
    let entries = load_achievement_entries(path)?;
    tracing::info!("Loaded {} achievement entries from {}", entries.len(), path.display());

    let records = ranked_by_reward(compute_proportional_rewards(&entries, pool));
    if records.is_empty() {
        tracing::warn!("No achievement points recorded, nothing to distribute");
    }

    let rows = proportional_rows(&records, known, CellStyle::for_format(format));
    print_report(format, &PROPORTIONAL_COLUMNS, &rows, &records)?;

    if format == OutputFormat::Table {
        let distributed: f64 = records.iter().map(|r| r.lords_reward).sum();
        println!();
        println!(
            "Distributed {} of {} LORDS ({}) across {} players",
            format_amount(distributed),
            format_amount(pool),
            format_usd(prices.lords_to_usd(distributed)),
            records.len()
        );
    }

    Ok(())
}

fn equal(
    source: Qualifiers,
    pool: f64,
    known: &KnownAddresses,
    prices: &PriceSnapshot,
    format: OutputFormat,
) -> Result<()> {
    let addresses = qualifying(source)?;
    let records = compute_equal_split_rewards(&addresses, pool);
    if records.is_empty() {
        tracing::warn!("No qualifying addresses, nothing to distribute");
    }

    let rows = equal_rows(&records, known, CellStyle::for_format(format));
    print_report(format, &EQUAL_COLUMNS, &rows, &records)?;

    if format == OutputFormat::Table {
        let each = records.first().map(|r| r.reward).unwrap_or(0.0);
        println!();
        println!(
            "{} qualifying addresses, {} STRK ({}) each from a {} STRK pool",
            records.len(),
            format_amount(each),
            format_usd(prices.strk_to_usd(each)),
            format_amount(pool)
        );
    }

    Ok(())
}

fn qualifying(source: Qualifiers) -> Result<Vec<String>> {
    let addresses = match source {
        Qualifiers::List(path) => {
            let entries = load_qualifying(&path)?;
            tracing::info!("Loaded {} qualifying entries from {}", entries.len(), path.display());
            dedup_qualifying(entries)
        }
        Qualifiers::Achievement { players, id } => {
            let players = load_achievement_players(&players)?;
            tracing::info!("Loaded {} achievement players", players.len());
            qualifying_addresses(&players, &id)
        }
    };
    Ok(addresses)
}

/// Highest reward first; ties keep input order
fn ranked_by_reward(mut records: Vec<AchievementRewardRecord>) -> Vec<AchievementRewardRecord> {
    records.sort_by(|a, b| b.lords_reward.total_cmp(&a.lords_reward));
    records
}

fn proportional_rows(
    records: &[AchievementRewardRecord],
    known: &KnownAddresses,
    style: CellStyle,
) -> Vec<Vec<String>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            vec![
                (i + 1).to_string(),
                super::player_name(known, &record.address, style),
                style.address(&record.address),
                style.amount(record.earnings),
                style.percent(record.percentage),
                style.amount(record.lords_reward),
            ]
        })
        .collect()
}

fn equal_rows(
    records: &[EqualSplitRewardRecord],
    known: &KnownAddresses,
    style: CellStyle,
) -> Vec<Vec<String>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            vec![
                (i + 1).to_string(),
                super::player_name(known, &record.address, style),
                style.address(&record.address),
                style.amount(record.reward),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::render_csv;
    use eternum::AchievementEntry;
    use std::collections::HashMap;
    use std::fs;

    fn known() -> KnownAddresses {
        let mut map = HashMap::new();
        map.insert("0x0aaa".to_string(), "Team Wallet".to_string());
        KnownAddresses::from_map(map)
    }

    #[test]
    fn test_proportional_rows_ranked() {
        let entries = vec![
            AchievementEntry::new("0xaaa", 100.0),
            AchievementEntry::new("0xbbb", 300.0),
        ];
        let records = ranked_by_reward(compute_proportional_rewards(&entries, 100_000.0));
        let rows = proportional_rows(&records, &known(), CellStyle::Display);

        assert_eq!(rows[0][0], "1");
        assert_eq!(rows[0][1], "0xbbb");
        assert_eq!(rows[0][4], "75.00%");
        assert_eq!(rows[0][5], "75,000");
        assert_eq!(rows[1][1], "Team Wallet");
        assert_eq!(rows[1][5], "25,000");
    }

    #[test]
    fn test_proportional_csv_keeps_full_address() {
        let address = "0x04cd21aa3e634e36d6379bdbb3fef78f7e0a882eb8a048624c4b02eead1bc553";
        let entries = vec![
            AchievementEntry::new(address, 100.0),
            AchievementEntry::new("0xaaa", 300.0),
        ];
        let records = ranked_by_reward(compute_proportional_rewards(&entries, 1600.0));
        let rows = proportional_rows(&records, &known(), CellStyle::Raw);
        let csv = render_csv(&PROPORTIONAL_COLUMNS, &rows);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "#,Player,Address,Points,Share,LORDS");
        assert_eq!(
            lines[1],
            "1,Team Wallet,0x0000000000000000000000000000000000000000000000000000000000000aaa,300,75,1200"
        );
        assert_eq!(lines[2], format!("2,,{},100,25,400", address));
        assert!(!csv.contains("..."));
    }

    #[test]
    fn test_equal_csv_keeps_full_address() {
        let address = "0x045c587318c9ebcf2fbe21febf288ee2e3597a21cd48676005a5770a50d433c5";
        let records = compute_equal_split_rewards(&[address.to_string()], 25_000.0);
        let rows = equal_rows(&records, &known(), CellStyle::Raw);
        let csv = render_csv(&EQUAL_COLUMNS, &rows);

        assert!(csv.contains(&format!("1,,{},25000", address)));
    }

    #[test]
    fn test_equal_rows() {
        let addresses = vec!["0xaaa".to_string(), "0xbbb".to_string()];
        let records = compute_equal_split_rewards(&addresses, 25_000.0);
        let rows = equal_rows(&records, &known(), CellStyle::Display);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][1], "Team Wallet");
        assert_eq!(rows[1][3], "12,500");
    }

    #[test]
    fn test_qualifying_from_list_dedups() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(QUALIFYING_FILE);
        fs::write(
            &path,
            r#"[{"address": "0x0abc"}, {"address": "0xABC"}, {"address": "0xdef"}]"#,
        )
        .unwrap();

        let addresses = qualifying(Qualifiers::List(path)).unwrap();
        assert_eq!(addresses, vec!["0x0abc".to_string(), "0xdef".to_string()]);
    }

    #[test]
    fn test_qualifying_by_achievement() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("players.json");
        fs::write(
            &path,
            r#"[
                {"address": "0x1", "earnings": 10, "timestamp": 1, "completeds": ["agent"]},
                {"address": "0x2", "earnings": 20, "timestamp": 2, "completeds": []}
            ]"#,
        )
        .unwrap();

        let addresses = qualifying(Qualifiers::Achievement {
            players: path,
            id: "agent".to_string(),
        })
        .unwrap();
        assert_eq!(addresses, vec!["0x1".to_string()]);
    }

    #[test]
    fn test_handle_rejects_players_without_achievement() {
        let config = Config::default();
        let command = AchievementsCommand::Equal {
            qualifying: None,
            players: Some(PathBuf::from("players.json")),
            achievement: None,
            pool: None,
            known: None,
            format: OutputFormat::Table,
        };
        assert!(handle(&config, &PriceSnapshot::fallback(), command).is_err());
    }
}
