//! Victory prize report
//!
//! Per-player LORDS/STRK rewards derived from the roster export.

use anyhow::Result;
use eternum::data::ROSTER_FILE;
use eternum::{
    allocate_prizes, build_rows, filter_rows, load_roster, sort_rows, PlayerRow,
    PriceSnapshot, RewardPolicy, RewardTotals, RosterExport,
};

use crate::cli::{OutputFormat, VictoryArgs};
use crate::config::Config;
use crate::display::{format_amount, format_usd, print_report, CellStyle, Column};

const COLUMNS: [Column; 10] = [
    Column::right("Rank"),
    Column::left("Tribe"),
    Column::left("Player"),
    Column::left("Owner"),
    Column::left("Address"),
    Column::right("Points"),
    Column::right("Share"),
    Column::right("LORDS"),
    Column::right("STRK"),
    Column::right("USD"),
];

/// Handle the victory command
pub fn handle(config: &Config, prices: &PriceSnapshot, args: &VictoryArgs) -> Result<()> {
    let path = config.data_path(args.roster.as_deref(), ROSTER_FILE);
    let mut roster = load_roster(&path)?;
    tracing::info!(
        "Loaded {} tribes, {} players from {}",
        roster.tribes.len(),
        roster.player_count(),
        path.display()
    );

    let rows = leaderboard(&mut roster, &config.policy, args);
    let totals = RewardTotals::from_tribes(&roster.tribes);

    let style = CellStyle::for_format(args.format);
    let cells: Vec<Vec<String>> = rows.iter().map(|row| table_row(row, prices, style)).collect();
    print_report(args.format, &COLUMNS, &cells, &rows)?;

    if args.format == OutputFormat::Table {
        println!();
        print_summary(&roster, &totals, prices, rows.len());
    }

    Ok(())
}

/// Rows after optional prize recomputation, search, sort, and limit
fn leaderboard(
    roster: &mut RosterExport,
    policy: &RewardPolicy,
    args: &VictoryArgs,
) -> Vec<PlayerRow> {
    if args.recompute_prizes {
        allocate_prizes(&mut roster.tribes, policy);
    }

    let mut rows = build_rows(&roster.tribes, policy);
    if let Some(search) = &args.search {
        rows = filter_rows(rows, search);
    }
    sort_rows(&mut rows, args.sort, args.order);
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }
    rows
}

fn table_row(row: &PlayerRow, prices: &PriceSnapshot, style: CellStyle) -> Vec<String> {
    let usd = prices.lords_to_usd(row.reward.total_lords_reward)
        + prices.strk_to_usd(row.reward.total_strk_reward);
    let owner = match (style, row.reward.is_owner) {
        (CellStyle::Display, true) => "*",
        (CellStyle::Display, false) => "",
        (CellStyle::Raw, true) => "true",
        (CellStyle::Raw, false) => "false",
    };

    vec![
        row.tribe_rank.to_string(),
        row.tribe_name.clone(),
        row.player.name.clone(),
        owner.to_string(),
        style.address(&row.player.address),
        style.amount(row.player.points),
        style.percent(row.reward.points_share * 100.0),
        style.amount(row.reward.total_lords_reward),
        style.amount(row.reward.total_strk_reward),
        style.usd(usd),
    ]
}

fn print_summary(
    roster: &RosterExport,
    totals: &RewardTotals,
    prices: &PriceSnapshot,
    shown: usize,
) {
    println!(
        "Prize pool: {} LORDS ({}) + {} STRK ({})",
        format_amount(totals.total_lords),
        format_usd(prices.lords_to_usd(totals.total_lords)),
        format_amount(totals.total_strk),
        format_usd(prices.strk_to_usd(totals.total_strk)),
    );
    println!(
        "Showing {} of {} players across {} tribes",
        shown,
        roster.player_count(),
        roster.tribes.len()
    );
    if !roster.timestamp.is_empty() {
        println!("Snapshot: {}", roster.timestamp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::render_csv;
    use eternum::{SortKey, SortOrder};
    use std::fs;
    use std::path::Path;

    const ROSTER: &str = r#"{
        "timestamp": "2025-06-01T00:00:00Z",
        "gameInfo": { "totalPlayers": 3, "totalTribes": 2 },
        "tribes": [
            {
                "entityId": "11",
                "name": "Order of Giants",
                "rank": 1,
                "isPublic": true,
                "prize": { "lords": 90000, "strk": 15000 },
                "members": [
                    { "address": "0xa1", "name": "alice", "isOwner": false, "points": 500000 },
                    { "address": "0xb2", "name": "Bob", "isOwner": true, "points": 9500000 }
                ]
            },
            {
                "entityId": "12",
                "name": "Fox Den",
                "rank": 2,
                "isPublic": false,
                "prize": { "lords": 54000, "strk": 9000 },
                "members": [
                    { "address": "0xc3", "name": "carol", "isOwner": true, "points": 100 }
                ]
            }
        ]
    }"#;

    fn args() -> VictoryArgs {
        VictoryArgs {
            roster: None,
            search: None,
            sort: SortKey::Lords,
            order: SortOrder::Desc,
            limit: None,
            recompute_prizes: false,
            format: OutputFormat::Table,
        }
    }

    fn leaderboard_from(path: &Path, args: &VictoryArgs) -> Result<Vec<PlayerRow>> {
        let mut roster = load_roster(path)?;
        Ok(leaderboard(&mut roster, &RewardPolicy::default(), args))
    }

    fn write_roster() -> tempfile::TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(ROSTER_FILE), ROSTER).unwrap();
        temp_dir
    }

    #[test]
    fn test_leaderboard_sorted_by_lords() {
        let temp_dir = write_roster();
        let rows = leaderboard_from(&temp_dir.path().join(ROSTER_FILE), &args()).unwrap();

        let names: Vec<&str> = rows.iter().map(|r| r.player.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "carol", "alice"]);
        assert!((rows[0].reward.total_lords_reward - 86_850.0).abs() < 1e-6);
        assert!((rows[2].reward.total_lords_reward - 3_150.0).abs() < 1e-6);
    }

    #[test]
    fn test_leaderboard_search_and_limit() {
        let temp_dir = write_roster();
        let path = temp_dir.path().join(ROSTER_FILE);

        let mut search = args();
        search.search = Some("giants".to_string());
        let rows = leaderboard_from(&path, &search).unwrap();
        assert_eq!(rows.len(), 2);

        let mut limited = args();
        limited.limit = Some(1);
        let rows = leaderboard_from(&path, &limited).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].player.name, "Bob");
    }

    #[test]
    fn test_leaderboard_recompute_prizes() {
        let temp_dir = write_roster();
        let mut recompute = args();
        recompute.recompute_prizes = true;
        recompute.sort = SortKey::Name;
        recompute.order = SortOrder::Asc;

        let rows = leaderboard_from(&temp_dir.path().join(ROSTER_FILE), &recompute).unwrap();
        let carol = rows.iter().find(|r| r.player.name == "carol").unwrap();
        // rank 2 takes 18% of the default victory pool
        assert!((carol.tribe_prize.lords - 54_000.0).abs() < 1e-6);
        assert!((carol.tribe_prize.strk - 9_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_table_row() {
        let temp_dir = write_roster();
        let rows = leaderboard_from(&temp_dir.path().join(ROSTER_FILE), &args()).unwrap();
        let prices = PriceSnapshot::fixed(0.02, 1.0);

        let row = table_row(&rows[2], &prices, CellStyle::Display);
        assert_eq!(row[0], "1");
        assert_eq!(row[2], "alice");
        assert_eq!(row[3], "");
        assert_eq!(row[6], "5.00%");
        assert_eq!(row[7], "3,150");
        assert_eq!(row[8], "525");
        assert_eq!(row[9], "$588.00");

        let owner = table_row(&rows[0], &prices, CellStyle::Display);
        assert_eq!(owner[2], "Bob");
        assert_eq!(owner[3], "*");
    }

    #[test]
    fn test_csv_row_is_lossless() {
        let temp_dir = write_roster();
        let rows = leaderboard_from(&temp_dir.path().join(ROSTER_FILE), &args()).unwrap();
        let prices = PriceSnapshot::fixed(0.02, 1.0);

        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| table_row(row, &prices, CellStyle::Raw))
            .collect();
        let csv = render_csv(&COLUMNS, &cells);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "Rank,Tribe,Player,Owner,Address,Points,Share,LORDS,STRK,USD"
        );
        assert!(lines[1].starts_with(
            "1,Order of Giants,Bob,true,0x00000000000000000000000000000000000000000000000000000000000000b2,9500000,"
        ));
        assert!(!csv.contains("..."));
    }

    #[test]
    fn test_handle_missing_roster() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(handle(&config, &PriceSnapshot::fallback(), &args()).is_err());
    }
}
