//! Season revenue breakdown

use anyhow::Result;
use eternum::revenue::{share_of_total, total_lords, usd_value};
use eternum::{load_revenue_table, PriceSnapshot, RevenueEntry};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::display::{format_usd, format_whole, print_report, CellStyle, Column};

const COLUMNS: [Column; 6] = [
    Column::left("Category"),
    Column::right("LORDS"),
    Column::right("USD"),
    Column::right("Share"),
    Column::left("Address"),
    Column::left("Breakdown"),
];

/// Handle the revenue command
pub fn handle(table: Option<&Path>, prices: &PriceSnapshot, format: OutputFormat) -> Result<()> {
    let entries = match table {
        Some(path) => {
            let entries = load_revenue_table(path)?;
            tracing::info!("Loaded {} revenue categories from {}", entries.len(), path.display());
            entries
        }
        None => RevenueEntry::season_one(),
    };
    let entries = with_price_breakdowns(entries, prices.lords_usd);

    let rows = revenue_rows(&entries, prices.lords_usd, CellStyle::for_format(format));
    print_report(format, &COLUMNS, &rows, &entries)?;

    if format == OutputFormat::Table {
        let total = total_lords(&entries);
        println!();
        println!(
            "Total: {} LORDS ({} at {}/LORDS)",
            format_whole(total),
            format_usd(usd_value(total, prices.lords_usd)),
            format_usd(prices.lords_usd)
        );
    }

    Ok(())
}

/// Fill empty breakdowns of unsplit categories with their value at `lords_price`
fn with_price_breakdowns(mut entries: Vec<RevenueEntry>, lords_price: f64) -> Vec<RevenueEntry> {
    for entry in entries.iter_mut() {
        if entry.breakdown.is_empty() && entry.splits.is_empty() {
            entry.breakdown = format!(
                "Equivalent to {} LORDS at ${:.6} per token",
                format_whole(entry.amount),
                lords_price
            );
        }
    }
    entries
}

/// One row per category, followed by its wallet splits
fn revenue_rows(entries: &[RevenueEntry], lords_price: f64, style: CellStyle) -> Vec<Vec<String>> {
    let total = total_lords(entries);
    let mut rows = Vec::new();

    for entry in entries {
        let address = if entry.has_contract_address() {
            style.address(&entry.address)
        } else {
            entry.address.clone()
        };
        rows.push(vec![
            entry.category.clone(),
            style.whole(entry.amount),
            style.usd(usd_value(entry.amount, lords_price)),
            style.percent(share_of_total(entry.amount, total)),
            address,
            entry.breakdown.clone(),
        ]);

        for split in &entry.splits {
            rows.push(vec![
                format!("  {}", split.label),
                style.whole(split.amount),
                style.usd(usd_value(split.amount, lords_price)),
                style.percent(share_of_total(split.amount, total)),
                style.address(&split.address),
                String::new(),
            ]);
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use eternum::revenue::{MULTIPLE_WALLETS, NO_SPECIFIC_ADDRESS};
    use eternum::RevenueSplit;

    use crate::display::render_csv;

    fn entry(category: &str, amount: f64, address: &str) -> RevenueEntry {
        RevenueEntry {
            category: category.to_string(),
            description: String::new(),
            amount,
            percentage: 0.0,
            address: address.to_string(),
            source: String::new(),
            breakdown: String::new(),
            splits: Vec::new(),
        }
    }

    #[test]
    fn test_revenue_rows_shares() {
        let entries = vec![
            entry("Marketplace Fees", 750.0, NO_SPECIFIC_ADDRESS),
            entry("Bank Fees", 250.0, "0x0123456789abcdef"),
        ];
        let rows = revenue_rows(&entries, 0.02, CellStyle::Display);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][1], "750");
        assert_eq!(rows[0][2], "$15.00");
        assert_eq!(rows[0][3], "75.00%");
        assert_eq!(rows[0][4], NO_SPECIFIC_ADDRESS);
        assert_eq!(rows[1][4], "0x0123...cdef");
    }

    #[test]
    fn test_revenue_rows_include_splits() {
        let mut bridge = entry("Bridge Fees", 1000.0, MULTIPLE_WALLETS);
        bridge.splits = vec![RevenueSplit {
            label: "Velords".to_string(),
            amount: 400.0,
            address: "0x0aaaaaaaaaaaaaaaaaaa".to_string(),
        }];
        let rows = revenue_rows(&[bridge], 0.02, CellStyle::Display);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][4], MULTIPLE_WALLETS);
        assert_eq!(rows[1][0], "  Velords");
        assert_eq!(rows[1][3], "40.00%");
    }

    #[test]
    fn test_unsplit_breakdown_follows_price() {
        let mut bridge = entry("Bridge Fees", 1000.0, MULTIPLE_WALLETS);
        bridge.splits = vec![RevenueSplit {
            label: "Velords".to_string(),
            amount: 400.0,
            address: "0x0a".to_string(),
        }];
        let mut bank = entry("Bank Fees", 250.0, NO_SPECIFIC_ADDRESS);
        bank.breakdown = "Swap fees".to_string();
        let entries = vec![
            entry("Village Passes", 316_000.0, NO_SPECIFIC_ADDRESS),
            bank,
            bridge,
        ];

        let entries = with_price_breakdowns(entries, 0.0235);
        assert_eq!(
            entries[0].breakdown,
            "Equivalent to 316,000 LORDS at $0.023500 per token"
        );
        assert_eq!(entries[1].breakdown, "Swap fees");
        assert_eq!(entries[2].breakdown, "");

        let rows = revenue_rows(&entries, 0.0235, CellStyle::Display);
        assert_eq!(rows[0][5], "Equivalent to 316,000 LORDS at $0.023500 per token");
    }

    #[test]
    fn test_season_one_village_passes_breakdown() {
        let entries = with_price_breakdowns(RevenueEntry::season_one(), 0.02);
        let village = entries
            .iter()
            .find(|e| e.category == "Village Passes")
            .unwrap();
        assert!(village.breakdown.ends_with("LORDS at $0.020000 per token"));
    }

    #[test]
    fn test_csv_keeps_full_split_address() {
        let address = "0x045c587318c9ebcf2fbe21febf288ee2e3597a21cd48676005a5770a50d433c5";
        let mut bridge = entry("Bridge Fees", 1000.0, MULTIPLE_WALLETS);
        bridge.splits = vec![RevenueSplit {
            label: "Velords".to_string(),
            amount: 500.0,
            address: address.to_string(),
        }];
        let rows = revenue_rows(&[bridge], 0.02, CellStyle::Raw);
        let csv = render_csv(&COLUMNS, &rows);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Category,LORDS,USD,Share,Address,Breakdown");
        assert_eq!(lines[1], format!("Bridge Fees,1000,20.00,100,{},", MULTIPLE_WALLETS));
        assert_eq!(lines[2], format!("  Velords,500,10.00,50,{},", address));
    }

    #[test]
    fn test_season_one_table_renders() {
        let entries = RevenueEntry::season_one();
        let rows = revenue_rows(&entries, 0.02, CellStyle::Display);
        assert!(rows.len() >= entries.len());
    }
}
