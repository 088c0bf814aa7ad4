//! Season pass value report

use anyhow::Result;
use eternum::data::SALES_FILE;
use eternum::{load_sales, PriceSnapshot, SeasonPassStats};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::{format_amount, format_usd, print_report, CellStyle, Column};
use std::path::Path;

const COLUMNS: [Column; 4] = [
    Column::left("Scenario"),
    Column::right("Passes"),
    Column::right("LORDS"),
    Column::right("USD"),
];

/// Handle the season-pass command
pub fn handle(
    config: &Config,
    prices: &PriceSnapshot,
    sales: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let path = config.data_path(sales, SALES_FILE);
    let sales = load_sales(&path)?;
    tracing::info!("Loaded {} marketplace sales from {}", sales.len(), path.display());

    let stats = SeasonPassStats::from_sales(&sales);
    if stats.total_sold == 0 {
        tracing::warn!("No priced sales found in {}", path.display());
    }

    if format == OutputFormat::Table {
        println!(
            "Sold: {}  Revenue: {} LORDS ({})  Average: {} LORDS ({})",
            stats.total_sold,
            format_amount(stats.total_revenue),
            format_usd(prices.lords_to_usd(stats.total_revenue)),
            format_amount(stats.average_price),
            format_usd(prices.lords_to_usd(stats.average_price)),
        );
        println!();
    }

    let rows = scenario_rows(&stats, prices, CellStyle::for_format(format));
    print_report(format, &COLUMNS, &rows, &stats)
}

fn scenario_rows(
    stats: &SeasonPassStats,
    prices: &PriceSnapshot,
    style: CellStyle,
) -> Vec<Vec<String>> {
    stats
        .scenarios
        .iter()
        .map(|scenario| {
            vec![
                scenario.title.to_string(),
                style.whole(scenario.count as f64),
                style.whole(scenario.value),
                style.usd(prices.lords_to_usd(scenario.value)),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eternum::MarketplaceSale;
    use std::fs;

    #[test]
    fn test_scenario_rows() {
        // 100 and 300 LORDS
        let sales = vec![
            MarketplaceSale {
                hex_price: "0x56BC75E2D63100000".to_string(),
            },
            MarketplaceSale {
                hex_price: "0x1043561A8829300000".to_string(),
            },
        ];
        let stats = SeasonPassStats::from_sales(&sales);
        let prices = PriceSnapshot::fixed(0.02, 1.15);
        let rows = scenario_rows(&stats, &prices, CellStyle::Display);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0][0], "Season Passes Used in Game");
        assert_eq!(rows[0][1], "2,173");
        assert_eq!(rows[0][2], "434,600");
        assert_eq!(rows[0][3], "$8,692.00");

        let rows = scenario_rows(&stats, &prices, CellStyle::Raw);
        assert_eq!(rows[0][1], "2173");
        assert_eq!(rows[0][2], "434600");
        assert_eq!(rows[0][3], "8692.00");
    }

    #[test]
    fn test_handle_empty_sales() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(SALES_FILE), "[]").unwrap();
        let config = Config {
            data_dir: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };

        let result = handle(&config, &PriceSnapshot::fallback(), None, OutputFormat::Json);
        assert!(result.is_ok());
    }
}
