//! Number formatting and tabular output shared by the report commands

use anyhow::Result;
use eternum::{normalize, shorten};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Group the integer digits of `digits` with commas
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format with thousands separators and exactly `decimals` fraction digits
fn format_fixed(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    // "-0.00" reads as noise
    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Token amount: grouped, at most two fraction digits, trailing zeros dropped
pub fn format_amount(value: f64) -> String {
    let fixed = format_fixed(value, 2);
    match fixed.split_once('.') {
        Some((int_part, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                int_part.to_string()
            } else {
                format!("{}.{}", int_part, frac)
            }
        }
        None => fixed,
    }
}

/// Grouped whole number
pub fn format_whole(value: f64) -> String {
    format_fixed(value, 0)
}

/// Dollar amount with cents
pub fn format_usd(value: f64) -> String {
    let fixed = format_fixed(value, 2);
    match fixed.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", fixed),
    }
}

/// Percentage with two decimals (`12.50%`)
pub fn format_percent(percent: f64) -> String {
    format!("{}%", format_fixed(percent, 2))
}

pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// How cell values are written: readable for tables, lossless for CSV
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Display,
    Raw,
}

impl CellStyle {
    pub fn for_format(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => CellStyle::Raw,
            OutputFormat::Table | OutputFormat::Json => CellStyle::Display,
        }
    }

    /// Shortened for display; canonical form (or the input, if malformed) raw
    pub fn address(self, address: &str) -> String {
        match self {
            CellStyle::Display => shorten(address),
            CellStyle::Raw => normalize(address).unwrap_or_else(|_| address.to_string()),
        }
    }

    pub fn amount(self, value: f64) -> String {
        match self {
            CellStyle::Display => format_amount(value),
            CellStyle::Raw => raw_number(value),
        }
    }

    pub fn whole(self, value: f64) -> String {
        match self {
            CellStyle::Display => format_whole(value),
            CellStyle::Raw => raw_number(value.round()),
        }
    }

    pub fn usd(self, value: f64) -> String {
        match self {
            CellStyle::Display => format_usd(value),
            CellStyle::Raw => format!("{:.2}", finite_or_zero(value)),
        }
    }

    /// `percent` is 0..=100
    pub fn percent(self, percent: f64) -> String {
        match self {
            CellStyle::Display => format_percent(percent),
            CellStyle::Raw => raw_number(percent),
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Shortest exact decimal form, no grouping
fn raw_number(value: f64) -> String {
    let value = finite_or_zero(value);
    // -0.0 prints as "-0"
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Column alignment for table output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub align: Align,
}

impl Column {
    pub const fn left(name: &'static str) -> Self {
        Self {
            name,
            align: Align::Left,
        }
    }

    pub const fn right(name: &'static str) -> Self {
        Self {
            name,
            align: Align::Right,
        }
    }
}

/// Render rows as an aligned table with a header rule
pub fn render_table(columns: &[Column], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.name.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(columns.iter().zip(&widths))
            .map(|(cell, (column, width))| match column.align {
                Align::Left => format!("{:<width$}", cell, width = width),
                Align::Right => format!("{:>width$}", cell, width = width),
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header = format_row(columns.iter().map(|c| c.name).collect());
    let rule_len: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

/// Render rows as CSV with a header line
pub fn render_csv(columns: &[Column], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    let header: Vec<&str> = columns.iter().map(|c| c.name).collect();
    out.push_str(&header.join(","));
    out.push('\n');
    for row in rows {
        let values: Vec<String> = row.iter().map(|v| escape_csv(v)).collect();
        out.push_str(&values.join(","));
        out.push('\n');
    }
    out
}

/// Print a report in the requested format.
///
/// `rows` feed table and CSV output and should be built with
/// [`CellStyle::for_format`]; JSON serializes `records`.
pub fn print_report<T: Serialize>(
    format: OutputFormat,
    columns: &[Column],
    rows: &[Vec<String>],
    records: &T,
) -> Result<()> {
    match format {
        OutputFormat::Table => print!("{}", render_table(columns, rows)),
        OutputFormat::Csv => print!("{}", render_csv(columns, rows)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
    }
    Ok(())
}
