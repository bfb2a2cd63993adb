//! Console rendering for tables, messages and `--json` payloads.
//!
//! Everything here returns a `String`; writing it out is the caller's job,
//! which keeps the menu loop and the one-shot commands printing the same
//! text.

use acervus_core::codec;
use acervus_core::{CatalogEntry, Money, SalesReport};
use acervus_store::StoreError;
use serde::Serialize;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const CATALOG_HEADERS: [&str; 4] = ["Product", "Quantity", "Date Added", "Price"];
const REPORT_HEADERS: [&str; 5] = [
    "Product",
    "Quantity Sold",
    "Date Sold",
    "Unit Price",
    "Line Total",
];

// =============================================================================
// Messages
// =============================================================================

pub fn added(entry: &CatalogEntry) -> String {
    format!(
        "Product added: {} ({} at {}).",
        entry.name, entry.quantity, entry.price
    )
}

pub fn deleted(entry: &CatalogEntry) -> String {
    format!("{} deleted from the inventory.", entry.name)
}

pub fn updated(entry: &CatalogEntry) -> String {
    format!("Quantity of {} updated to {}.", entry.name, entry.quantity)
}

pub fn sold(name: &str, quantity: i64, total: Money, currency: &str) -> String {
    format!(
        "Sold {} {} for a total of {}.",
        quantity,
        name,
        total.display_with(currency)
    )
}

pub fn saved() -> String {
    "Inventory saved.".to_string()
}

pub fn not_found(name: &str) -> String {
    format!("{name} was not found in the inventory.")
}

/// One-line error text: `Error [NOT_FOUND]: Product not found: Rice`.
pub fn error(err: &StoreError) -> String {
    format!("Error [{}]: {}", err.code().as_str(), err)
}

// =============================================================================
// Tables
// =============================================================================

/// Renders the catalog as an aligned table, in catalog order.
pub fn catalog_table<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let rows: Vec<[String; 4]> = entries.into_iter().map(catalog_row).collect();
    if rows.is_empty() {
        return "Inventory is empty.".to_string();
    }
    table(CATALOG_HEADERS, &rows)
}

/// Renders the ledger with per-line and overall totals.
pub fn report_table(report: &SalesReport, currency: &str) -> String {
    if report.is_empty() {
        return "No sales made yet.".to_string();
    }

    let rows: Vec<[String; 5]> = report
        .lines
        .iter()
        .map(|line| {
            [
                line.invoice.name.clone(),
                line.invoice.quantity.to_string(),
                line.invoice.date_sold.format(DATE_FORMAT).to_string(),
                line.unit_price
                    .map_or_else(|| "-".to_string(), |price| price.to_string()),
                line.line_total.to_string(),
            ]
        })
        .collect();

    let mut out = table(REPORT_HEADERS, &rows);
    out.push('\n');
    out.push_str(&format!(
        "Total Sales: {}",
        report.total.display_with(currency)
    ));
    out
}

fn catalog_row(entry: &CatalogEntry) -> [String; 4] {
    [
        entry.name.clone(),
        entry.quantity.to_string(),
        entry.date_added.format(DATE_FORMAT).to_string(),
        entry.price.to_string(),
    ]
}

fn table<const N: usize>(headers: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = headers.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = line(headers.to_vec());
    out.push('\n');
    let rule_width = widths.iter().sum::<usize>() + 2 * (N - 1);
    out.push_str(&"=".repeat(rule_width));
    for row in rows {
        out.push('\n');
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out
}

// =============================================================================
// JSON
// =============================================================================

/// Catalog entry as printed by `--json`; amounts are decimal text.
#[derive(Debug, Serialize)]
pub struct EntryView {
    pub name: String,
    pub quantity: i64,
    pub date_added: String,
    pub price: String,
}

impl From<&CatalogEntry> for EntryView {
    fn from(entry: &CatalogEntry) -> Self {
        EntryView {
            name: entry.name.clone(),
            quantity: entry.quantity,
            date_added: codec::format_timestamp(&entry.date_added),
            price: entry.price.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportLineView {
    pub name: String,
    pub quantity: i64,
    pub date_sold: String,
    pub unit_price: Option<String>,
    pub line_total: String,
}

#[derive(Debug, Serialize)]
pub struct ReportView {
    pub lines: Vec<ReportLineView>,
    pub units_sold: i64,
    pub total: String,
    pub currency: String,
}

impl ReportView {
    pub fn new(report: &SalesReport, currency: &str) -> Self {
        ReportView {
            lines: report
                .lines
                .iter()
                .map(|line| ReportLineView {
                    name: line.invoice.name.clone(),
                    quantity: line.invoice.quantity,
                    date_sold: codec::format_timestamp(&line.invoice.date_sold),
                    unit_price: line.unit_price.map(|price| price.to_string()),
                    line_total: line.line_total.to_string(),
                })
                .collect(),
            units_sold: report.units_sold,
            total: report.total.to_string(),
            currency: currency.to_string(),
        }
    }
}

/// Pretty JSON, or a JSON error object if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|error| {
        format!(
            "{{\"error\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use acervus_core::{Invoice, ReportLine};

    fn rice() -> CatalogEntry {
        let when = codec::parse_timestamp("2026-10-18T09:30:00Z").unwrap();
        CatalogEntry::new("Rice", 30, when, Money::from_cents(4500))
    }

    #[test]
    fn test_empty_catalog() {
        let entries: Vec<CatalogEntry> = Vec::new();
        assert_eq!(catalog_table(entries.iter()), "Inventory is empty.");
    }

    #[test]
    fn test_catalog_table_alignment() {
        let mut long = rice();
        long.name = "Basmati Rice".to_string();
        let entries = vec![rice(), long];

        let text = catalog_table(entries.iter());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Product       Quantity"));
        assert!(lines[1].chars().all(|c| c == '='));
        assert_eq!(
            lines[2],
            "Rice          30        2026-10-18 09:30:00  45.00"
        );
        assert!(lines[3].starts_with("Basmati Rice  30"));
    }

    #[test]
    fn test_report_table() {
        let when = codec::parse_timestamp("2026-10-18T10:00:00Z").unwrap();
        let report = SalesReport {
            lines: vec![
                ReportLine {
                    invoice: Invoice::new("Rice", 20, when),
                    unit_price: Some(Money::from_cents(4500)),
                    line_total: Money::from_cents(90000),
                },
                ReportLine {
                    invoice: Invoice::new("Pen", 2, when),
                    unit_price: None,
                    line_total: Money::zero(),
                },
            ],
            units_sold: 22,
            total: Money::from_cents(90000),
        };

        let text = report_table(&report, "PESOS");
        assert!(text.contains("Pen      2              2026-10-18 10:00:00  -"));
        assert!(text.ends_with("Total Sales: 900.00 PESOS"));
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(
            report_table(&SalesReport::default(), "PESOS"),
            "No sales made yet."
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            sold("Rice", 20, Money::from_cents(90000), "PESOS"),
            "Sold 20 Rice for a total of 900.00 PESOS."
        );
        assert_eq!(deleted(&rice()), "Rice deleted from the inventory.");

        let err: StoreError = acervus_core::CoreError::ProductNotFound("Tea".into()).into();
        assert_eq!(error(&err), "Error [NOT_FOUND]: Product not found: Tea");
    }

    #[test]
    fn test_json_views() {
        let json = to_json(&EntryView::from(&rice()));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Rice");
        assert_eq!(value["price"], "45.00");
        assert_eq!(value["date_added"], "2026-10-18T09:30:00Z");

        let view = ReportView::new(&SalesReport::default(), "USD");
        let value: serde_json::Value = serde_json::from_str(&to_json(&view)).unwrap();
        assert_eq!(value["total"], "0.00");
        assert_eq!(value["currency"], "USD");
        assert_eq!(value["lines"].as_array().unwrap().len(), 0);
    }
}
