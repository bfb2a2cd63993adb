//! # Domain Types
//!
//! Core domain types used throughout Acervus.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CatalogEntry   │   │    Invoice      │   │  SalesReport    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  name (frozen)  │   │  lines          │       │
//! │  │  quantity       │   │  quantity       │   │  total          │       │
//! │  │  date_added     │   │  date_sold      │   │                 │       │
//! │  │  price (Money)  │   │  (no price)     │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Catalog = Vec<CatalogEntry>        Ledger = Vec<Invoice>              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name Identity
//! Entries have no surrogate id. The name is the lookup key, compared
//! case-insensitively, and the catalog may hold several entries with the
//! same name; lookups always take the first match.
//!
//! Invoices copy the name at the time of sale. They are not linked to the
//! entry, so they outlive a deleted product.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::validation::names_match;

// =============================================================================
// Catalog Entry
// =============================================================================

/// A product tracked in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name, also the case-insensitive lookup key.
    pub name: String,

    /// Units currently in stock. Never negative.
    pub quantity: i64,

    /// When the entry was added. Set once, never updated.
    pub date_added: DateTime<Utc>,

    /// Unit price. Never negative.
    pub price: Money,
}

impl CatalogEntry {
    /// Creates an entry. Validation is the caller's job.
    pub fn new(
        name: impl Into<String>,
        quantity: i64,
        date_added: DateTime<Utc>,
        price: Money,
    ) -> Self {
        CatalogEntry {
            name: name.into(),
            quantity,
            date_added,
            price,
        }
    }

    /// Case-insensitive comparison against the full name.
    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// Checks if `quantity` units are in stock.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        quantity <= self.quantity
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// One completed sale in the ledger.
///
/// Immutable once created. Carries no price: report totals are priced from
/// the catalog as it is when the report runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Product name at time of sale (frozen).
    pub name: String,

    /// Units sold. Always positive.
    pub quantity: i64,

    /// When the sale happened.
    pub date_sold: DateTime<Utc>,
}

impl Invoice {
    pub fn new(name: impl Into<String>, quantity: i64, date_sold: DateTime<Utc>) -> Self {
        Invoice {
            name: name.into(),
            quantity,
            date_sold,
        }
    }
}

// =============================================================================
// Sales Report
// =============================================================================

/// One ledger line priced against the current catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub invoice: Invoice,

    /// Current price of the first catalog entry matching the invoice name,
    /// or `None` when the product is no longer cataloged.
    pub unit_price: Option<Money>,

    /// `unit_price × quantity`, zero when `unit_price` is `None`.
    pub line_total: Money,
}

/// The ledger with totals computed from current catalog prices.
///
/// Totals are not stable: changing or deleting a product after the sale
/// changes the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReport {
    pub lines: Vec<ReportLine>,

    /// Units sold across all lines, priced or not.
    pub units_sold: i64,

    pub total: Money,
}

impl SalesReport {
    /// Returns true when no sales have been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_entry_matches_case_insensitively() {
        let entry = CatalogEntry::new("Rice", 50, timestamp(), Money::from_cents(4500));
        assert!(entry.matches("rice"));
        assert!(entry.matches("RICE"));
        assert!(!entry.matches("Ric"));
        assert!(!entry.matches("Rice "));
    }

    #[test]
    fn test_can_sell() {
        let entry = CatalogEntry::new("Rice", 5, timestamp(), Money::from_cents(4500));
        assert!(entry.can_sell(5));
        assert!(!entry.can_sell(6));
    }

    #[test]
    fn test_report_is_empty() {
        let report = SalesReport {
            lines: vec![
                ReportLine {
                    invoice: Invoice::new("Rice", 2, timestamp()),
                    unit_price: Some(Money::from_cents(100)),
                    line_total: Money::from_cents(200),
                },
                ReportLine {
                    invoice: Invoice::new("Gone", 3, timestamp()),
                    unit_price: None,
                    line_total: Money::zero(),
                },
            ],
            units_sold: 5,
            total: Money::from_cents(200),
        };
        assert!(!report.is_empty());
        assert!(SalesReport::default().is_empty());
    }
}
