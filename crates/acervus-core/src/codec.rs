//! # Line Codec
//!
//! Converts the catalog and the ledger to and from their flat text form.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog (report.txt)            name,quantity,date-added,price        │
//! │  ───────────────────                                                    │
//! │  Rice,30,2026-10-18T09:30:00Z,45.00                                    │
//! │  Pen,100,2026-10-18T09:31:12.5Z,12.50                                  │
//! │                                                                         │
//! │  Ledger (sales_report.txt)       name,quantity-sold,date-sold          │
//! │  ─────────────────────────                                              │
//! │  Rice,20,2026-10-18T10:02:44.120Z                                      │
//! │                                                                         │
//! │  • one record per line, no header                                       │
//! │  • no quoting, no escaping, no whitespace tolerance                     │
//! │  • positional fields, exact field count                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Malformed Lines
//! A line with the wrong field count, or a field that fails to parse, is
//! dropped. Decoding never fails and never reports what it dropped; the
//! remaining lines are still returned in order.
//!
//! ## Known Limitation
//! Names are written verbatim. A name containing `,` gains an extra field
//! and is dropped on the next decode. Line breaks would split the record,
//! so names containing them are rejected before they reach the catalog.
//!
//! ## Timestamps
//! Written as RFC 3339 in UTC with the shortest lossless fraction, so a
//! decoded entry compares equal to the one that was encoded. Two legacy
//! forms are also read: `M/D/YYYY h:mm:ss AM` and `YYYY-MM-DD HH:MM:SS`.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use crate::money::Money;
use crate::types::{CatalogEntry, Invoice};
use crate::FIELD_SEPARATOR;

const LEGACY_TIMESTAMP_FORMATS: &[&str] = &["%m/%d/%Y %I:%M:%S %p", "%Y-%m-%d %H:%M:%S"];

// =============================================================================
// Timestamps
// =============================================================================

/// Formats a timestamp the way both files store it.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parses any timestamp form the files may contain.
///
/// Legacy forms carry no offset and are read as UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.with_timezone(&Utc));
    }

    LEGACY_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| naive.and_utc())
}

// =============================================================================
// Decode
// =============================================================================

/// Decodes catalog lines, dropping any line that is not a valid entry.
///
/// ## Example
/// ```rust
/// use acervus_core::codec::decode_catalog;
///
/// let entries = decode_catalog([
///     "Rice,50,2026-10-18T09:30:00Z,45.00",
///     "Broken,fifty,2026-10-18T09:30:00Z,45.00",
///     "Pen,10,2026-10-18T09:30:00Z",
/// ]);
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].name, "Rice");
/// ```
pub fn decode_catalog<I, S>(lines: I) -> Vec<CatalogEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| decode_catalog_line(line.as_ref()))
        .collect()
}

/// Decodes ledger lines, dropping any line that is not a valid invoice.
pub fn decode_ledger<I, S>(lines: I) -> Vec<Invoice>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| decode_ledger_line(line.as_ref()))
        .collect()
}

/// Decodes the full text of a catalog file.
pub fn decode_catalog_text(text: &str) -> Vec<CatalogEntry> {
    decode_catalog(text.lines())
}

/// Decodes the full text of a ledger file.
pub fn decode_ledger_text(text: &str) -> Vec<Invoice> {
    decode_ledger(text.lines())
}

fn decode_catalog_line(line: &str) -> Option<CatalogEntry> {
    let mut fields = line.split(FIELD_SEPARATOR);
    let name = fields.next()?;
    let quantity = fields.next()?;
    let date_added = fields.next()?;
    let price = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    let quantity = quantity.parse::<i64>().ok().filter(|q| *q >= 0)?;
    let date_added = parse_timestamp(date_added)?;
    let price = price.parse::<Money>().ok().filter(|p| !p.is_negative())?;

    Some(CatalogEntry::new(name, quantity, date_added, price))
}

fn decode_ledger_line(line: &str) -> Option<Invoice> {
    let mut fields = line.split(FIELD_SEPARATOR);
    let name = fields.next()?;
    let quantity = fields.next()?;
    let date_sold = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    let quantity = quantity.parse::<i64>().ok().filter(|q| *q > 0)?;
    let date_sold = parse_timestamp(date_sold)?;

    Some(Invoice::new(name, quantity, date_sold))
}

// =============================================================================
// Encode
// =============================================================================

/// Encodes one line per entry: `name,quantity,date-added,price`.
pub fn encode_catalog(entries: &[CatalogEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{name}{sep}{quantity}{sep}{date}{sep}{price}",
                name = entry.name,
                quantity = entry.quantity,
                date = format_timestamp(&entry.date_added),
                price = entry.price,
                sep = FIELD_SEPARATOR,
            )
        })
        .collect()
}

/// Encodes one line per invoice: `name,quantity-sold,date-sold`.
pub fn encode_ledger(invoices: &[Invoice]) -> Vec<String> {
    invoices
        .iter()
        .map(|invoice| {
            format!(
                "{name}{sep}{quantity}{sep}{date}",
                name = invoice.name,
                quantity = invoice.quantity,
                date = format_timestamp(&invoice.date_sold),
                sep = FIELD_SEPARATOR,
            )
        })
        .collect()
}

/// Encodes the full text of a catalog file.
pub fn encode_catalog_text(entries: &[CatalogEntry]) -> String {
    join_lines(encode_catalog(entries))
}

/// Encodes the full text of a ledger file.
pub fn encode_ledger_text(invoices: &[Invoice]) -> String {
    join_lines(encode_ledger(invoices))
}

/// Newline-terminates every line, so an empty collection is an empty file.
fn join_lines(lines: Vec<String>) -> String {
    let mut text = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        text.push_str(&line);
        text.push('\n');
    }
    text
}

// =============================================================================
// Unit Tests
// =============================================================================
