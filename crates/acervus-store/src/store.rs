//! # Inventory Store
//!
//! The single owner of the catalog and the sales ledger.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    InventoryStore                                       │
//! │                                                                         │
//! │  catalog: Vec<CatalogEntry>          ledger: Vec<Invoice>              │
//! │  ───────────────────────────         ────────────────────              │
//! │  add ─────────► push                 (append only)                      │
//! │  delete ──────► remove first match                                      │
//! │  update ──────► replace quantity                                        │
//! │  sell ────────► quantity -= n  ═══════► push Invoice                    │
//! │                 (both or neither)                                       │
//! │                                                                         │
//! │  view_all / search / sales_report: read only                            │
//! │  load / save: via FileStorage + codec                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name Lookups
//! Every lookup takes the FIRST entry whose name matches case-insensitively.
//! `add` does not check for an existing name, so duplicates can coexist and
//! only the first of them is reachable by name.
//!
//! Nothing is written to disk until [`InventoryStore::save`] is called.

use acervus_core::codec;
use acervus_core::validation::{
    validate_price, validate_product_name, validate_sale_quantity, validate_stock_quantity,
};
use acervus_core::{CatalogEntry, CoreError, Invoice, Money, ReportLine, SalesReport};
use chrono::Utc;
use std::slice;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::persistence::FileStorage;

/// In-memory catalog and ledger plus the files they persist to.
///
/// ## Usage
/// ```rust,no_run
/// use acervus_core::Money;
/// use acervus_store::{InventoryStore, StoreConfig};
///
/// # fn main() -> Result<(), acervus_store::StoreError> {
/// let mut store = InventoryStore::open(&StoreConfig::default())?;
/// store.add("Rice", 50, Money::from_cents(4500))?;
/// let total = store.sell("rice", 20)?;
/// assert_eq!(total.to_string(), "900.00");
/// store.save()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct InventoryStore {
    catalog: Vec<CatalogEntry>,
    ledger: Vec<Invoice>,
    storage: FileStorage,
    dirty: bool,
}

impl InventoryStore {
    /// Creates an empty store backed by `storage`. Nothing is read.
    pub fn new(storage: FileStorage) -> Self {
        InventoryStore {
            catalog: Vec::new(),
            ledger: Vec::new(),
            storage,
            dirty: false,
        }
    }

    /// Creates a store for `config` and loads its files.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        let mut store = InventoryStore::new(FileStorage::from_config(config));
        store.load()?;
        Ok(store)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Replaces the in-memory state with the contents of both files.
    ///
    /// Missing files load as empty collections. On error the current state
    /// is kept.
    pub fn load(&mut self) -> StoreResult<()> {
        let (catalog, ledger) = self.storage.load()?;
        self.catalog = catalog;
        self.ledger = ledger;
        self.dirty = false;
        Ok(())
    }

    /// Replaces the in-memory state by decoding file contents directly.
    pub fn load_from_text(&mut self, catalog_text: &str, ledger_text: &str) {
        self.catalog = codec::decode_catalog_text(catalog_text);
        self.ledger = codec::decode_ledger_text(ledger_text);
        self.dirty = false;
        debug!(
            entries = self.catalog.len(),
            invoices = self.ledger.len(),
            "Loaded inventory from text"
        );
    }

    /// Rewrites both files from the in-memory state.
    ///
    /// ## Errors
    /// `PersistenceWriteFailed` if either file cannot be written. The
    /// in-memory state is unaffected and stays marked as unsaved.
    pub fn save(&mut self) -> StoreResult<()> {
        self.storage.save(&self.catalog, &self.ledger)?;
        self.dirty = false;
        Ok(())
    }

    /// Whether anything changed since the last load or save.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn storage(&self) -> &FileStorage {
        &self.storage
    }

    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// Appends a new entry stamped with the current time.
    ///
    /// Duplicate names are allowed; the new entry goes after any existing
    /// one with the same name.
    ///
    /// ## Errors
    /// `InvalidInput` for a blank name, a name with a line break, a
    /// negative quantity or a negative price.
    pub fn add(&mut self, name: &str, quantity: i64, price: Money) -> StoreResult<&CatalogEntry> {
        validate_product_name(name)?;
        validate_stock_quantity(quantity)?;
        validate_price(price)?;

        debug!(name = %name, quantity, price = %price, "Adding product");

        self.catalog
            .push(CatalogEntry::new(name, quantity, Utc::now(), price));
        self.dirty = true;

        let index = self.catalog.len() - 1;
        Ok(&self.catalog[index])
    }

    /// Removes and returns the first entry matching `name`.
    ///
    /// ## Errors
    /// `NotFound` if no entry matches.
    pub fn delete(&mut self, name: &str) -> StoreResult<CatalogEntry> {
        let index = self.position(name)?;
        let removed = self.catalog.remove(index);
        self.dirty = true;

        info!(name = %removed.name, "Deleted product");
        Ok(removed)
    }

    /// Replaces the quantity of the first entry matching `name`.
    ///
    /// ## Errors
    /// `InvalidInput` for a negative quantity (checked first), `NotFound`
    /// if no entry matches.
    pub fn update_quantity(&mut self, name: &str, new_quantity: i64) -> StoreResult<&CatalogEntry> {
        validate_stock_quantity(new_quantity)?;
        let index = self.position(name)?;

        let entry = &mut self.catalog[index];
        debug!(
            name = %entry.name,
            old = entry.quantity,
            new = new_quantity,
            "Updating quantity"
        );
        entry.quantity = new_quantity;
        self.dirty = true;

        Ok(&self.catalog[index])
    }

    /// Sells `quantity` units of the first entry matching `name`.
    ///
    /// ## Sale Sequence
    /// ```text
    /// sell("rice", 20)
    ///      │
    ///      ├── quantity <= 0?          → InvalidInput
    ///      ├── no entry named "rice"?  → NotFound
    ///      ├── 20 > entry.quantity?    → InsufficientStock
    ///      ├── price × 20 overflows?   → InvalidInput
    ///      │
    ///      ▼   (nothing mutated above this line)
    /// entry.quantity -= 20
    /// ledger.push(Invoice { name: entry.name, 20, now })
    ///      │
    ///      ▼
    /// returns price × 20
    /// ```
    ///
    /// The invoice records the catalog spelling of the name, not the
    /// spelling that was searched for.
    pub fn sell(&mut self, name: &str, quantity: i64) -> StoreResult<Money> {
        validate_sale_quantity(quantity)?;
        let index = self.position(name)?;

        let entry = &self.catalog[index];
        if !entry.can_sell(quantity) {
            return Err(CoreError::InsufficientStock {
                name: entry.name.clone(),
                available: entry.quantity,
                requested: quantity,
            }
            .into());
        }
        let total = entry
            .price
            .checked_multiply_quantity(quantity)
            .ok_or_else(|| CoreError::Overflow {
                what: format!("sale total for {}", entry.name),
            })?;

        let invoice = Invoice::new(entry.name.clone(), quantity, Utc::now());
        self.catalog[index].quantity -= quantity;
        self.ledger.push(invoice);
        self.dirty = true;

        info!(
            name = %self.catalog[index].name,
            quantity,
            remaining = self.catalog[index].quantity,
            total = %total,
            "Sold product"
        );

        Ok(total)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Iterates the catalog in insertion order.
    ///
    /// The iterator is lazy and cloneable, so a caller can walk it twice
    /// (e.g. once to size columns, once to print).
    pub fn view_all(&self) -> slice::Iter<'_, CatalogEntry> {
        self.catalog.iter()
    }

    /// Returns the first entry matching `name`, if any.
    pub fn search(&self, name: &str) -> Option<&CatalogEntry> {
        self.catalog.iter().find(|entry| entry.matches(name))
    }

    /// Prices every invoice with the CURRENT catalog price.
    ///
    /// ## Pricing Policy
    /// Invoices carry no price. Each line is priced from the first catalog
    /// entry matching the invoice name as it is now; a product that was
    /// deleted since the sale contributes zero. Changing a price therefore
    /// changes past totals.
    ///
    /// ## Errors
    /// `InvalidInput` (overflow) if a line, the total or the units sold
    /// exceed the representable amount.
    pub fn sales_report(&self) -> StoreResult<SalesReport> {
        let mut total = Money::zero();
        let mut units_sold: i64 = 0;
        let mut lines = Vec::with_capacity(self.ledger.len());

        for invoice in &self.ledger {
            let unit_price = self.search(&invoice.name).map(|entry| entry.price);
            let line_total = match unit_price {
                Some(price) => price
                    .checked_multiply_quantity(invoice.quantity)
                    .ok_or_else(|| CoreError::Overflow {
                        what: format!("report line for {}", invoice.name),
                    })?,
                None => Money::zero(),
            };
            total = total
                .checked_add(line_total)
                .ok_or_else(|| CoreError::Overflow {
                    what: "sales report total".to_string(),
                })?;
            units_sold = units_sold
                .checked_add(invoice.quantity)
                .ok_or_else(|| CoreError::Overflow {
                    what: "units sold".to_string(),
                })?;

            lines.push(ReportLine {
                invoice: invoice.clone(),
                unit_price,
                line_total,
            });
        }

        Ok(SalesReport {
            lines,
            units_sold,
            total,
        })
    }

    /// The catalog in insertion order.
    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    /// The ledger in sale order.
    pub fn ledger(&self) -> &[Invoice] {
        &self.ledger
    }

    fn position(&self, name: &str) -> StoreResult<usize> {
        self.catalog
            .iter()
            .position(|entry| entry.matches(name))
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()).into())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
