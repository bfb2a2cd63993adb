//! # acervus-core: Pure Business Logic for Acervus
//!
//! This crate holds the domain model of the inventory tracker and the flat
//! text codec used to persist it. Nothing in here touches the file system.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Acervus Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (acervus)                           │   │
//! │  │     Menu ──► parse input ──► store operation ──► render         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    acervus-store                                │   │
//! │  │        InventoryStore (catalog + ledger), file persistence      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ acervus-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   codec   │  │ validation│  │   │
//! │  │   │  Entry    │  │   Money   │  │ encode_*  │  │   rules   │  │   │
//! │  │   │  Invoice  │  │  parsing  │  │ decode_*  │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO STDIN • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (CatalogEntry, Invoice, SalesReport)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`codec`] - Line-oriented comma-separated text format
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and name matching
//!
//! ## Example Usage
//!
//! ```rust
//! use acervus_core::codec;
//! use acervus_core::money::Money;
//!
//! let price: Money = "45.00".parse().unwrap();
//! assert_eq!(price.cents(), 4500);
//!
//! // Malformed lines are dropped, never reported
//! let entries = codec::decode_catalog(["Rice,abc,2026-01-01T00:00:00Z,45.00"]);
//! assert!(entries.is_empty());
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ParseMoneyError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Field separator of both persisted files.
///
/// Names are written verbatim, so a name containing this character splits
/// into an extra field and the line is dropped on the next load.
pub const FIELD_SEPARATOR: char = ',';
