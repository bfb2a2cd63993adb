//! # acervus-store: Inventory Store for Acervus
//!
//! Owns the catalog and the sales ledger, enforces the inventory rules, and
//! keeps both collections in two flat text files.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Acervus Data Flow                                │
//! │                                                                         │
//! │  CLI action (sell "rice" 20)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  acervus-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ StoreConfig   │    │InventoryStore │    │ FileStorage  │  │   │
//! │  │   │ (config.rs)   │───►│  (store.rs)   │───►│(persistence) │  │   │
//! │  │   │ paths, label  │    │ catalog+ledger│    │ read / write │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────┬───────┘  │   │
//! │  │                                                    │           │   │
//! │  └────────────────────────────────────────────────────┼───────────┘   │
//! │                                                       ▼               │
//! │                            report.txt   sales_report.txt              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The inventory operations
//! - [`persistence`] - Reading and writing the two files
//! - [`config`] - File locations and currency label
//! - [`error`] - Store error types and error codes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use acervus_store::{InventoryStore, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let mut store = InventoryStore::open(&config)?;
//!
//! store.add("Rice", 50, "45.00".parse()?)?;
//! let total = store.sell("rice", 20)?;
//!
//! store.save()?;
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod persistence;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, StoreConfig};
pub use error::{ErrorCode, StoreError, StoreResult};
pub use persistence::FileStorage;
pub use store::InventoryStore;
