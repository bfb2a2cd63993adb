//! # File Persistence
//!
//! Moves catalog and ledger text between the codec and the file system.
//!
//! ## Load / Save
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  load()                                                                 │
//! │    report.txt ──read bytes──► lossy UTF-8 ──► codec::decode_catalog    │
//! │    sales_report.txt ────────► lossy UTF-8 ──► codec::decode_ledger     │
//! │    (missing file = empty collection)                                    │
//! │                                                                         │
//! │  save()                                                                 │
//! │    codec::encode_catalog_text ──whole-file rewrite──► report.txt       │
//! │    codec::encode_ledger_text ───whole-file rewrite──► sales_report.txt │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two writes are independent. If the ledger write fails after the
//! catalog write succeeded, the files on disk disagree until the next
//! successful save.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use acervus_core::codec;
use acervus_core::{CatalogEntry, Invoice};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

/// The pair of flat files backing a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    catalog_path: PathBuf,
    ledger_path: PathBuf,
}

impl FileStorage {
    pub fn new(catalog_path: impl Into<PathBuf>, ledger_path: impl Into<PathBuf>) -> Self {
        FileStorage {
            catalog_path: catalog_path.into(),
            ledger_path: ledger_path.into(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        FileStorage::new(&config.catalog_path, &config.ledger_path)
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }

    /// Reads both files.
    ///
    /// ## Returns
    /// * `Ok((catalog_text, ledger_text))` - empty text for a missing file
    /// * `Err(PersistenceReadFailed)` - a file exists but cannot be read
    pub fn read(&self) -> StoreResult<(String, String)> {
        let catalog = read_text(&self.catalog_path)?;
        let ledger = read_text(&self.ledger_path)?;
        Ok((catalog, ledger))
    }

    /// Reads and decodes both files.
    pub fn load(&self) -> StoreResult<(Vec<CatalogEntry>, Vec<Invoice>)> {
        let (catalog_text, ledger_text) = self.read()?;
        let catalog = codec::decode_catalog_text(&catalog_text);
        let ledger = codec::decode_ledger_text(&ledger_text);

        info!(
            catalog = %self.catalog_path.display(),
            entries = catalog.len(),
            invoices = ledger.len(),
            "Loaded inventory files"
        );

        Ok((catalog, ledger))
    }

    /// Encodes and rewrites both files, catalog first.
    pub fn save(&self, catalog: &[CatalogEntry], ledger: &[Invoice]) -> StoreResult<()> {
        write_text(&self.catalog_path, &codec::encode_catalog_text(catalog))?;
        write_text(&self.ledger_path, &codec::encode_ledger_text(ledger))?;

        info!(
            catalog = %self.catalog_path.display(),
            entries = catalog.len(),
            invoices = ledger.len(),
            "Saved inventory files"
        );

        Ok(())
    }
}

impl From<&StoreConfig> for FileStorage {
    fn from(config: &StoreConfig) -> Self {
        FileStorage::from_config(config)
    }
}

fn read_text(path: &Path) -> StoreResult<String> {
    match fs::read(path) {
        Ok(bytes) => {
            debug!(path = %path.display(), bytes = bytes.len(), "Read file");
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "File missing, starting empty");
            Ok(String::new())
        }
        Err(e) => Err(StoreError::read_failed(path, e)),
    }
}

fn write_text(path: &Path, text: &str) -> StoreResult<()> {
    debug!(path = %path.display(), bytes = text.len(), "Writing file");
    fs::write(path, text).map_err(|e| StoreError::write_failed(path, e))
}
