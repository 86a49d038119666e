//! JSON file persistence
//!
//! Stores the card registry and the transaction ledger as two whole-file JSON
//! documents:
//!
//! - cards file: `{ "<number>": { "number": .., "name": .., "cvc": .. }, .. }`
//! - transactions file: `{ "<number>": [ { "date": .., "amount": .., "category": .., "description": .. }, .. ], .. }`
//!
//! Every save rewrites both files from scratch. There is no journaling and no
//! atomicity across the two files.

use crate::config::StoreConfig;
use crate::core::traits::Persistence;
use crate::core::{CardRegistry, TransactionLedger};
use crate::types::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Two-file JSON backend
#[derive(Debug, Clone)]
pub struct JsonFiles {
    cards_path: PathBuf,
    transactions_path: PathBuf,
    pretty: bool,
}

impl JsonFiles {
    /// Create a backend for the files named in `config`
    ///
    /// Nothing is touched on disk until the first load or save.
    pub fn new(config: &StoreConfig) -> Self {
        JsonFiles {
            cards_path: config.cards_path.clone(),
            transactions_path: config.transactions_path.clone(),
            pretty: config.pretty,
        }
    }

    pub fn cards_path(&self) -> &Path {
        &self.cards_path
    }

    pub fn transactions_path(&self) -> &Path {
        &self.transactions_path
    }
}

impl Persistence for JsonFiles {
    fn exists(&self) -> bool {
        self.cards_path.exists() && self.transactions_path.exists()
    }

    fn load(&self) -> Result<(CardRegistry, TransactionLedger), StoreError> {
        let cards: CardRegistry = read_or_default(&self.cards_path)?;
        let ledger: TransactionLedger = read_or_default(&self.transactions_path)?;
        Ok((cards, ledger))
    }

    fn save(&mut self, cards: &CardRegistry, ledger: &TransactionLedger) -> Result<(), StoreError> {
        write_json(&self.cards_path, cards, self.pretty)?;
        write_json(&self.transactions_path, ledger, self.pretty)?;
        Ok(())
    }
}

/// Parse a JSON document, or return the empty value if the file is missing
fn read_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, StoreError> {
    if !path.exists() {
        debug!(path = %path.display(), "Data file missing, starting empty");
        return Ok(T::default());
    }

    let bytes = fs::read(path).map_err(|e| StoreError::io(path, e))?;
    let value = serde_json::from_slice(&bytes).map_err(|e| StoreError::serialization(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "Data file loaded");
    Ok(value)
}

/// Replace a file with the JSON form of `value`
fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<(), StoreError> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    }
    .map_err(|e| StoreError::serialization(path, e))?;

    fs::write(path, &bytes).map_err(|e| StoreError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "Data file written");
    Ok(())
}
