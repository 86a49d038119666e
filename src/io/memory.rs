//! In-memory persistence
//!
//! Keeps the serialized JSON documents in memory instead of on disk. The data
//! still goes through the same serde path as [`JsonFiles`](super::JsonFiles),
//! so a store reloaded from it sees exactly what a file-backed store would.

use crate::core::traits::Persistence;
use crate::core::{CardRegistry, TransactionLedger};
use crate::types::StoreError;
use std::path::Path;

const CARDS_LABEL: &str = "memory:cards";
const TRANSACTIONS_LABEL: &str = "memory:transactions";

/// Memory-backed persistence, used by tests and benchmarks
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    cards: Option<String>,
    transactions: Option<String>,
    saves: usize,
}

impl MemoryPersistence {
    /// A backend that has never been saved to
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend holding two empty collections
    ///
    /// A store loaded from it starts empty instead of seeding sample data.
    pub fn empty() -> Self {
        MemoryPersistence {
            cards: Some("{}".to_string()),
            transactions: Some("{}".to_string()),
            saves: 0,
        }
    }

    /// Number of times the state has been written
    pub fn saves(&self) -> usize {
        self.saves
    }

    #[cfg(test)]
    fn transactions_json(&self) -> Option<&str> {
        self.transactions.as_deref()
    }
}

impl Persistence for MemoryPersistence {
    fn exists(&self) -> bool {
        self.cards.is_some() && self.transactions.is_some()
    }

    fn load(&self) -> Result<(CardRegistry, TransactionLedger), StoreError> {
        let cards = match &self.cards {
            Some(json) => serde_json::from_str(json)
                .map_err(|e| StoreError::serialization(Path::new(CARDS_LABEL), e))?,
            None => CardRegistry::new(),
        };
        let ledger = match &self.transactions {
            Some(json) => serde_json::from_str(json)
                .map_err(|e| StoreError::serialization(Path::new(TRANSACTIONS_LABEL), e))?,
            None => TransactionLedger::new(),
        };
        Ok((cards, ledger))
    }

    fn save(&mut self, cards: &CardRegistry, ledger: &TransactionLedger) -> Result<(), StoreError> {
        self.cards = Some(
            serde_json::to_string(cards)
                .map_err(|e| StoreError::serialization(Path::new(CARDS_LABEL), e))?,
        );
        self.transactions = Some(
            serde_json::to_string(ledger)
                .map_err(|e| StoreError::serialization(Path::new(TRANSACTIONS_LABEL), e))?,
        );
        self.saves += 1;
        Ok(())
    }
}
