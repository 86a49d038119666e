//! Core traits for persisting the store
//!
//! The store keeps its state in memory and hands the whole of it to a
//! [`Persistence`] backend after every change. Backends decide where the two
//! collections live: the JSON file pair used by the application, or memory
//! for tests and benchmarks.

use crate::core::card_registry::CardRegistry;
use crate::core::transaction_ledger::TransactionLedger;
use crate::types::StoreError;

/// Trait for loading and saving the card and transaction collections
///
/// Both collections are always read and written together as a unit.
pub trait Persistence {
    /// Whether both collections have been saved before
    ///
    /// A store opened on a backend where this is false seeds sample data.
    fn exists(&self) -> bool;

    /// Read both collections
    ///
    /// A collection that has never been saved loads as empty.
    fn load(&self) -> Result<(CardRegistry, TransactionLedger), StoreError>;

    /// Overwrite both collections with the given state
    fn save(&mut self, cards: &CardRegistry, ledger: &TransactionLedger) -> Result<(), StoreError>;
}
