//! Per-card transaction history
//!
//! This module provides the TransactionLedger component that keeps an ordered,
//! append-only list of transactions for each card number, and derives balances
//! from it.
//!
//! # Balances
//!
//! Balances are never stored. Each call to [`TransactionLedger::balance`] sums
//! the card's amounts from scratch, so the cost is linear in the number of
//! transactions on that card.
//!
//! # References
//!
//! Appending does not check that the card exists: a transaction recorded for an
//! unknown number is kept under that number like any other.

use crate::core::filter::TransactionFilter;
use crate::types::{CardNumber, Transaction};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Transaction history for all cards
///
/// Serializes as a JSON object mapping card number to an array of transaction
/// records, which is exactly the layout of the transactions file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionLedger {
    /// Map of card number to transactions in insertion order
    entries: BTreeMap<CardNumber, Vec<Transaction>>,
}

impl TransactionLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        TransactionLedger {
            entries: BTreeMap::new(),
        }
    }

    /// Append a transaction to a card's history
    pub fn append(&mut self, number: &CardNumber, tx: Transaction) {
        self.entries.entry(number.clone()).or_default().push(tx);
    }

    /// Drop a card's whole history
    ///
    /// Returns the number of transactions removed.
    pub fn remove_card(&mut self, number: &CardNumber) -> usize {
        self.entries.remove(number).map_or(0, |txs| txs.len())
    }

    /// All transactions for a card, oldest first
    ///
    /// An unknown card yields an empty slice.
    pub fn for_card(&self, number: &CardNumber) -> &[Transaction] {
        self.entries.get(number).map(Vec::as_slice).unwrap_or_default()
    }

    /// Transactions for a card that pass `filter`, in insertion order
    pub fn filtered<'a>(
        &'a self,
        number: &CardNumber,
        filter: &TransactionFilter,
    ) -> Vec<&'a Transaction> {
        self.for_card(number)
            .iter()
            .filter(|tx| filter.matches(tx))
            .collect()
    }

    /// Sum of a card's amounts
    ///
    /// Zero for a card with no transactions. A sum outside the `Decimal`
    /// range is clamped to its bound and logged.
    pub fn balance(&self, number: &CardNumber) -> Decimal {
        self.for_card(number).iter().fold(Decimal::ZERO, |acc, tx| {
            acc.checked_add(tx.amount).unwrap_or_else(|| {
                warn!(card = %number, "Balance out of range, clamping");
                acc.saturating_add(tx.amount)
            })
        })
    }

    #[cfg(test)]
    pub(crate) fn card_numbers(&self) -> impl Iterator<Item = &CardNumber> {
        self.entries.keys()
    }

    /// Total number of transactions across all cards
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }
}
