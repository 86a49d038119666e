//! Card store
//!
//! This module provides the Store that fronts the card registry and the
//! transaction ledger, and persists both after every change.
//!
//! The store enforces the few rules the data model has:
//! - Card numbers are unique on insert; updates are unchecked upserts
//! - Deleting a card deletes its transactions with it
//! - Every mutation rewrites the full state through the [`Persistence`] backend
//!
//! Reads are permissive: an unknown card number yields no card, no
//! transactions, and a zero balance.

use crate::config::StoreConfig;
use crate::core::card_registry::CardRegistry;
use crate::core::filter::TransactionFilter;
use crate::core::sample::sample_data;
use crate::core::traits::Persistence;
use crate::core::transaction_ledger::TransactionLedger;
use crate::io::JsonFiles;
use crate::types::{
    Card, CardNumber, StoreError, Transaction, AMOUNT_DECIMAL_PLACES, DEPOSIT_CATEGORY,
    DEPOSIT_DESCRIPTION, MAX_DEPOSIT, WITHDRAWAL_CATEGORY, WITHDRAWAL_DESCRIPTION,
};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Card and transaction store
///
/// Holds the full state in memory. Mutating methods update memory first and
/// then write everything through the persistence backend; a failed write is
/// reported but the in-memory change is kept.
pub struct Store<P: Persistence> {
    cards: CardRegistry,
    ledger: TransactionLedger,
    persistence: P,
}

impl Store<JsonFiles> {
    /// Open the store on the JSON files named by `config`
    ///
    /// Seeds sample data if either file is missing.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let files = JsonFiles::new(config);
        debug!(
            cards = %files.cards_path().display(),
            transactions = %files.transactions_path().display(),
            "Opening JSON store"
        );
        Store::load(files)
    }
}

impl<P: Persistence> Store<P> {
    /// Load the store from a persistence backend
    ///
    /// If the backend has never been saved to, the loaded state is replaced
    /// with the sample cards and transactions, which are then saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing data cannot be read or the seeded
    /// data cannot be written.
    pub fn load(persistence: P) -> Result<Self, StoreError> {
        let seed = !persistence.exists();
        let (cards, ledger) = persistence.load()?;

        let mut store = Store {
            cards,
            ledger,
            persistence,
        };

        if seed {
            warn!("No saved data found, seeding sample cards");
            let (cards, ledger) = sample_data();
            store.cards = cards;
            store.ledger = ledger;
            store.persist()?;
        }

        debug!(
            cards = store.cards.len(),
            transactions = store.ledger.len(),
            "Store loaded"
        );
        Ok(store)
    }

    /// Re-read both collections from the backend, discarding in-memory state
    pub fn reload(&mut self) -> Result<(), StoreError> {
        let (cards, ledger) = self.persistence.load()?;
        self.cards = cards;
        self.ledger = ledger;
        debug!(cards = self.cards.len(), "Store reloaded");
        Ok(())
    }

    /// All cards, ordered by card number
    pub fn cards(&self) -> Vec<&Card> {
        self.cards.all()
    }

    /// Look up a card by number
    pub fn card(&self, number: &CardNumber) -> Option<&Card> {
        self.cards.get(number)
    }

    /// Every card paired with its current balance
    pub fn card_summaries(&self) -> Vec<(&Card, Decimal)> {
        self.cards
            .all()
            .into_iter()
            .map(|card| (card, self.ledger.balance(&card.number)))
            .collect()
    }

    /// Register a new card
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCard`] if the number is already taken,
    /// or a persistence error if the save fails.
    pub fn add_card(&mut self, card: Card) -> Result<(), StoreError> {
        let number = card.number.clone();
        if let Err(e) = self.cards.insert_new(card) {
            warn!(card = %number, "Rejected duplicate card");
            return Err(e);
        }
        info!(card = %number, "Card added");
        self.persist()
    }

    /// Insert or replace a card record
    ///
    /// There is no existence check: updating an unknown number creates it.
    pub fn update_card(&mut self, card: Card) -> Result<(), StoreError> {
        let number = card.number.clone();
        let previous = self.cards.upsert(card);
        info!(card = %number, created = previous.is_none(), "Card saved");
        self.persist()
    }

    /// Delete a card together with its transactions
    ///
    /// Returns `false` and writes nothing if the card does not exist.
    pub fn delete_card(&mut self, number: &CardNumber) -> Result<bool, StoreError> {
        if self.cards.remove(number).is_none() {
            debug!(card = %number, "Delete ignored, no such card");
            return Ok(false);
        }
        let removed = self.ledger.remove_card(number);
        info!(card = %number, transactions = removed, "Card deleted");
        self.persist()?;
        Ok(true)
    }

    /// A card's transactions, optionally filtered, oldest first
    pub fn transactions(
        &self,
        number: &CardNumber,
        filter: Option<&TransactionFilter>,
    ) -> Vec<&Transaction> {
        match filter {
            Some(filter) if !filter.is_empty() => self.ledger.filtered(number, filter),
            _ => self.ledger.for_card(number).iter().collect(),
        }
    }

    /// Append a transaction to a card's history
    ///
    /// The card is not required to exist.
    pub fn add_transaction(&mut self, number: &CardNumber, tx: Transaction) -> Result<(), StoreError> {
        if !self.cards.contains(number) {
            debug!(card = %number, "Recording transaction for unregistered card");
        }
        info!(card = %number, amount = %tx.amount, category = %tx.category, "Transaction added");
        self.ledger.append(number, tx);
        self.persist()
    }

    /// Append several transactions to a card's history with a single write
    ///
    /// Returns how many were appended. Nothing is written for an empty batch.
    pub fn import_transactions(
        &mut self,
        number: &CardNumber,
        transactions: Vec<Transaction>,
    ) -> Result<usize, StoreError> {
        let count = transactions.len();
        if count == 0 {
            return Ok(0);
        }
        for tx in transactions {
            self.ledger.append(number, tx);
        }
        info!(card = %number, transactions = count, "Transactions imported");
        self.persist()?;
        Ok(count)
    }

    /// Current balance of a card, zero if it has no transactions
    pub fn balance(&self, number: &CardNumber) -> Decimal {
        self.ledger.balance(number)
    }

    /// Credit a card
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidAmount`] unless `amount` is positive, has
    /// at most two decimal places and does not exceed [`MAX_DEPOSIT`].
    pub fn deposit(
        &mut self,
        number: &CardNumber,
        amount: Decimal,
        date: impl Into<String>,
    ) -> Result<(), StoreError> {
        check_amount(amount)?;
        if amount > MAX_DEPOSIT {
            return Err(StoreError::invalid_amount(
                amount,
                &format!("must not exceed {}", MAX_DEPOSIT),
            ));
        }
        self.add_transaction(
            number,
            Transaction::new(date, amount, DEPOSIT_CATEGORY, DEPOSIT_DESCRIPTION),
        )
    }

    /// Debit a card, without letting the balance go below zero
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidAmount`] unless `amount` is positive with
    /// at most two decimal places, and [`StoreError::InsufficientFunds`] if it
    /// exceeds the balance.
    pub fn withdraw(
        &mut self,
        number: &CardNumber,
        amount: Decimal,
        date: impl Into<String>,
    ) -> Result<(), StoreError> {
        check_amount(amount)?;

        let balance = self.balance(number);
        if amount > balance {
            warn!(card = %number, %balance, requested = %amount, "Rejected overdraw");
            return Err(StoreError::insufficient_funds(
                number.as_str(),
                balance,
                amount,
            ));
        }

        self.add_transaction(
            number,
            Transaction::new(date, -amount, WITHDRAWAL_CATEGORY, WITHDRAWAL_DESCRIPTION),
        )
    }

    /// The persistence backend
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    // Write the whole state; called after every mutation
    fn persist(&mut self) -> Result<(), StoreError> {
        self.persistence.save(&self.cards, &self.ledger)
    }
}

// Limits shared by deposits and withdrawals
fn check_amount(amount: Decimal) -> Result<(), StoreError> {
    if amount <= Decimal::ZERO {
        return Err(StoreError::invalid_amount(amount, "must be greater than zero"));
    }
    if amount.normalize().scale() > AMOUNT_DECIMAL_PLACES {
        return Err(StoreError::invalid_amount(
            amount,
            &format!("at most {} decimal places", AMOUNT_DECIMAL_PLACES),
        ));
    }
    Ok(())
}
