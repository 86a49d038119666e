//! Card registry module
//!
//! This module provides the `CardRegistry` struct which holds every card
//! record in memory, keyed by card number.
//!
//! The CardRegistry is responsible for:
//! - Rejecting inserts of an already-registered number
//! - Upserting edited cards without any existence check
//! - Providing ordered card listings for display

use crate::types::{Card, CardNumber, StoreError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// In-memory card collection
///
/// Serializes as a JSON object mapping card number to card record, which is
/// exactly the layout of the cards file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardRegistry {
    /// Map of card numbers to card records
    cards: BTreeMap<CardNumber, Card>,
}

impl CardRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        CardRegistry {
            cards: BTreeMap::new(),
        }
    }

    /// Insert a card whose number is not yet registered
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCard`] if the number is already present.
    /// The registry is left unchanged in that case.
    pub fn insert_new(&mut self, card: Card) -> Result<(), StoreError> {
        if self.cards.contains_key(&card.number) {
            return Err(StoreError::duplicate_card(card.number.as_str()));
        }
        self.cards.insert(card.number.clone(), card);
        Ok(())
    }

    /// Insert or replace a card
    ///
    /// Returns the previous record stored under the same number, if any.
    pub fn upsert(&mut self, card: Card) -> Option<Card> {
        self.cards.insert(card.number.clone(), card)
    }

    /// Remove a card, returning it if it was present
    pub fn remove(&mut self, number: &CardNumber) -> Option<Card> {
        self.cards.remove(number)
    }

    /// Look up a card by number
    pub fn get(&self, number: &CardNumber) -> Option<&Card> {
        self.cards.get(number)
    }

    pub fn contains(&self, number: &CardNumber) -> bool {
        self.cards.contains_key(number)
    }

    /// All cards, ordered by card number
    pub fn all(&self) -> Vec<&Card> {
        self.cards.values().collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for CardRegistry {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        CardRegistry {
            cards: iter
                .into_iter()
                .map(|card| (card.number.clone(), card))
                .collect(),
        }
    }
}
