//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `card`: Card records and card numbers
//! - `transaction`: Transaction records and well-known categories
//! - `error`: Error types for the card store

pub mod card;
pub mod error;
pub mod transaction;

pub use card::{generate_cvc, Card, CardNumber, NewCard};
pub use error::StoreError;
pub use transaction::{
    parse_date, Transaction, AMOUNT_DECIMAL_PLACES, DEFAULT_CATEGORIES, DEPOSIT_CATEGORY,
    DEPOSIT_DESCRIPTION, MAX_DEPOSIT, WITHDRAWAL_CATEGORY, WITHDRAWAL_DESCRIPTION,
};
