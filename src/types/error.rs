//! Error types for cardbook
//!
//! The store has exactly one domain error on its core path: inserting a card
//! whose number is already taken. Everything else on that path degrades to
//! empty or zero results. The remaining variants cover the deposit and
//! withdrawal shortcuts and the persistence layer.
//!
//! # Error Categories
//!
//! - **Domain Errors**: duplicate card, invalid card input, invalid amount, insufficient funds
//! - **Persistence Errors**: file I/O and JSON (de)serialization
//! - **Export Errors**: CSV statement writing and reading

use rust_decimal::Decimal;
use std::path::Path;
use thiserror::Error;

/// Main error type for the card store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// A card with this number already exists
    ///
    /// Raised only by [`Store::add_card`](crate::Store::add_card); updates are upserts.
    #[error("Card {number} already exists")]
    DuplicateCard {
        /// The conflicting card number
        number: String,
    },

    /// Card input failed validation
    #[error("Invalid card: {reason}")]
    InvalidCard {
        /// What was wrong with the input
        reason: String,
    },

    /// Deposit or withdrawal amount outside what the shortcuts accept
    #[error("Invalid amount '{amount}': {reason}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
        /// Which limit it broke
        reason: String,
    },

    /// Withdrawal would take the balance below zero
    #[error("Insufficient funds on card {number}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Card number
        number: String,
        /// Current balance
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// I/O error while reading or writing a data file
    #[error("I/O error on {path}: {message}")]
    Io {
        /// File involved
        path: String,
        /// Description of the I/O error
        message: String,
    },

    /// A data file held JSON that does not match the expected layout
    #[error("Malformed data in {path}: {message}")]
    Serialization {
        /// File involved
        path: String,
        /// Description of the (de)serialization error
        message: String,
    },

    /// CSV statement could not be written or read
    #[error("CSV error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Csv {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the CSV error
        message: String,
    },
}

// Conversion from csv::Error to StoreError
impl From<csv::Error> for StoreError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        StoreError::Csv {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl StoreError {
    /// Create a DuplicateCard error
    pub fn duplicate_card(number: &str) -> Self {
        StoreError::DuplicateCard {
            number: number.to_string(),
        }
    }

    /// Create an InvalidCard error
    pub fn invalid_card(reason: &str) -> Self {
        StoreError::InvalidCard {
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal, reason: &str) -> Self {
        StoreError::InvalidAmount {
            amount,
            reason: reason.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(number: &str, balance: Decimal, requested: Decimal) -> Self {
        StoreError::InsufficientFunds {
            number: number.to_string(),
            balance,
            requested,
        }
    }

    /// Create an Io error tagged with the file it concerns
    pub fn io(path: &Path, error: std::io::Error) -> Self {
        StoreError::Io {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create a Serialization error tagged with the file it concerns
    pub fn serialization(path: &Path, error: serde_json::Error) -> Self {
        StoreError::Serialization {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }
}
