//! cardbook Library
//! # Overview
//!
//! This library keeps bank-card records and their transaction histories in two
//! flat JSON files, and computes card balances from the transactions.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Card, Transaction, StoreError)
//! - [`cli`] - CLI arguments parsing and command execution
//! - [`config`] - Data file locations
//! - [`core`] - Business logic components:
//!   - [`core::store`] - Store operations and write-through persistence
//!   - [`core::card_registry`] - Card records keyed by number
//!   - [`core::transaction_ledger`] - Per-card transaction history and balances
//!   - [`core::filter`] - Date-range and category filters
//! - [`io`] - JSON file persistence and CSV statements
//! - [`logging`] - Subscriber setup for the binary
//!
//! # Persistence Model
//!
//! The whole state lives in memory. Every mutation rewrites both files in
//! full; there is no journaling and no atomicity across the two files. When
//! either file is missing on startup, two sample cards with a few
//! transactions are written.
//!
//! # Balances
//!
//! A balance is the sum of a card's signed transaction amounts (credits
//! positive, debits negative). It is recomputed on every read and is zero for
//! a card without transactions.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use config::StoreConfig;
pub use crate::core::{CardRegistry, Persistence, Store, TransactionFilter, TransactionLedger};
pub use io::{JsonFiles, MemoryPersistence};
pub use types::{Card, CardNumber, NewCard, StoreError, Transaction};
