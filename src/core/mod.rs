//! Core business logic module
//!
//! This module contains the card store components:
//! - `traits` - Persistence abstraction
//! - `store` - Store orchestration and write-through persistence
//! - `card_registry` - Card records keyed by number
//! - `transaction_ledger` - Per-card transaction history and balances
//! - `filter` - Date-range and category filtering
//! - `sample` - Data seeded on first run

pub mod card_registry;
pub mod filter;
pub mod sample;
pub mod store;
pub mod traits;
pub mod transaction_ledger;

pub use card_registry::CardRegistry;
pub use filter::TransactionFilter;
pub use store::Store;
pub use traits::Persistence;
pub use transaction_ledger::TransactionLedger;
