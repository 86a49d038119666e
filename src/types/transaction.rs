//! Transaction-related types for cardbook
//!
//! This module defines the transaction record stored per card, plus the
//! categories used by the deposit and withdrawal shortcuts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

/// Category recorded for deposits made through [`Store::deposit`](crate::Store::deposit)
pub const DEPOSIT_CATEGORY: &str = "Пополнение";

/// Description recorded for deposits
pub const DEPOSIT_DESCRIPTION: &str = "Пополнение карты";

/// Category recorded for withdrawals made through [`Store::withdraw`](crate::Store::withdraw)
pub const WITHDRAWAL_CATEGORY: &str = "Снятие";

/// Description recorded for withdrawals
pub const WITHDRAWAL_DESCRIPTION: &str = "Снятие с карты";

/// Largest amount a single deposit may credit
pub const MAX_DEPOSIT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Decimal places allowed in a deposit or withdrawal amount
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Categories offered when a transaction is entered by hand
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Покупки", "Развлечения", "Транспорт", "Другое"];

/// Accept only real calendar dates in `YYYY-MM-DD` form
///
/// Returns the input unchanged so it can be stored verbatim.
pub fn parse_date(value: &str) -> Result<String, String> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value, format)
        .map(|_| value.to_string())
        .map_err(|e| format!("'{}' is not a YYYY-MM-DD date: {}", value, e))
}

/// A signed monetary entry on a card
///
/// Positive amounts are credits, negative amounts are debits. Transactions are
/// append-only: once recorded they are never edited, only dropped together
/// with their card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// ISO-8601 calendar date (`YYYY-MM-DD`)
    ///
    /// Kept verbatim. Dates in this format order the same lexicographically
    /// and chronologically, which is what the date-range filter relies on.
    pub date: String,

    /// Signed amount, written to disk as a plain JSON number
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,

    /// Free-form category, matched exactly by the category filter
    pub category: String,

    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a transaction record
    pub fn new(
        date: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Transaction {
            date: date.into(),
            amount,
            category: category.into(),
            description: description.into(),
        }
    }
}
