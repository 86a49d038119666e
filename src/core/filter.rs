//! Transaction filtering
//!
//! A filter combines up to three criteria with AND semantics:
//! - `date_from`: keep transactions dated on or after this date
//! - `date_to`: keep transactions dated on or before this date
//! - `category`: keep transactions whose category matches exactly
//!
//! Unset and empty criteria are ignored, so a filter built from blank form
//! fields matches everything. Dates are compared as ISO-8601 strings.

use crate::types::Transaction;

/// Criteria for narrowing a card's transaction list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Inclusive lower date bound
    pub date_from: Option<String>,
    /// Inclusive upper date bound
    pub date_to: Option<String>,
    /// Exact category
    pub category: Option<String>,
}

impl TransactionFilter {
    /// A filter that matches every transaction
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_date(mut self, date: impl Into<String>) -> Self {
        self.date_from = Some(date.into());
        self
    }

    pub fn to_date(mut self, date: impl Into<String>) -> Self {
        self.date_to = Some(date.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether no criterion is in effect
    pub fn is_empty(&self) -> bool {
        active(&self.date_from).is_none()
            && active(&self.date_to).is_none()
            && active(&self.category).is_none()
    }

    /// Check a transaction against every active criterion
    pub fn matches(&self, tx: &Transaction) -> bool {
        let after_start = active(&self.date_from).is_none_or(|from| tx.date.as_str() >= from);
        let before_end = active(&self.date_to).is_none_or(|to| tx.date.as_str() <= to);
        let in_category = active(&self.category).is_none_or(|category| tx.category == category);

        after_start && before_end && in_category
    }
}

// Empty strings count as "not set"
fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.is_empty())
}
