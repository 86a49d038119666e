//! CSV format handling for card statements
//!
//! This module centralizes all CSV format concerns, providing:
//! - StatementRecord structure for (de)serialization
//! - Conversion from CSV records to transactions
//! - Statement output serialization
//!
//! Statements use the columns `date,amount,category,description`.

use crate::types::{parse_date, StoreError, Transaction};
use csv::{ReaderBuilder, Trim, Writer};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::str::FromStr;

/// CSV row of a card statement
///
/// The amount is carried as text so that it is written exactly as the
/// decimal prints and parsed without going through a float.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StatementRecord {
    pub date: String,
    pub amount: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl From<&Transaction> for StatementRecord {
    fn from(tx: &Transaction) -> Self {
        StatementRecord {
            date: tx.date.clone(),
            amount: tx.amount.to_string(),
            category: tx.category.clone(),
            description: tx.description.clone(),
        }
    }
}

/// Convert a StatementRecord to a Transaction
///
/// # Returns
///
/// Result containing either:
/// - Ok(Transaction) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_statement_record(record: StatementRecord) -> Result<Transaction, String> {
    let date = record.date.trim();
    if date.is_empty() {
        return Err("Missing date".to_string());
    }
    let date = parse_date(date)?;

    let amount = Decimal::from_str(record.amount.trim())
        .map_err(|_| format!("Invalid amount '{}' on {}", record.amount, record.date))?;

    Ok(Transaction::new(
        date,
        amount,
        record.category,
        record.description,
    ))
}

/// Write a card statement in CSV format
///
/// Transactions are written in the order given.
///
/// # Errors
///
/// Returns [`StoreError::Csv`] if a row cannot be written or flushed.
pub fn write_statement_csv(
    transactions: &[&Transaction],
    output: &mut dyn Write,
) -> Result<(), StoreError> {
    let mut writer = Writer::from_writer(output);

    // An empty statement still gets its header
    if transactions.is_empty() {
        writer.write_record(["date", "amount", "category", "description"])?;
    }

    for tx in transactions {
        writer.serialize(StatementRecord::from(*tx))?;
    }

    writer.flush().map_err(|e| StoreError::Csv {
        line: None,
        message: format!("Failed to flush output: {}", e),
    })?;

    Ok(())
}

/// Read a CSV statement
///
/// Each row yields either a transaction or a message explaining why it was
/// rejected. A bad row does not stop the rest from being read.
pub fn read_statement_csv(input: impl Read) -> Vec<Result<Transaction, String>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    reader
        .deserialize::<StatementRecord>()
        .map(|result| {
            result
                .map_err(|e| StoreError::from(e).to_string())
                .and_then(convert_statement_record)
        })
        .collect()
}
