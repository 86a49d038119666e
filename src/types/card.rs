//! Card-related types for cardbook
//!
//! This module defines the card record and the card number key used to
//! address both the card collection and the transaction collection.

use super::error::StoreError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Digits in a generated card number, leading `4` included
pub const GENERATED_NUMBER_LEN: usize = 16;

/// Digits in a generated CVC
pub const GENERATED_CVC_LEN: usize = 3;

/// Card number
///
/// The unique key of a card record. Whitespace is stripped on construction so
/// that a number typed as `4276 1234 5678 9012` and one typed without spaces
/// address the same card. Numbers read from disk are normalized the same way.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CardNumber(String);

impl CardNumber {
    /// Build a card number from user input, dropping all whitespace
    pub fn new(input: &str) -> Self {
        CardNumber(input.chars().filter(|c| !c.is_whitespace()).collect())
    }

    /// A random number in the usual 16-digit form, starting with `4`
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        CardNumber(format!(
            "4{}",
            random_digits(&mut rng, GENERATED_NUMBER_LEN - 1)
        ))
    }

    /// The raw digits as stored on disk
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the number is non-empty and made only of ASCII digits
    pub fn is_numeric(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(|c| c.is_ascii_digit())
    }
}

/// A random three-digit CVC
pub fn generate_cvc() -> String {
    random_digits(&mut rand::rng(), GENERATED_CVC_LEN)
}

fn random_digits(rng: &mut impl Rng, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// Groups of four, the way the number is printed on a card
impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chars: Vec<char> = self.0.chars().collect();
        for (i, group) in chars.chunks(4).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            for c in group {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

impl From<&str> for CardNumber {
    fn from(value: &str) -> Self {
        CardNumber::new(value)
    }
}

impl From<String> for CardNumber {
    fn from(value: String) -> Self {
        CardNumber::new(&value)
    }
}

impl From<CardNumber> for String {
    fn from(number: CardNumber) -> Self {
        number.0
    }
}

/// Card record
///
/// Stored as-is in the cards file. The CVC is kept in plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique card number
    pub number: CardNumber,

    /// Holder name, "<first> <last>" for cards created through [`NewCard`]
    pub name: String,

    /// Card verification code
    ///
    /// Older files may omit it; it then loads as an empty string.
    #[serde(default)]
    pub cvc: String,
}

impl Card {
    /// Create a card record
    pub fn new(number: impl Into<CardNumber>, name: impl Into<String>, cvc: impl Into<String>) -> Self {
        Card {
            number: number.into(),
            name: name.into(),
            cvc: cvc.into(),
        }
    }
}

/// Input for creating a card from separate first and last names
#[derive(Debug, Clone)]
pub struct NewCard {
    pub first_name: String,
    pub last_name: String,
    pub number: CardNumber,
    pub cvc: String,
}

impl NewCard {
    /// Check the names and build the card record
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCard`]
    /// if either name is blank.
    pub fn validate(self) -> Result<Card, StoreError> {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        if first.is_empty() || last.is_empty() {
            return Err(StoreError::invalid_card(
                "first and last name are both required",
            ));
        }
        Ok(Card {
            number: self.number,
            name: format!("{} {}", first, last),
            cvc: self.cvc,
        })
    }
}
