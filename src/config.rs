//! Store configuration
//!
//! Where the two data files live and how they are formatted. The CLI builds
//! this from its arguments via [`CliArgs::to_store_config`](crate::cli::CliArgs::to_store_config).

use std::path::{Path, PathBuf};

/// Default file name of the card collection
pub const DEFAULT_CARDS_FILE: &str = "cards.json";

/// Default file name of the transaction collection
pub const DEFAULT_TRANSACTIONS_FILE: &str = "transactions.json";

/// Configuration for the JSON file pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the cards file
    pub cards_path: PathBuf,

    /// Path of the transactions file
    pub transactions_path: PathBuf,

    /// Write indented JSON instead of a single line
    pub pretty: bool,
}

impl StoreConfig {
    /// Configuration with the default file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        StoreConfig {
            cards_path: dir.join(DEFAULT_CARDS_FILE),
            transactions_path: dir.join(DEFAULT_TRANSACTIONS_FILE),
            pretty: false,
        }
    }

    /// Override the file names, keeping them inside `dir`
    pub fn with_file_names(dir: &Path, cards_file: &str, transactions_file: &str) -> Self {
        StoreConfig {
            cards_path: dir.join(cards_file),
            transactions_path: dir.join(transactions_file),
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for StoreConfig {
    /// `cards.json` and `transactions.json` in the working directory
    fn default() -> Self {
        Self::in_dir(Path::new("."))
    }
}
