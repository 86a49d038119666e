use crate::config::{StoreConfig, DEFAULT_CARDS_FILE, DEFAULT_TRANSACTIONS_FILE};
use crate::core::TransactionFilter;
use crate::types::parse_date;
use clap::{ArgAction, Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Keep bank cards and their transaction history in JSON files
#[derive(Parser, Debug)]
#[command(name = "cardbook")]
#[command(about = "Keep bank cards and their transaction history in JSON files", long_about = None)]
pub struct CliArgs {
    /// Directory holding the data files
    #[arg(long = "data-dir", value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// File name of the card collection
    #[arg(long = "cards-file", value_name = "NAME", default_value = DEFAULT_CARDS_FILE)]
    pub cards_file: String,

    /// File name of the transaction collection
    #[arg(
        long = "transactions-file",
        value_name = "NAME",
        default_value = DEFAULT_TRANSACTIONS_FILE
    )]
    pub transactions_file: String,

    /// Write indented JSON
    #[arg(long)]
    pub pretty: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Manage cards
    #[command(subcommand)]
    Cards(CardCommand),

    /// Manage a card's transactions
    #[command(subcommand)]
    Tx(TxCommand),

    /// Credit a card
    Deposit {
        number: String,
        amount: Decimal,
        /// Defaults to today
        #[arg(long, value_parser = parse_date)]
        date: Option<String>,
    },

    /// Debit a card, up to its balance
    Withdraw {
        number: String,
        amount: Decimal,
        /// Defaults to today
        #[arg(long, value_parser = parse_date)]
        date: Option<String>,
    },

    /// Show a card's balance
    Balance { number: String },

    /// Write a card's transactions as CSV to stdout
    Export {
        number: String,
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List the categories offered for manual transactions
    Categories,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CardCommand {
    /// List all cards with their balances
    List,

    /// Show one card
    Show { number: String },

    /// Register a new card
    Add {
        #[arg(long = "first-name")]
        first_name: String,
        #[arg(long = "last-name")]
        last_name: String,
        /// Generated when omitted
        #[arg(long)]
        number: Option<String>,
        /// Generated when omitted
        #[arg(long)]
        cvc: Option<String>,
    },

    /// Save a card, creating it if needed
    Update {
        #[arg(long)]
        number: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        cvc: String,
    },

    /// Delete a card and all its transactions
    Delete { number: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum TxCommand {
    /// List a card's transactions
    List {
        number: String,
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Record a transaction (negative amount for a debit)
    Add {
        number: String,
        #[arg(long, value_parser = parse_date)]
        date: String,
        #[arg(long, allow_negative_numbers = true)]
        amount: Decimal,
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Append transactions from a CSV statement
    Import { number: String, file: PathBuf },
}

/// Transaction filter options
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct FilterArgs {
    /// First date to include (YYYY-MM-DD)
    #[arg(long = "from", value_name = "DATE")]
    pub date_from: Option<String>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long = "to", value_name = "DATE")]
    pub date_to: Option<String>,

    /// Only this exact category
    #[arg(long)]
    pub category: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> TransactionFilter {
        TransactionFilter {
            date_from: self.date_from.clone(),
            date_to: self.date_to.clone(),
            category: self.category.clone(),
        }
    }
}

impl CliArgs {
    /// Create a StoreConfig from CLI arguments
    pub fn to_store_config(&self) -> StoreConfig {
        StoreConfig::with_file_names(&self.data_dir, &self.cards_file, &self.transactions_file)
            .pretty(self.pretty)
    }
}
