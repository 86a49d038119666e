//! cardbook CLI
//!
//! Command-line front-end for the card store.
//!
//! # Usage
//!
//! ```bash
//! cardbook cards list
//! cardbook cards add --first-name Иван --last-name Петров --number "4276 1234 5678 9012" --cvc 123
//! cardbook tx list 4276123456789012 --from 2024-01-01 --to 2024-01-31 --category Покупки
//! cardbook tx add 4276123456789012 --date 2024-01-16 --amount -1500 --category Покупки
//! cardbook withdraw 4276123456789012 500
//! cardbook --data-dir ~/cards export 4276123456789012 > statement.csv
//! ```
//!
//! The data files (`cards.json`, `transactions.json`) are created with sample
//! data on first run.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (duplicate card, insufficient funds, unreadable data files, etc.)

use cardbook::{cli, logging};
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    logging::init(args.verbose);

    // Command output goes to stdout, logs and errors to stderr
    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
