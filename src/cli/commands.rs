//! Command execution
//!
//! Each command opens the store, performs one operation, and renders the
//! result to the given writer. Rendering is plain text, except `export` which
//! writes a CSV statement.

use crate::cli::args::{CardCommand, CliArgs, Command, TxCommand};
use crate::core::{Persistence, Store};
use crate::io::{read_statement_csv, write_statement_csv};
use crate::types::{
    generate_cvc, Card, CardNumber, NewCard, StoreError, Transaction, DEFAULT_CATEGORIES,
};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use time::OffsetDateTime;
use tracing::warn;

/// Run a parsed command line against the configured store
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), StoreError> {
    let mut store = Store::open(&args.to_store_config())?;
    execute(&mut store, &args.command, output)
}

/// Execute one command against an already opened store
pub fn execute<P: Persistence>(
    store: &mut Store<P>,
    command: &Command,
    output: &mut dyn Write,
) -> Result<(), StoreError> {
    match command {
        Command::Cards(card_command) => execute_card_command(store, card_command, output),
        Command::Tx(tx_command) => execute_tx_command(store, tx_command, output),
        Command::Deposit {
            number,
            amount,
            date,
        } => {
            let number = CardNumber::new(number);
            store.deposit(&number, *amount, date.clone().unwrap_or_else(today))?;
            write_balance(output, &number, store)
        }
        Command::Withdraw {
            number,
            amount,
            date,
        } => {
            let number = CardNumber::new(number);
            store.withdraw(&number, *amount, date.clone().unwrap_or_else(today))?;
            write_balance(output, &number, store)
        }
        Command::Balance { number } => write_balance(output, &CardNumber::new(number), store),
        Command::Export { number, filter } => {
            let filter = filter.to_filter();
            let transactions = store.transactions(&CardNumber::new(number), Some(&filter));
            write_statement_csv(&transactions, output)
        }
        Command::Categories => {
            for category in DEFAULT_CATEGORIES {
                writeln!(output, "{}", category).map_err(stdout_error)?;
            }
            Ok(())
        }
    }
}

fn execute_card_command<P: Persistence>(
    store: &mut Store<P>,
    command: &CardCommand,
    output: &mut dyn Write,
) -> Result<(), StoreError> {
    match command {
        CardCommand::List => {
            for (card, balance) in store.card_summaries() {
                writeln!(output, "{}  {}  {}", card.number, card.name, balance)
                    .map_err(stdout_error)?;
            }
            Ok(())
        }
        CardCommand::Show { number } => {
            let number = CardNumber::new(number);
            // Unknown cards print nothing
            if let Some(card) = store.card(&number) {
                writeln!(output, "Number:  {}", card.number).map_err(stdout_error)?;
                writeln!(output, "Name:    {}", card.name).map_err(stdout_error)?;
                writeln!(output, "CVC:     {}", card.cvc).map_err(stdout_error)?;
                writeln!(output, "Balance: {}", store.balance(&number)).map_err(stdout_error)?;
            }
            Ok(())
        }
        CardCommand::Add {
            first_name,
            last_name,
            number,
            cvc,
        } => {
            let number = match number {
                Some(number) => CardNumber::new(number),
                None => unused_number(store),
            };
            let card = NewCard {
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                number,
                cvc: cvc.clone().unwrap_or_else(generate_cvc),
            }
            .validate()?;
            if !card.number.is_numeric() {
                warn!(card = %card.number, "Card number contains non-digit characters");
            }
            let (number, cvc) = (card.number.clone(), card.cvc.clone());
            store.add_card(card)?;
            writeln!(output, "Added card {} (CVC {})", number, cvc).map_err(stdout_error)
        }
        CardCommand::Update { number, name, cvc } => {
            store.update_card(Card::new(CardNumber::new(number), name.clone(), cvc.clone()))
        }
        CardCommand::Delete { number } => {
            store.delete_card(&CardNumber::new(number))?;
            Ok(())
        }
    }
}

fn execute_tx_command<P: Persistence>(
    store: &mut Store<P>,
    command: &TxCommand,
    output: &mut dyn Write,
) -> Result<(), StoreError> {
    match command {
        TxCommand::List { number, filter } => {
            let filter = filter.to_filter();
            for tx in store.transactions(&CardNumber::new(number), Some(&filter)) {
                writeln!(
                    output,
                    "{}  {:>12}  {}  {}",
                    tx.date, tx.amount, tx.category, tx.description
                )
                .map_err(stdout_error)?;
            }
            Ok(())
        }
        TxCommand::Add {
            number,
            date,
            amount,
            category,
            description,
        } => store.add_transaction(
            &CardNumber::new(number),
            Transaction::new(date.clone(), *amount, category.clone(), description.clone()),
        ),
        TxCommand::Import { number, file } => {
            let input = File::open(file).map_err(|e| StoreError::io(file, e))?;

            let mut accepted = Vec::new();
            for result in read_statement_csv(input) {
                match result {
                    Ok(tx) => accepted.push(tx),
                    Err(e) => warn!(file = %file.display(), "Skipping row: {}", e),
                }
            }

            let imported = store.import_transactions(&CardNumber::new(number), accepted)?;
            writeln!(output, "Imported {} transactions", imported).map_err(stdout_error)
        }
    }
}

// A generated number no stored card uses yet
fn unused_number<P: Persistence>(store: &Store<P>) -> CardNumber {
    loop {
        let number = CardNumber::generate();
        if store.card(&number).is_none() {
            return number;
        }
    }
}

fn write_balance<P: Persistence>(
    output: &mut dyn Write,
    number: &CardNumber,
    store: &Store<P>,
) -> Result<(), StoreError> {
    writeln!(output, "{}", store.balance(number)).map_err(stdout_error)
}

fn stdout_error(error: std::io::Error) -> StoreError {
    StoreError::io(Path::new("<output>"), error)
}

// Current local date in YYYY-MM-DD form, UTC when the offset is unknown
fn today() -> String {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
        .to_string()
}
