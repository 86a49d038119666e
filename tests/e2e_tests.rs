//! End-to-end integration tests
//!
//! These tests drive the store over real JSON files in a temporary directory.
//! Each test opens a fresh store, performs operations, and then checks the
//! files on disk and what a second store opened on the same files sees.
//!
//! Covered scenarios:
//! - First run seeding
//! - Card uniqueness, upsert and cascading delete
//! - Balances over credits and debits
//! - Date-range and category filters
//! - Save/reload round trip
//! - Reading files written by other tools

#[cfg(test)]
mod tests {
    use cardbook::cli::{self, CliArgs};
    use cardbook::{
        Card, CardNumber, Persistence, Store, StoreConfig, StoreError, Transaction,
        TransactionFilter,
    };
    use clap::Parser;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::fs;
    use tempfile::TempDir;

    const FIRST: &str = "4276123456789012";
    const SECOND: &str = "4276987654321098";

    /// Open a store in `dir`, seeding it if the directory is fresh
    fn open(dir: &TempDir) -> Store<cardbook::JsonFiles> {
        Store::open(&StoreConfig::in_dir(dir.path()))
            .unwrap_or_else(|e| panic!("Failed to open store: {}", e))
    }

    /// Open a store in `dir` and clear the seeded sample data
    fn open_empty(dir: &TempDir) -> Store<cardbook::JsonFiles> {
        let mut store = open(dir);
        for number in [FIRST, SECOND] {
            store.delete_card(&CardNumber::new(number)).unwrap();
        }
        store
    }

    fn tx(date: &str, amount: i64, category: &str) -> Transaction {
        Transaction::new(date, Decimal::new(amount, 0), category, "")
    }

    #[test]
    fn test_first_run_seeds_and_writes_both_files() {
        let dir = TempDir::new().unwrap();

        let store = open(&dir);

        assert!(dir.path().join("cards.json").exists());
        assert!(dir.path().join("transactions.json").exists());
        assert_eq!(store.cards().len(), 2);
        assert_eq!(store.transactions(&CardNumber::new(FIRST), None).len(), 3);
        assert_eq!(store.transactions(&CardNumber::new(SECOND), None).len(), 4);
    }

    #[test]
    fn test_missing_transactions_file_reseeds() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = open(&dir);
            store.add_card(Card::new("1", "A B", "1")).unwrap();
        }
        fs::remove_file(dir.path().join("transactions.json")).unwrap();

        let store = open(&dir);

        assert!(store.card(&CardNumber::new("1")).is_none());
        assert_eq!(store.cards().len(), 2);
    }

    #[test]
    fn test_existing_files_are_not_reseeded() {
        let dir = TempDir::new().unwrap();
        drop(open_empty(&dir));

        let store = open(&dir);

        assert!(store.cards().is_empty());
    }

    #[test]
    fn test_add_card_unique_number() {
        let dir = TempDir::new().unwrap();
        let mut store = open(&dir);

        store.add_card(Card::new("5555", "A B", "321")).unwrap();
        let duplicate = store.add_card(Card::new("5555", "C D", "654"));

        assert_eq!(duplicate, Err(StoreError::duplicate_card("5555")));
        assert_eq!(open(&dir).card(&CardNumber::new("5555")).unwrap().name, "A B");
    }

    #[test]
    fn test_add_seeded_number_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = open(&dir);

        let result = store.add_card(Card::new(FIRST, "Someone Else", "000"));

        assert!(matches!(result, Err(StoreError::DuplicateCard { .. })));
    }

    #[rstest]
    #[case::no_transactions(vec![], Decimal::ZERO)]
    #[case::credits_only(vec![100, 250], Decimal::new(350, 0))]
    #[case::mixed(vec![50000, -1500, -3000, 20], Decimal::new(45520, 0))]
    #[case::overdrawn(vec![10, -40], Decimal::new(-30, 0))]
    fn test_balance_is_arithmetic_sum(#[case] amounts: Vec<i64>, #[case] expected: Decimal) {
        let dir = TempDir::new().unwrap();
        let mut store = open_empty(&dir);
        let number = CardNumber::new("7777");
        store.add_card(Card::new("7777", "A B", "1")).unwrap();

        for amount in amounts {
            store
                .add_transaction(&number, tx("2024-01-01", amount, "Другое"))
                .unwrap();
        }

        assert_eq!(store.balance(&number), expected);
        assert_eq!(open(&dir).balance(&number), expected);
    }

    #[test]
    fn test_delete_card_removes_card_and_transactions_on_disk() {
        let dir = TempDir::new().unwrap();
        let mut store = open(&dir);
        let number = CardNumber::new(FIRST);

        assert!(store.delete_card(&number).unwrap());

        let reopened = open(&dir);
        assert!(reopened.card(&number).is_none());
        assert!(reopened.transactions(&number, None).is_empty());
        assert_eq!(reopened.balance(&number), Decimal::ZERO);

        let transactions_json = fs::read_to_string(dir.path().join("transactions.json")).unwrap();
        assert!(!transactions_json.contains(FIRST));
        assert!(transactions_json.contains(SECOND));
    }

    #[rstest]
    #[case::no_filter(TransactionFilter::new(), vec!["2024-01-10", "2024-01-12", "2024-01-13", "2024-01-14"])]
    #[case::from_inclusive(TransactionFilter::new().from_date("2024-01-13"), vec!["2024-01-13", "2024-01-14"])]
    #[case::to_inclusive(TransactionFilter::new().to_date("2024-01-12"), vec!["2024-01-10", "2024-01-12"])]
    #[case::range(
        TransactionFilter::new().from_date("2024-01-11").to_date("2024-01-13"),
        vec!["2024-01-12", "2024-01-13"]
    )]
    #[case::category_exact(TransactionFilter::new().category("Развлечения"), vec!["2024-01-14"])]
    #[case::range_and_category(
        TransactionFilter::new().from_date("2024-01-10").to_date("2024-01-13").category("Покупки"),
        vec!["2024-01-13"]
    )]
    #[case::range_excludes_category_match(
        TransactionFilter::new().to_date("2024-01-13").category("Развлечения"),
        vec![]
    )]
    #[case::unknown_category(TransactionFilter::new().category("Налоги"), vec![])]
    fn test_filters_compose(#[case] filter: TransactionFilter, #[case] expected: Vec<&str>) {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);

        let dates: Vec<&str> = store
            .transactions(&CardNumber::new(SECOND), Some(&filter))
            .iter()
            .map(|t| t.date.as_str())
            .collect();

        assert_eq!(dates, expected);
    }

    #[test]
    fn test_unknown_card_queries_are_empty() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir);
        let number = CardNumber::new("0000");

        assert!(store.card(&number).is_none());
        assert!(store
            .transactions(&number, Some(&TransactionFilter::new().category("Покупки")))
            .is_empty());
        assert_eq!(store.balance(&number), Decimal::ZERO);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = open(&dir);
        store.update_card(Card::new(FIRST, "Иван Петров-Водкин", "789")).unwrap();
        store
            .add_transaction(
                &CardNumber::new(SECOND),
                Transaction::new("2024-02-01", Decimal::new(-12345, 2), "Транспорт", "Метро"),
            )
            .unwrap();
        let cards_before = fs::read(dir.path().join("cards.json")).unwrap();
        let transactions_before = fs::read(dir.path().join("transactions.json")).unwrap();

        let mut reopened = open(&dir);
        let (cards, ledger) = reopened.persistence().load().unwrap();
        assert_eq!(cards.all(), store.cards());
        assert_eq!(
            ledger.for_card(&CardNumber::new(SECOND)),
            store
                .transactions(&CardNumber::new(SECOND), None)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
                .as_slice()
        );

        // Rewriting the reloaded state reproduces the same bytes
        reopened.update_card(Card::new(FIRST, "Иван Петров-Водкин", "789")).unwrap();
        assert_eq!(fs::read(dir.path().join("cards.json")).unwrap(), cards_before);
        assert_eq!(
            fs::read(dir.path().join("transactions.json")).unwrap(),
            transactions_before
        );
    }

    #[test]
    fn test_reads_files_from_python_style_json() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("cards.json"),
            r#"{"1234": {"number": "1234", "name": "Иван Петров", "cvc": "123"}}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("transactions.json"),
            r#"{"1234": [{"date": "2024-01-15", "amount": 50000, "category": "x", "description": ""}, {"date": "2024-03-01", "amount": 1000.5, "category": "y", "description": ""}]}"#,
        )
        .unwrap();

        let store = open(&dir);

        let number = CardNumber::new("1234");
        assert_eq!(store.card(&number).unwrap().name, "Иван Петров");
        assert_eq!(store.balance(&number), Decimal::new(510005, 1));
    }

    #[test]
    fn test_spaced_numbers_on_disk_are_reachable() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("cards.json"),
            r#"{"4276 1234": {"number": "4276 1234", "name": "A B", "cvc": "1"}}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("transactions.json"),
            r#"{"4276 1234": [{"date": "2024-01-15", "amount": 75, "category": "x", "description": ""}]}"#,
        )
        .unwrap();

        let store = open(&dir);

        let number = CardNumber::new("4276 1234");
        assert_eq!(store.card(&number).unwrap().name, "A B");
        assert_eq!(store.balance(&number), Decimal::new(75, 0));
    }

    #[test]
    fn test_cli_run_against_data_dir() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().to_str().unwrap();

        let args = CliArgs::try_parse_from([
            "cardbook", "--data-dir", data_dir, "tx", "add", FIRST, "--date", "2024-02-01",
            "--amount", "-500", "--category", "Транспорт",
        ])
        .unwrap();
        cli::run(&args, &mut Vec::new()).unwrap();

        let args = CliArgs::try_parse_from(["cardbook", "--data-dir", data_dir, "balance", FIRST])
            .unwrap();
        let mut output = Vec::new();
        cli::run(&args, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "45000\n");
    }

    #[test]
    fn test_cli_import_statement() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().to_str().unwrap();
        let statement = dir.path().join("statement.csv");
        fs::write(
            &statement,
            "date,amount,category,description\n\
             2024-02-01,-100,Покупки,a\n\
             2024-02-02,oops,Покупки,b\n\
             15.01.2024,-100,Покупки,d\n\
             2024-1-5,-7,Транспорт,e\n\
             2024-02-03,300,Другое,c\n",
        )
        .unwrap();

        let args = CliArgs::try_parse_from([
            "cardbook",
            "--data-dir",
            data_dir,
            "tx",
            "import",
            SECOND,
            statement.to_str().unwrap(),
        ])
        .unwrap();
        let mut output = Vec::new();
        cli::run(&args, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "Imported 2 transactions\n");
        let store = open(&dir);
        let number = CardNumber::new(SECOND);
        assert_eq!(store.balance(&number), Decimal::new(22200, 0));
        let january: Vec<&str> = store
            .transactions(
                &number,
                Some(&TransactionFilter::new().from_date("2024-01-01").to_date("2024-01-31")),
            )
            .iter()
            .map(|t| t.date.as_str())
            .collect();
        assert_eq!(january, vec!["2024-01-10", "2024-01-12", "2024-01-13", "2024-01-14"]);
        assert_eq!(store.transactions(&number, None).len(), 6);
    }
}
