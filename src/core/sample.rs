//! Sample data written on first run
//!
//! Two cards with a few weeks of history each, so a fresh install has
//! something to show.

use crate::core::card_registry::CardRegistry;
use crate::core::transaction_ledger::TransactionLedger;
use crate::types::{Card, CardNumber, Transaction};
use rust_decimal::Decimal;

/// Build the sample cards and their transactions
pub fn sample_data() -> (CardRegistry, TransactionLedger) {
    let cards: CardRegistry = vec![
        Card::new("4276123456789012", "Иван Петров", "123"),
        Card::new("4276987654321098", "Мария Сидорова", "456"),
    ]
    .into_iter()
    .collect();

    let mut ledger = TransactionLedger::new();

    let first = CardNumber::new("4276123456789012");
    for (date, amount, category, description) in [
        ("2024-01-15", 50000, "Пополнение", "Зачисление зарплаты"),
        ("2024-01-16", -1500, "Покупки", "Продукты в супермаркете"),
        ("2024-01-17", -3000, "Развлечения", "Кино и ресторан"),
    ] {
        ledger.append(
            &first,
            Transaction::new(date, Decimal::new(amount, 0), category, description),
        );
    }

    let second = CardNumber::new("4276987654321098");
    for (date, amount, category, description) in [
        ("2024-01-10", 30000, "Пополнение", "Перевод от клиента"),
        ("2024-01-12", -5000, "Транспорт", "Такси за неделю"),
        ("2024-01-13", -2000, "Покупки", "Хозяйственные товары"),
        ("2024-01-14", -1000, "Развлечения", "Подписка на сервис"),
    ] {
        ledger.append(
            &second,
            Transaction::new(date, Decimal::new(amount, 0), category, description),
        );
    }

    (cards, ledger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_shape() {
        let (cards, ledger) = sample_data();

        assert_eq!(cards.len(), 2);
        assert_eq!(ledger.len(), 7);
        assert_eq!(
            ledger.balance(&CardNumber::new("4276123456789012")),
            Decimal::new(45500, 0)
        );
        assert_eq!(
            ledger.balance(&CardNumber::new("4276987654321098")),
            Decimal::new(22000, 0)
        );
    }

    #[test]
    fn test_every_sample_transaction_belongs_to_a_sample_card() {
        let (cards, ledger) = sample_data();
        assert!(ledger.card_numbers().all(|number| cards.contains(number)));
    }
}
