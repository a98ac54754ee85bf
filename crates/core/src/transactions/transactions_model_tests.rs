//! Tests for transaction domain models.

use crate::transactions::{
    NewTransaction, Transaction, TransactionFilter, TransactionType, TransactionUpdate,
};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_transaction_accepts_datetime_dates() {
    let json = r#"{
        "id": 1,
        "accountId": 2,
        "categoryId": 5,
        "type": "EXPENSE",
        "amount": 200,
        "transactionDate": "2024-01-10T18:45:00"
    }"#;
    let tx: Transaction = serde_json::from_str(json).unwrap();
    assert_eq!(tx.transaction_type, TransactionType::Expense);
    assert_eq!(tx.transaction_date, date(2024, 1, 10));
    assert_eq!(tx.amount, dec!(200));
    assert!(tx.description.is_none());
}

#[test]
fn test_new_transaction_wire_format() {
    let new_tx = NewTransaction {
        account_id: 2,
        category_id: 5,
        transaction_type: TransactionType::Income,
        amount: dec!(1000),
        transaction_date: date(2024, 1, 15),
        description: None,
    };
    let value = serde_json::to_value(&new_tx).unwrap();
    assert_eq!(value["type"], "INCOME");
    assert_eq!(value["transactionDate"], "2024-01-15");
    assert!(value.get("description").is_none());
}

#[test]
fn test_new_transaction_requires_positive_amount() {
    let mut new_tx = NewTransaction {
        account_id: 1,
        category_id: 1,
        transaction_type: TransactionType::Expense,
        amount: dec!(0),
        transaction_date: date(2024, 1, 1),
        description: None,
    };
    assert!(new_tx.validate().is_err());
    new_tx.amount = dec!(0.01);
    assert!(new_tx.validate().is_ok());
}

#[test]
fn test_update_skips_absent_fields() {
    let update = TransactionUpdate {
        description: Some("Lunch".into()),
        transaction_date: Some(date(2024, 3, 2)),
        ..Default::default()
    };
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"description": "Lunch", "transactionDate": "2024-03-02"})
    );
    assert!(TransactionUpdate {
        amount: Some(dec!(-1)),
        ..Default::default()
    }
    .validate()
    .is_err());
}

#[test]
fn test_filter_query_pairs() {
    let filter = TransactionFilter::of_type(TransactionType::Expense)
        .between(date(2024, 1, 1), date(2024, 1, 31))
        .with_size(1000);
    assert_eq!(
        filter.to_query_pairs(),
        vec![
            ("type", "EXPENSE".to_string()),
            ("fromDate", "2024-01-01".to_string()),
            ("toDate", "2024-01-31".to_string()),
            ("page", "0".to_string()),
            ("size", "1000".to_string()),
        ]
    );

    let defaults = TransactionFilter::default().to_query_pairs();
    assert_eq!(defaults, vec![("page", "0".to_string()), ("size", "20".to_string())]);
}
