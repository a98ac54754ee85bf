//! Unit tests for budget spending aggregation.

use super::*;
use crate::transactions::{Transaction, TransactionType};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn january_budget(limit: Decimal) -> Budget {
    Budget {
        id: 1,
        category_id: 5,
        category_name: None,
        limit_amount: limit,
        period: BudgetPeriod::Monthly,
        start_date: date(2024, 1, 1),
        end_date: date(2024, 1, 31),
    }
}

fn tx(
    id: i64,
    transaction_type: TransactionType,
    category_id: i64,
    amount: Decimal,
    on: NaiveDate,
) -> Transaction {
    Transaction {
        id,
        account_id: 1,
        account_name: None,
        category_id,
        category_name: None,
        category_icon: None,
        transaction_type,
        amount,
        transaction_date: on,
        description: None,
        goal_id: None,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn test_january_scenario() {
    let budget = january_budget(dec!(500));
    let transactions = vec![
        tx(1, TransactionType::Expense, 5, dec!(200), date(2024, 1, 10)),
        tx(2, TransactionType::Expense, 5, dec!(400), date(2024, 2, 1)),
        tx(3, TransactionType::Income, 5, dec!(1000), date(2024, 1, 15)),
    ];

    let status = BudgetStatus::compute(&budget, &transactions, date(2024, 1, 21));
    assert_eq!(status.spent, dec!(200));
    assert_eq!(status.percentage, 40);
    assert_eq!(status.band, BudgetBand::Low);
    assert_eq!(status.band.as_str(), "low");
    assert_eq!(status.remaining, dec!(300));
    assert_eq!(status.days_remaining, 10);
    assert!(!status.is_exceeded());
}

#[test]
fn test_range_bounds_are_inclusive() {
    let budget = january_budget(dec!(100));
    let transactions = vec![
        tx(1, TransactionType::Expense, 5, dec!(10), date(2024, 1, 1)),
        tx(2, TransactionType::Expense, 5, dec!(20), date(2024, 1, 31)),
        tx(3, TransactionType::Expense, 5, dec!(40), date(2023, 12, 31)),
    ];
    assert_eq!(spent(&budget, &transactions), dec!(30));
}

#[test]
fn test_other_categories_and_transfers_are_ignored() {
    let budget = january_budget(dec!(100));
    let transactions = vec![
        tx(1, TransactionType::Expense, 6, dec!(10), date(2024, 1, 5)),
        tx(2, TransactionType::Transfer, 5, dec!(20), date(2024, 1, 5)),
    ];
    assert_eq!(spent(&budget, &transactions), dec!(0));
}

#[test]
fn test_zero_limit_has_zero_percentage() {
    assert_eq!(spent_percentage(dec!(250), dec!(0)), 0);
    assert_eq!(spent_percentage(dec!(0), dec!(0)), 0);

    let status = BudgetStatus::compute(
        &january_budget(dec!(0)),
        &[tx(1, TransactionType::Expense, 5, dec!(99), date(2024, 1, 2))],
        date(2024, 1, 2),
    );
    assert_eq!(status.percentage, 0);
    assert_eq!(status.band, BudgetBand::Low);
    assert_eq!(status.remaining, dec!(0));
}

#[test]
fn test_percentage_caps_at_100() {
    assert_eq!(spent_percentage(dec!(600), dec!(500)), 100);
    assert_eq!(spent_percentage(dec!(500), dec!(500)), 100);
    assert_eq!(spent_percentage(dec!(449.9), dec!(500)), 90);
    assert_eq!(spent_percentage(dec!(2.5), dec!(100)), 3);
}

#[test]
fn test_percentage_of_huge_spend_on_tiny_limit_is_100() {
    assert_eq!(spent_percentage(Decimal::MAX, dec!(0.01)), 100);
    assert_eq!(spent_percentage(dec!(1000000000000000000000000000), dec!(0.5)), 100);
    assert_eq!(
        BudgetBand::from_percentage(spent_percentage(Decimal::MAX, dec!(0.01))),
        BudgetBand::Exceeded
    );
}

#[test]
fn test_bands() {
    assert_eq!(BudgetBand::from_percentage(100), BudgetBand::Exceeded);
    assert_eq!(BudgetBand::from_percentage(90), BudgetBand::Warning);
    assert_eq!(BudgetBand::from_percentage(89), BudgetBand::High);
    assert_eq!(BudgetBand::from_percentage(75), BudgetBand::High);
    assert_eq!(BudgetBand::from_percentage(50), BudgetBand::Medium);
    assert_eq!(BudgetBand::from_percentage(49), BudgetBand::Low);
}

#[test]
fn test_statuses_follow_budget_order() {
    let mut second = january_budget(dec!(50));
    second.id = 2;
    second.category_id = 7;
    let transactions = vec![tx(1, TransactionType::Expense, 7, dec!(45), date(2024, 1, 3))];

    let statuses = budget_statuses(
        &[january_budget(dec!(500)), second],
        &transactions,
        date(2024, 1, 3),
    );
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].spent, dec!(0));
    assert_eq!(statuses[1].percentage, 90);
    assert!(statuses[1].is_warning());
}

#[test]
fn test_server_spent_fields_are_ignored() {
    let json = r#"{
        "id": 3, "categoryId": 5, "limitAmount": 500, "period": "MONTHLY",
        "startDate": "2024-01-01", "endDate": "2024-01-31",
        "spentAmount": 480, "spentPercentage": 96, "isWarning": true
    }"#;
    let budget: Budget = serde_json::from_str(json).unwrap();
    let status = BudgetStatus::compute(&budget, &[], date(2024, 1, 1));
    assert_eq!(status.spent, dec!(0));
    assert_eq!(status.percentage, 0);
}

#[test]
fn test_new_budget_validation() {
    let mut new_budget = NewBudget {
        category_id: 5,
        limit_amount: dec!(100),
        period: BudgetPeriod::Weekly,
        start_date: date(2024, 1, 1),
        end_date: date(2024, 1, 7),
    };
    assert!(new_budget.validate().is_ok());

    new_budget.end_date = date(2023, 12, 31);
    assert!(new_budget.validate().is_err());

    new_budget.end_date = date(2024, 1, 7);
    new_budget.limit_amount = dec!(0);
    assert!(new_budget.validate().is_err());
}
