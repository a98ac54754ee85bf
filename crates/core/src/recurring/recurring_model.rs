//! Recurring transaction domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::{api_date, api_date_opt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurringFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Only income and expense can recur; transfers are one-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurringType {
    Income,
    Expense,
}

/// A template the backend materialises into transactions on schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransaction {
    pub id: i64,
    pub account_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(rename = "type")]
    pub recurring_type: RecurringType,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub frequency: RecurringFrequency,
    #[serde(with = "api_date")]
    pub start_date: NaiveDate,
    #[serde(default, with = "api_date_opt", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(with = "api_date")]
    pub next_execution_date: NaiveDate,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRecurringTransaction {
    pub account_id: i64,
    pub category_id: i64,
    #[serde(rename = "type")]
    pub recurring_type: RecurringType,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub frequency: RecurringFrequency,
    #[serde(with = "api_date")]
    pub start_date: NaiveDate,
    #[serde(default, with = "api_date_opt", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl NewRecurringTransaction {
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Recurring amount must be greater than zero".to_string(),
            )));
        }
        if matches!(self.end_date, Some(end) if end < self.start_date) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Recurring end date must not be before its start date".to_string(),
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringStatusUpdate {
    pub is_active: bool,
}

/// Active templates whose next execution falls within `days` of `today`,
/// soonest first.
pub fn upcoming(
    recurring: &[RecurringTransaction],
    today: NaiveDate,
    days: i64,
) -> Vec<&RecurringTransaction> {
    let horizon = today + chrono::Duration::days(days);
    let mut due: Vec<&RecurringTransaction> = recurring
        .iter()
        .filter(|r| r.is_active)
        .filter(|r| r.next_execution_date >= today && r.next_execution_date <= horizon)
        .collect();
    due.sort_by_key(|r| r.next_execution_date);
    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn recurring(id: i64, next: NaiveDate, is_active: bool) -> RecurringTransaction {
        RecurringTransaction {
            id,
            account_id: 1,
            account_name: None,
            category_id: 2,
            category_name: None,
            recurring_type: RecurringType::Expense,
            amount: dec!(30),
            description: Some("Gym".into()),
            frequency: RecurringFrequency::Monthly,
            start_date: date(2024, 1, 1),
            end_date: None,
            next_execution_date: next,
            is_active,
        }
    }

    #[test]
    fn test_decodes_null_end_date() {
        let json = r#"{"id":1,"accountId":1,"categoryId":2,"type":"INCOME","amount":2500,
            "frequency":"MONTHLY","startDate":"2024-01-01","endDate":null,
            "nextExecutionDate":"2024-02-01","isActive":true}"#;
        let r: RecurringTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(r.end_date, None);
        assert_eq!(r.frequency, RecurringFrequency::Monthly);
        assert_eq!(r.recurring_type, RecurringType::Income);
    }

    #[test]
    fn test_upcoming_filters_and_sorts() {
        let today = date(2024, 3, 1);
        let items = vec![
            recurring(1, date(2024, 3, 20), true),
            recurring(2, date(2024, 3, 5), true),
            recurring(3, date(2024, 3, 2), false),
            recurring(4, date(2024, 5, 1), true),
        ];
        let ids: Vec<i64> = upcoming(&items, today, 30).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_new_recurring_validation() {
        let mut new_recurring = NewRecurringTransaction {
            account_id: 1,
            category_id: 2,
            recurring_type: RecurringType::Expense,
            amount: dec!(10),
            description: None,
            frequency: RecurringFrequency::Weekly,
            start_date: date(2024, 1, 10),
            end_date: Some(date(2024, 1, 9)),
        };
        assert!(new_recurring.validate().is_err());
        new_recurring.end_date = None;
        assert!(new_recurring.validate().is_ok());
    }
}
