//! Transaction domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::{api_date, api_date_opt, format_api_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
    Transfer,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
            TransactionType::Transfer => "TRANSFER",
        }
    }
}

/// A transaction owned by the account it references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub account_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_icon: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    #[serde(with = "api_date")]
    pub transaction_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Savings goal this transaction contributes to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Input model for creating a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub account_id: i64,
    pub category_id: i64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    #[serde(with = "api_date")]
    pub transaction_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Transaction amount must be greater than zero".to_string(),
            )));
        }
        Ok(())
    }
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        with = "api_date_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub transaction_date: Option<NaiveDate>,
}

impl TransactionUpdate {
    pub fn validate(&self) -> Result<()> {
        if matches!(self.amount, Some(amount) if amount <= Decimal::ZERO) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Transaction amount must be greater than zero".to_string(),
            )));
        }
        Ok(())
    }
}

/// Server-side filter and paging for the transaction list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionFilter {
    pub transaction_type: Option<TransactionType>,
    pub category_id: Option<i64>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub page: u32,
    pub size: u32,
}

impl Default for TransactionFilter {
    fn default() -> Self {
        Self {
            transaction_type: None,
            category_id: None,
            from_date: None,
            to_date: None,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TransactionFilter {
    pub fn of_type(transaction_type: TransactionType) -> Self {
        Self {
            transaction_type: Some(transaction_type),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from_date = Some(from);
        self.to_date = Some(to);
        self
    }

    /// Query parameters in the order the backend documents them.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(t) = self.transaction_type {
            params.push(("type", t.as_str().to_string()));
        }
        if let Some(category_id) = self.category_id {
            params.push(("categoryId", category_id.to_string()));
        }
        if let Some(from) = self.from_date {
            params.push(("fromDate", format_api_date(from)));
        }
        if let Some(to) = self.to_date {
            params.push(("toDate", format_api_date(to)));
        }
        params.push(("page", self.page.to_string()));
        params.push(("size", self.size.to_string()));
        params
    }
}
