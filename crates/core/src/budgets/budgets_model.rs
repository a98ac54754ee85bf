//! Budget domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::api_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Weekly => "WEEKLY",
            BudgetPeriod::Monthly => "MONTHLY",
            BudgetPeriod::Yearly => "YEARLY",
        }
    }
}

/// A spending limit for one category over `[start_date, end_date]`.
///
/// The amount spent is not part of the model: the backend may send
/// `spentAmount`/`spentPercentage`, but those fields are ignored and spending
/// is always recomputed from transactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i64,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    pub limit_amount: Decimal,
    pub period: BudgetPeriod,
    #[serde(with = "api_date")]
    pub start_date: NaiveDate,
    #[serde(with = "api_date")]
    pub end_date: NaiveDate,
}

impl Budget {
    /// Inclusive, date-only range check.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Input model for creating a budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub category_id: i64,
    pub limit_amount: Decimal,
    pub period: BudgetPeriod,
    #[serde(with = "api_date")]
    pub start_date: NaiveDate,
    #[serde(with = "api_date")]
    pub end_date: NaiveDate,
}

impl NewBudget {
    pub fn validate(&self) -> Result<()> {
        if self.limit_amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Budget limit must be greater than zero".to_string(),
            )));
        }
        if self.start_date > self.end_date {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Budget start date must not be after its end date".to_string(),
            )));
        }
        Ok(())
    }
}
