//! Dashboard value objects, shared by the server endpoints and the
//! client-side aggregation.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// Reporting window selected on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Today,
    Week,
    #[default]
    Month,
    Year,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Period::Today),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown period '{}'",
                other
            )))),
        }
    }
}

/// Inclusive calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPulse {
    pub currency: String,
    #[serde(default)]
    pub period_label: String,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    #[serde(default)]
    pub savings_rate: Decimal,
}

/// Income and expense shares of their combined total, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChartSplit {
    pub income_percent: u32,
    pub expenses_percent: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyBalance {
    pub currency: String,
    pub total: Decimal,
    pub account_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    /// `yyyy-MM`
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    pub currency: String,
    #[serde(default)]
    pub series: Vec<MonthlyTrend>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryLeak {
    pub category_id: i64,
    pub category_name: String,
    #[serde(default)]
    pub category_icon: String,
    pub amount: Decimal,
    pub percentage: Decimal,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryLeaks {
    pub currency: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub leaks: Vec<CategoryLeak>,
}
