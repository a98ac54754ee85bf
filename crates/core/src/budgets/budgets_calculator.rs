//! Client-side budget spending.
//!
//! Spending is derived from the transaction list every time; nothing here
//! caches or persists a "spent" figure.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use super::budgets_model::Budget;
use crate::transactions::{Transaction, TransactionType};
use crate::utils::time_utils::days_until;

/// Display band for a budget's progress bar. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetBand {
    Exceeded,
    Warning,
    High,
    Medium,
    Low,
}

impl BudgetBand {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 100 => BudgetBand::Exceeded,
            p if p >= 90 => BudgetBand::Warning,
            p if p >= 75 => BudgetBand::High,
            p if p >= 50 => BudgetBand::Medium,
            _ => BudgetBand::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetBand::Exceeded => "exceeded",
            BudgetBand::Warning => "warning",
            BudgetBand::High => "high",
            BudgetBand::Medium => "medium",
            BudgetBand::Low => "low",
        }
    }
}

/// Sum of EXPENSE transactions in the budget's category whose date falls in
/// `[start_date, end_date]`.
pub fn spent(budget: &Budget, transactions: &[Transaction]) -> Decimal {
    let mut matched = 0usize;
    let total: Decimal = transactions
        .iter()
        .filter(|t| {
            t.transaction_type == TransactionType::Expense
                && t.category_id == budget.category_id
                && budget.covers(t.transaction_date)
        })
        .inspect(|_| matched += 1)
        .map(|t| t.amount)
        .sum();
    debug!(
        "Budget #{} (category #{}): {} transactions, spent {}",
        budget.id, budget.category_id, matched, total
    );
    total
}

/// `min(round(spent / limit * 100), 100)`, or 0 when the limit is not
/// positive. A ratio too large for `Decimal` counts as 100.
pub fn spent_percentage(spent: Decimal, limit: Decimal) -> u32 {
    if limit <= Decimal::ZERO || spent <= Decimal::ZERO {
        return 0;
    }
    spent
        .checked_div(limit)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .map(|p| p.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|p| p.to_u32())
        .map_or(100, |p| p.min(100))
}

/// Amount left before the limit is reached; never negative.
pub fn remaining(spent: Decimal, limit: Decimal) -> Decimal {
    (limit - spent).max(Decimal::ZERO)
}

/// Spending view for one budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub budget: Budget,
    pub spent: Decimal,
    pub percentage: u32,
    pub band: BudgetBand,
    pub remaining: Decimal,
    pub days_remaining: i64,
}

impl BudgetStatus {
    pub fn compute(budget: &Budget, transactions: &[Transaction], today: NaiveDate) -> Self {
        let spent = spent(budget, transactions);
        let percentage = spent_percentage(spent, budget.limit_amount);
        Self {
            budget: budget.clone(),
            spent,
            percentage,
            band: BudgetBand::from_percentage(percentage),
            remaining: remaining(spent, budget.limit_amount),
            days_remaining: days_until(today, budget.end_date),
        }
    }

    pub fn is_exceeded(&self) -> bool {
        self.band == BudgetBand::Exceeded
    }

    /// At or above the warning threshold but not yet exceeded.
    pub fn is_warning(&self) -> bool {
        self.band == BudgetBand::Warning
    }
}

/// One status per budget, in input order.
pub fn budget_statuses(
    budgets: &[Budget],
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<BudgetStatus> {
    budgets
        .iter()
        .map(|b| BudgetStatus::compute(b, transactions, today))
        .collect()
}
