//! Goal progress derived from target and current amounts.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use super::goals_model::{Goal, GoalStatus};
use crate::transactions::Transaction;
use crate::utils::time_utils::days_until;

/// Display band for a goal's progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalProgressBand {
    Complete,
    High,
    Medium,
    Low,
    Minimal,
}

impl GoalProgressBand {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 100 => GoalProgressBand::Complete,
            p if p >= 75 => GoalProgressBand::High,
            p if p >= 50 => GoalProgressBand::Medium,
            p if p >= 25 => GoalProgressBand::Low,
            _ => GoalProgressBand::Minimal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalProgressBand::Complete => "complete",
            GoalProgressBand::High => "high",
            GoalProgressBand::Medium => "medium",
            GoalProgressBand::Low => "low",
            GoalProgressBand::Minimal => "minimal",
        }
    }
}

/// Percentage of `target` reached by `current`, rounded half away from zero
/// and clamped to `[0, 100]`.
///
/// A goal within half a percent of its target already shows 100; use
/// [`is_completion_eligible`] to know whether it was actually reached.
pub fn progress_percentage(current: Decimal, target: Decimal) -> u32 {
    if target <= Decimal::ZERO || current <= Decimal::ZERO {
        return 0;
    }
    if current >= target {
        return 100;
    }
    current
        .checked_div(target)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .map(|p| p.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|p| p.to_u32())
        .map_or(100, |p| p.min(100))
}

/// Amount still missing to reach the target; never negative.
pub fn remaining_amount(goal: &Goal) -> Decimal {
    (goal.target_amount - goal.current_amount).max(Decimal::ZERO)
}

/// An active goal whose current amount has reached its target.
pub fn is_completion_eligible(goal: &Goal) -> bool {
    goal.status == GoalStatus::Active
        && goal.target_amount > Decimal::ZERO
        && goal.current_amount >= goal.target_amount
}

/// Sum of the contribution transactions linked to `goal_id`.
pub fn contributed_amount(goal_id: i64, transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.goal_id == Some(goal_id))
        .map(|t| t.amount)
        .sum()
}

/// Progress view for one goal, recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: i64,
    pub percentage: u32,
    pub band: GoalProgressBand,
    pub remaining: Decimal,
    pub days_remaining: i64,
    pub completion_eligible: bool,
}

impl GoalProgress {
    pub fn compute(goal: &Goal, today: NaiveDate) -> Self {
        let percentage = progress_percentage(goal.current_amount, goal.target_amount);
        Self {
            goal_id: goal.id,
            percentage,
            band: GoalProgressBand::from_percentage(percentage),
            remaining: remaining_amount(goal),
            days_remaining: days_until(today, goal.deadline),
            completion_eligible: is_completion_eligible(goal),
        }
    }
}
