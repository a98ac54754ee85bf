//! Plain-text rendering of command output.

use rust_decimal::Decimal;

use tucash_core::budgets::BudgetStatus;
use tucash_core::dashboard::{CategoryLeak, ChartSplit, CurrencyBalance, DashboardPulse};
use tucash_core::goals::{Goal, GoalProgress};
use tucash_core::utils::format_amount;

const BAR_WIDTH: usize = 20;

/// A fixed-width bar filled to `percentage`, capped at full.
pub fn progress_bar(percentage: u32) -> String {
    let filled = (percentage.min(100) as usize * BAR_WIDTH) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

pub fn pulse_lines(pulse: &DashboardPulse, split: &ChartSplit) -> Vec<String> {
    let currency = Some(pulse.currency.as_str());
    vec![
        format!("Period:       {}", pulse.period_label),
        format!(
            "Income:       {} ({}%)",
            format_amount(pulse.total_income, currency, false),
            split.income_percent
        ),
        format!(
            "Expenses:     {} ({}%)",
            format_amount(pulse.total_expenses, currency, false),
            split.expenses_percent
        ),
        format!("Balance:      {}", format_amount(pulse.balance, currency, true)),
        format!("Savings rate: {}%", pulse.savings_rate),
    ]
}

pub fn balance_line(balance: &CurrencyBalance) -> String {
    format!(
        "{:<4} {:>14}  ({} account{})",
        balance.currency,
        format_amount(balance.total, Some(&balance.currency), false),
        balance.account_count,
        if balance.account_count == 1 { "" } else { "s" }
    )
}

pub fn leak_line(leak: &CategoryLeak, currency: &str) -> String {
    format!(
        "{} {:<20} {:>12} {:>6}%",
        leak.category_icon,
        leak.category_name,
        format_amount(leak.amount, Some(currency), false),
        leak.percentage
    )
}

pub fn budget_line(status: &BudgetStatus, currency: &str) -> String {
    let name = status
        .budget
        .category_name
        .clone()
        .unwrap_or_else(|| format!("category {}", status.budget.category_id));
    format!(
        "{:<20} {} {:>3}% {} / {} ({}, {} days left)",
        name,
        progress_bar(status.percentage),
        status.percentage,
        format_amount(status.spent, Some(currency), false),
        format_amount(status.budget.limit_amount, Some(currency), false),
        status.band.as_str(),
        status.days_remaining.max(0)
    )
}

pub fn goal_line(goal: &Goal, progress: &GoalProgress, currency: &str) -> String {
    let mut line = format!(
        "{:<20} {} {:>3}% {} to go, due {}",
        goal.name,
        progress_bar(progress.percentage),
        progress.percentage,
        format_amount(progress.remaining, Some(currency), false),
        goal.deadline
    );
    if progress.completion_eligible {
        line.push_str(" (ready to complete)");
    }
    line
}

pub fn signed(amount: Decimal, currency: &str) -> String {
    format_amount(amount, Some(currency), true)
}
