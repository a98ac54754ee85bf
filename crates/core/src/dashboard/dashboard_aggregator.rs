//! Client-side dashboard figures computed from fetched records.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::dashboard_model::{
    CategoryLeak, ChartSplit, CurrencyBalance, DashboardPulse, DateRange, MonthlyTrend, Period,
};
use crate::accounts::Account;
use crate::categories::{find_category, Category};
use crate::constants::DEFAULT_CURRENCY;
use crate::transactions::{Transaction, TransactionType};
use crate::utils::time_utils::{days_ago, first_day_of_month, first_day_of_months_ago, month_key};

impl Period {
    /// The window ending `today` that this period covers.
    pub fn date_range(&self, today: NaiveDate) -> DateRange {
        let from = match self {
            Period::Today => today,
            Period::Week => days_ago(today, 7),
            Period::Month => first_day_of_month(today),
            Period::Year => first_day_of_months_ago(today, 12),
        };
        DateRange { from, to: today }
    }
}

pub fn filter_by_date_range(transactions: &[Transaction], range: DateRange) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| range.contains(t.transaction_date))
        .cloned()
        .collect()
}

/// `(income, expenses)`; transfers count toward neither.
pub fn income_and_expenses(transactions: &[Transaction]) -> (Decimal, Decimal) {
    transactions
        .iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(income, expenses), t| {
            match t.transaction_type {
                TransactionType::Income => (income + t.amount, expenses),
                TransactionType::Expense => (income, expenses + t.amount),
                TransactionType::Transfer => (income, expenses),
            }
        })
}

/// `(income - expenses) / income * 100` to two decimals, 0 without income.
/// Saturates at `Decimal::MIN`/`Decimal::MAX` when the rate is not representable.
pub fn savings_rate(income: Decimal, expenses: Decimal) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let saturated = if expenses > income {
        Decimal::MIN
    } else {
        Decimal::MAX
    };
    income
        .checked_sub(expenses)
        .and_then(|net| net.checked_div(income))
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .map_or(saturated, |rate| {
            rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        })
}

/// Pulse over already period-filtered transactions. The balance is the sum of
/// the account balances, independent of the period.
pub fn pulse(transactions: &[Transaction], accounts: &[Account], period: Period) -> DashboardPulse {
    let (total_income, total_expenses) = income_and_expenses(transactions);
    let balance: Decimal = accounts.iter().map(|a| a.balance).sum();
    let currency = accounts
        .first()
        .map(|a| a.currency.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    debug!(
        "Pulse for {}: {} transactions, {} accounts",
        period,
        transactions.len(),
        accounts.len()
    );

    DashboardPulse {
        currency,
        period_label: period.as_str().to_string(),
        total_income,
        total_expenses,
        balance,
        savings_rate: savings_rate(total_income, total_expenses),
    }
}

/// `round(part / total * 100)` clamped to `0..=100`.
fn whole_percent(part: Decimal, total: Decimal) -> u32 {
    if part <= Decimal::ZERO {
        return 0;
    }
    part.checked_div(total)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .map(|p| p.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|p| p.to_u32())
        .map_or(100, |p| p.min(100))
}

pub fn chart_split(income: Decimal, expenses: Decimal) -> ChartSplit {
    // Shares are scale-free; shrink both when the sum itself would overflow.
    let (income, expenses, total) = match income.checked_add(expenses) {
        Some(total) => (income, expenses, total),
        None => {
            let (income, expenses) = (income / dec!(10), expenses / dec!(10));
            (income, expenses, income + expenses)
        }
    };
    if total <= Decimal::ZERO {
        return ChartSplit::default();
    }
    ChartSplit {
        income_percent: whole_percent(income, total),
        expenses_percent: whole_percent(expenses, total),
    }
}

/// Account balances grouped by currency; the default currency leads, the
/// rest follow alphabetically.
pub fn balances_by_currency(accounts: &[Account]) -> Vec<CurrencyBalance> {
    let mut grouped: HashMap<&str, CurrencyBalance> = HashMap::new();
    for account in accounts {
        let entry = grouped
            .entry(account.currency.as_str())
            .or_insert_with(|| CurrencyBalance {
                currency: account.currency.clone(),
                total: Decimal::ZERO,
                account_count: 0,
            });
        entry.total += account.balance;
        entry.account_count += 1;
    }

    let mut balances: Vec<CurrencyBalance> = grouped.into_values().collect();
    balances.sort_by(|a, b| {
        match (a.currency == DEFAULT_CURRENCY, b.currency == DEFAULT_CURRENCY) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.currency.cmp(&b.currency),
        }
    });
    balances
}

/// Per-month income, expenses and net balance, oldest month first.
pub fn monthly_trends(transactions: &[Transaction]) -> Vec<MonthlyTrend> {
    let mut months: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for t in transactions {
        let bucket = months
            .entry(month_key(t.transaction_date))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match t.transaction_type {
            TransactionType::Income => bucket.0 += t.amount,
            TransactionType::Expense => bucket.1 += t.amount,
            TransactionType::Transfer => {}
        }
    }

    months
        .into_iter()
        .map(|(month, (income, expenses))| MonthlyTrend {
            month,
            income,
            expenses,
            balance: income - expenses,
        })
        .collect()
}

/// The `top` expense categories by amount, each with its share of total
/// expenses. Ties keep the lower category id first.
pub fn category_leaks(
    transactions: &[Transaction],
    categories: &[Category],
    top: usize,
) -> Vec<CategoryLeak> {
    let mut per_category: HashMap<i64, (Decimal, &Transaction)> = HashMap::new();
    let mut total_expenses = Decimal::ZERO;
    for t in transactions
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Expense)
    {
        total_expenses += t.amount;
        per_category
            .entry(t.category_id)
            .and_modify(|(sum, _)| *sum += t.amount)
            .or_insert((t.amount, t));
    }
    if total_expenses <= Decimal::ZERO {
        return Vec::new();
    }

    let mut leaks: Vec<CategoryLeak> = per_category
        .into_iter()
        .map(|(category_id, (amount, sample))| {
            let category = find_category(categories, category_id);
            CategoryLeak {
                category_id,
                category_name: category
                    .map(|c| c.name.clone())
                    .or_else(|| sample.category_name.clone())
                    .unwrap_or_else(|| format!("Category #{}", category_id)),
                category_icon: category
                    .map(|c| c.icon.clone())
                    .filter(|icon| !icon.is_empty())
                    .or_else(|| sample.category_icon.clone())
                    .unwrap_or_default(),
                amount,
                percentage: (amount / total_expenses * dec!(100))
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
                color: category.map(|c| c.color.clone()).unwrap_or_default(),
            }
        })
        .collect();

    leaks.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.category_id.cmp(&b.category_id))
    });
    leaks.truncate(top);
    leaks
}
