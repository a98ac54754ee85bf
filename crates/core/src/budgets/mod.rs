//! Budgets module - domain models, spending aggregation, and resource traits.

mod budgets_calculator;
mod budgets_model;
mod budgets_traits;

#[cfg(test)]
mod budgets_calculator_tests;

pub use budgets_calculator::{
    budget_statuses, remaining, spent, spent_percentage, BudgetBand, BudgetStatus,
};
pub use budgets_model::{Budget, BudgetPeriod, NewBudget};
pub use budgets_traits::BudgetClientTrait;
