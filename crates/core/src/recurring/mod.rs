//! Automation module - recurring transactions.

mod recurring_model;
mod recurring_traits;

pub use recurring_model::{
    upcoming, NewRecurringTransaction, RecurringFrequency, RecurringStatusUpdate,
    RecurringTransaction, RecurringType,
};
pub use recurring_traits::RecurringClientTrait;
