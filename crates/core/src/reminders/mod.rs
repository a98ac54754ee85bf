//! Reminders module - models and resource traits.

mod reminders_model;
mod reminders_traits;

pub use reminders_model::{pending, NewReminder, Reminder};
pub use reminders_traits::ReminderClientTrait;
