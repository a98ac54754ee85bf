//! `*ClientTrait` implementations for [`crate::ApiClient`], one file per
//! REST collection.

mod accounts;
mod budgets;
mod categories;
mod dashboard;
mod goals;
mod notifications;
mod recurring;
mod reminders;
mod transactions;
mod users;
