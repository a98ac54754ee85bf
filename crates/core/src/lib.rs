//! TuCash Core - domain models, aggregators, and resource traits.
//!
//! This crate holds the client-side business logic for TuCash. It is
//! transport-agnostic and defines the `*ClientTrait` contracts that the
//! `tucash-client` crate implements over HTTP.

pub mod accounts;
pub mod budgets;
pub mod categories;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod goals;
pub mod notifications;
pub mod onboarding;
pub mod pagination;
pub mod recurring;
pub mod reminders;
pub mod session;
pub mod transactions;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
