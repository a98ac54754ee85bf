//! Transactions module - domain models and resource traits.

mod transactions_model;
mod transactions_service;
mod transactions_traits;

#[cfg(test)]
mod transactions_model_tests;
#[cfg(test)]
mod transactions_service_tests;

pub use transactions_model::{
    NewTransaction, Transaction, TransactionFilter, TransactionType, TransactionUpdate,
};
pub use transactions_service::{list_all_transactions, MAX_TRANSACTION_PAGES};
pub use transactions_traits::TransactionClientTrait;
