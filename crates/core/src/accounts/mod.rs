//! Accounts module - domain models and resource traits.

mod accounts_model;
mod accounts_traits;


pub use accounts_model::{Account, NewAccount};
pub use accounts_traits::AccountClientTrait;
