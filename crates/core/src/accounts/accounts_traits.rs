//! Account resource contract.

use async_trait::async_trait;

use super::accounts_model::{Account, NewAccount};
use crate::errors::Result;

/// Command/query operations on the `/accounts` collection.
///
/// The HTTP implementation lives in the client crate; tests substitute
/// in-memory fakes.
#[async_trait]
pub trait AccountClientTrait: Send + Sync {
    /// Lists every account owned by the current user.
    async fn list_accounts(&self) -> Result<Vec<Account>>;

    /// Retrieves an account by its ID.
    async fn get_account(&self, account_id: i64) -> Result<Account>;

    /// Creates a new account. Callers validate the payload first.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    /// Deletes an account by its ID.
    async fn delete_account(&self, account_id: i64) -> Result<()>;
}
