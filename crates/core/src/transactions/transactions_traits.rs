use async_trait::async_trait;

use super::transactions_model::{NewTransaction, Transaction, TransactionFilter, TransactionUpdate};
use crate::errors::Result;
use crate::pagination::Page;

/// Command/query operations on the `/transactions` collection.
#[async_trait]
pub trait TransactionClientTrait: Send + Sync {
    /// Fetches one page of transactions matching `filter`. A backend that
    /// answers with a bare array yields a single complete page.
    async fn list_transactions(&self, filter: &TransactionFilter) -> Result<Page<Transaction>>;

    async fn get_transaction(&self, transaction_id: i64) -> Result<Transaction>;

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    async fn update_transaction(
        &self,
        transaction_id: i64,
        update: TransactionUpdate,
    ) -> Result<Transaction>;

    async fn delete_transaction(&self, transaction_id: i64) -> Result<()>;
}
