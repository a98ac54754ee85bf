use async_trait::async_trait;

use super::recurring_model::{NewRecurringTransaction, RecurringStatusUpdate, RecurringTransaction};
use crate::errors::Result;

/// Command/query operations on the `/recurring-transactions` collection.
#[async_trait]
pub trait RecurringClientTrait: Send + Sync {
    async fn list_recurring(&self) -> Result<Vec<RecurringTransaction>>;
    async fn get_recurring(&self, recurring_id: i64) -> Result<RecurringTransaction>;
    async fn create_recurring(
        &self,
        new_recurring: NewRecurringTransaction,
    ) -> Result<RecurringTransaction>;
    /// Pauses or resumes a recurring transaction.
    async fn update_recurring_status(
        &self,
        recurring_id: i64,
        update: RecurringStatusUpdate,
    ) -> Result<RecurringTransaction>;
    async fn delete_recurring(&self, recurring_id: i64) -> Result<()>;
}
