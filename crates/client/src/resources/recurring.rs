use async_trait::async_trait;
use reqwest::Method;

use tucash_core::errors::Result;
use tucash_core::recurring::{
    NewRecurringTransaction, RecurringClientTrait, RecurringStatusUpdate, RecurringTransaction,
};

use crate::client::ApiClient;

const RECURRING_PATH: &str = "/recurring-transactions";

#[async_trait]
impl RecurringClientTrait for ApiClient {
    async fn list_recurring(&self) -> Result<Vec<RecurringTransaction>> {
        self.get_list(RECURRING_PATH).await
    }

    async fn get_recurring(&self, recurring_id: i64) -> Result<RecurringTransaction> {
        self.get(&format!("{}/{}", RECURRING_PATH, recurring_id))
            .await
    }

    async fn create_recurring(
        &self,
        new_recurring: NewRecurringTransaction,
    ) -> Result<RecurringTransaction> {
        new_recurring.validate()?;
        self.send_json(Method::POST, RECURRING_PATH, &new_recurring)
            .await
    }

    async fn update_recurring_status(
        &self,
        recurring_id: i64,
        update: RecurringStatusUpdate,
    ) -> Result<RecurringTransaction> {
        self.send_json(
            Method::PATCH,
            &format!("{}/{}/status", RECURRING_PATH, recurring_id),
            &update,
        )
        .await
    }

    async fn delete_recurring(&self, recurring_id: i64) -> Result<()> {
        self.send_unit(
            Method::DELETE,
            &format!("{}/{}", RECURRING_PATH, recurring_id),
        )
        .await
    }
}
