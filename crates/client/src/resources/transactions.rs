use async_trait::async_trait;
use log::info;
use reqwest::Method;

use tucash_core::errors::Result;
use tucash_core::pagination::{ListResponse, Page};
use tucash_core::transactions::{
    NewTransaction, Transaction, TransactionClientTrait, TransactionFilter, TransactionUpdate,
};

use crate::client::ApiClient;

const TRANSACTIONS_PATH: &str = "/transactions";

#[async_trait]
impl TransactionClientTrait for ApiClient {
    async fn list_transactions(&self, filter: &TransactionFilter) -> Result<Page<Transaction>> {
        let list: ListResponse<Transaction> = self
            .get_with_query(TRANSACTIONS_PATH, &filter.to_query_pairs())
            .await?;
        let page = list.into_page();
        info!(
            "[TuCashApi] Fetched {} transactions (page {} of {})",
            page.content.len(),
            page.number + 1,
            page.total_pages.max(1)
        );
        Ok(page)
    }

    async fn get_transaction(&self, transaction_id: i64) -> Result<Transaction> {
        self.get(&format!("{}/{}", TRANSACTIONS_PATH, transaction_id))
            .await
    }

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;
        self.send_json(Method::POST, TRANSACTIONS_PATH, &new_transaction)
            .await
    }

    async fn update_transaction(
        &self,
        transaction_id: i64,
        update: TransactionUpdate,
    ) -> Result<Transaction> {
        update.validate()?;
        self.send_json(
            Method::PUT,
            &format!("{}/{}", TRANSACTIONS_PATH, transaction_id),
            &update,
        )
        .await
    }

    async fn delete_transaction(&self, transaction_id: i64) -> Result<()> {
        self.send_unit(
            Method::DELETE,
            &format!("{}/{}", TRANSACTIONS_PATH, transaction_id),
        )
        .await
    }
}
