use async_trait::async_trait;
use log::info;
use reqwest::Method;

use tucash_core::budgets::{Budget, BudgetClientTrait, NewBudget};
use tucash_core::errors::Result;

use crate::client::ApiClient;

const BUDGETS_PATH: &str = "/budgets";

#[async_trait]
impl BudgetClientTrait for ApiClient {
    /// Server-side spent fields, if any, are dropped during decoding.
    async fn list_budgets(&self) -> Result<Vec<Budget>> {
        let budgets: Vec<Budget> = self.get_list(BUDGETS_PATH).await?;
        info!("[TuCashApi] Fetched {} budgets", budgets.len());
        Ok(budgets)
    }

    async fn get_budget(&self, budget_id: i64) -> Result<Budget> {
        self.get(&format!("{}/{}", BUDGETS_PATH, budget_id)).await
    }

    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        new_budget.validate()?;
        self.send_json(Method::POST, BUDGETS_PATH, &new_budget).await
    }

    async fn delete_budget(&self, budget_id: i64) -> Result<()> {
        self.send_unit(Method::DELETE, &format!("{}/{}", BUDGETS_PATH, budget_id))
            .await
    }
}
