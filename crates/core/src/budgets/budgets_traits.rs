use async_trait::async_trait;

use super::budgets_model::{Budget, NewBudget};
use crate::errors::Result;

/// Command/query operations on the `/budgets` collection.
#[async_trait]
pub trait BudgetClientTrait: Send + Sync {
    async fn list_budgets(&self) -> Result<Vec<Budget>>;
    async fn get_budget(&self, budget_id: i64) -> Result<Budget>;
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget>;
    async fn delete_budget(&self, budget_id: i64) -> Result<()>;
}
