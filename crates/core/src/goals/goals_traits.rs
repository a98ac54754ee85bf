use async_trait::async_trait;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalContribution, GoalProgressUpdate, NewGoal};
use crate::transactions::Transaction;

/// Command/query operations on the `/goals` collection.
#[async_trait]
pub trait GoalClientTrait: Send + Sync {
    async fn list_goals(&self) -> Result<Vec<Goal>>;
    async fn get_goal(&self, goal_id: i64) -> Result<Goal>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal_progress(&self, goal_id: i64, update: GoalProgressUpdate) -> Result<Goal>;
    /// Marks a completed goal as celebrated.
    async fn celebrate_goal(&self, goal_id: i64) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: i64) -> Result<()>;
    /// Records a contribution; the backend answers with the created transaction.
    async fn contribute_to_goal(
        &self,
        goal_id: i64,
        contribution: GoalContribution,
    ) -> Result<Transaction>;
    async fn list_goal_contributions(&self, goal_id: i64) -> Result<Vec<Transaction>>;
    async fn revert_goal_contribution(&self, goal_id: i64, transaction_id: i64)
        -> Result<Transaction>;
}
