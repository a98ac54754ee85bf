use async_trait::async_trait;
use reqwest::Method;

use tucash_core::errors::Result;
use tucash_core::goals::{Goal, GoalClientTrait, GoalContribution, GoalProgressUpdate, NewGoal};
use tucash_core::transactions::Transaction;

use crate::client::ApiClient;

const GOALS_PATH: &str = "/goals";

fn goal_path(goal_id: i64) -> String {
    format!("{}/{}", GOALS_PATH, goal_id)
}

#[async_trait]
impl GoalClientTrait for ApiClient {
    async fn list_goals(&self) -> Result<Vec<Goal>> {
        self.get_list(GOALS_PATH).await
    }

    async fn get_goal(&self, goal_id: i64) -> Result<Goal> {
        self.get(&goal_path(goal_id)).await
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        self.send_json(Method::POST, GOALS_PATH, &new_goal).await
    }

    async fn update_goal_progress(&self, goal_id: i64, update: GoalProgressUpdate) -> Result<Goal> {
        self.send_json(
            Method::PATCH,
            &format!("{}/progress", goal_path(goal_id)),
            &update,
        )
        .await
    }

    async fn celebrate_goal(&self, goal_id: i64) -> Result<Goal> {
        self.send_empty(Method::POST, &format!("{}/celebrate", goal_path(goal_id)))
            .await
    }

    async fn delete_goal(&self, goal_id: i64) -> Result<()> {
        self.send_unit(Method::DELETE, &goal_path(goal_id)).await
    }

    async fn contribute_to_goal(
        &self,
        goal_id: i64,
        contribution: GoalContribution,
    ) -> Result<Transaction> {
        contribution.validate()?;
        self.send_json(
            Method::POST,
            &format!("{}/contributions", goal_path(goal_id)),
            &contribution,
        )
        .await
    }

    async fn list_goal_contributions(&self, goal_id: i64) -> Result<Vec<Transaction>> {
        self.get_list(&format!("{}/contributions", goal_path(goal_id)))
            .await
    }

    async fn revert_goal_contribution(
        &self,
        goal_id: i64,
        transaction_id: i64,
    ) -> Result<Transaction> {
        self.send_empty(
            Method::DELETE,
            &format!("{}/contributions/{}", goal_path(goal_id), transaction_id),
        )
        .await
    }
}
