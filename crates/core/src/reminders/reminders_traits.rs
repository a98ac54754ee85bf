use async_trait::async_trait;

use super::reminders_model::{NewReminder, Reminder};
use crate::errors::Result;

/// Command/query operations on the `/reminders` collection.
#[async_trait]
pub trait ReminderClientTrait: Send + Sync {
    async fn list_reminders(&self) -> Result<Vec<Reminder>>;
    async fn get_reminder(&self, reminder_id: i64) -> Result<Reminder>;
    async fn create_reminder(&self, new_reminder: NewReminder) -> Result<Reminder>;
    async fn complete_reminder(&self, reminder_id: i64) -> Result<Reminder>;
    async fn delete_reminder(&self, reminder_id: i64) -> Result<()>;
}
