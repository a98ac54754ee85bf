use async_trait::async_trait;
use reqwest::Method;

use tucash_core::errors::Result;
use tucash_core::reminders::{NewReminder, Reminder, ReminderClientTrait};

use crate::client::ApiClient;

const REMINDERS_PATH: &str = "/reminders";

#[async_trait]
impl ReminderClientTrait for ApiClient {
    async fn list_reminders(&self) -> Result<Vec<Reminder>> {
        self.get_list(REMINDERS_PATH).await
    }

    async fn get_reminder(&self, reminder_id: i64) -> Result<Reminder> {
        self.get(&format!("{}/{}", REMINDERS_PATH, reminder_id))
            .await
    }

    async fn create_reminder(&self, new_reminder: NewReminder) -> Result<Reminder> {
        new_reminder.validate()?;
        self.send_json(Method::POST, REMINDERS_PATH, &new_reminder)
            .await
    }

    async fn complete_reminder(&self, reminder_id: i64) -> Result<Reminder> {
        self.send_empty(
            Method::PATCH,
            &format!("{}/{}/complete", REMINDERS_PATH, reminder_id),
        )
        .await
    }

    async fn delete_reminder(&self, reminder_id: i64) -> Result<()> {
        self.send_unit(
            Method::DELETE,
            &format!("{}/{}", REMINDERS_PATH, reminder_id),
        )
        .await
    }
}
