use async_trait::async_trait;
use log::debug;
use reqwest::Method;

use tucash_core::errors::Result;
use tucash_core::notifications::{Notification, NotificationClientTrait};

use crate::client::ApiClient;

const NOTIFICATIONS_PATH: &str = "/notifications";

#[async_trait]
impl NotificationClientTrait for ApiClient {
    async fn list_notifications(&self) -> Result<Vec<Notification>> {
        self.get_list(NOTIFICATIONS_PATH).await
    }

    async fn list_unread_notifications(&self) -> Result<Vec<Notification>> {
        let unread: Vec<Notification> = self
            .get_list(&format!("{}/unread", NOTIFICATIONS_PATH))
            .await?;
        debug!("[TuCashApi] {} unread notifications", unread.len());
        Ok(unread)
    }

    async fn get_notification(&self, notification_id: i64) -> Result<Notification> {
        self.get(&format!("{}/{}", NOTIFICATIONS_PATH, notification_id))
            .await
    }

    async fn mark_notification_as_read(&self, notification_id: i64) -> Result<Notification> {
        self.send_empty(
            Method::PATCH,
            &format!("{}/{}/read", NOTIFICATIONS_PATH, notification_id),
        )
        .await
    }

    async fn mark_all_notifications_as_read(&self) -> Result<()> {
        self.send_unit(Method::PATCH, &format!("{}/read-all", NOTIFICATIONS_PATH))
            .await
    }

    async fn delete_notification(&self, notification_id: i64) -> Result<()> {
        self.send_unit(
            Method::DELETE,
            &format!("{}/{}", NOTIFICATIONS_PATH, notification_id),
        )
        .await
    }

    async fn delete_read_notifications(&self) -> Result<()> {
        self.send_unit(Method::DELETE, &format!("{}/read", NOTIFICATIONS_PATH))
            .await
    }
}
