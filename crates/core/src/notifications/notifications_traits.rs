use async_trait::async_trait;

use super::notifications_model::Notification;
use crate::errors::Result;

/// Command/query operations on the `/notifications` collection.
#[async_trait]
pub trait NotificationClientTrait: Send + Sync {
    async fn list_notifications(&self) -> Result<Vec<Notification>>;
    async fn list_unread_notifications(&self) -> Result<Vec<Notification>>;
    async fn get_notification(&self, notification_id: i64) -> Result<Notification>;
    async fn mark_notification_as_read(&self, notification_id: i64) -> Result<Notification>;
    async fn mark_all_notifications_as_read(&self) -> Result<()>;
    async fn delete_notification(&self, notification_id: i64) -> Result<()>;
    async fn delete_read_notifications(&self) -> Result<()>;
}
