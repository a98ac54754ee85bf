//! Notifications module - models and resource traits.

mod notifications_model;
mod notifications_traits;

pub use notifications_model::{unread_count, Notification, NotificationType};
pub use notifications_traits::NotificationClientTrait;
