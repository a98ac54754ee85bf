//! Notification domain models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    Info,
    Warning,
    Success,
    Error,
    Reminder,
    BudgetAlert,
    GoalAchieved,
    Goal,
    Budget,
    #[serde(other)]
    Other,
}

impl NotificationType {
    /// Icon name used when rendering a notification of this type.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationType::Info => "info",
            NotificationType::Warning | NotificationType::BudgetAlert => "warning",
            NotificationType::Success | NotificationType::GoalAchieved => "check_circle",
            NotificationType::Error => "error",
            NotificationType::Reminder => "alarm",
            NotificationType::Goal => "flag",
            NotificationType::Budget => "account_balance_wallet",
            NotificationType::Other => "notifications",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}
