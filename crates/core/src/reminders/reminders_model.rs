//! Reminder domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::api_date;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "api_date")]
    pub due_date: NaiveDate,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Reminder {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_completed && self.due_date < today
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "api_date")]
    pub due_date: NaiveDate,
}

impl NewReminder {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "title".to_string(),
            )));
        }
        Ok(())
    }
}

/// Open reminders, soonest due first.
pub fn pending(reminders: &[Reminder]) -> Vec<&Reminder> {
    let mut open: Vec<&Reminder> = reminders.iter().filter(|r| !r.is_completed).collect();
    open.sort_by_key(|r| r.due_date);
    open
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder(id: i64, due: &str, is_completed: bool) -> Reminder {
        Reminder {
            id,
            title: format!("Reminder {}", id),
            description: None,
            due_date: crate::utils::parse_api_date(due).unwrap(),
            is_completed,
            created_at: None,
        }
    }

    #[test]
    fn test_pending_excludes_completed_and_sorts() {
        let list = vec![
            reminder(1, "2024-05-10", false),
            reminder(2, "2024-04-01", true),
            reminder(3, "2024-04-20", false),
        ];
        let ids: Vec<i64> = pending(&list).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_overdue() {
        let today = NaiveDate::from_ymd_opt(2024, 4, 21).unwrap();
        assert!(reminder(1, "2024-04-20", false).is_overdue(today));
        assert!(!reminder(2, "2024-04-20", true).is_overdue(today));
        assert!(!reminder(3, "2024-04-21", false).is_overdue(today));
    }

    #[test]
    fn test_new_reminder_requires_title() {
        let new_reminder = NewReminder {
            title: "  ".into(),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert!(new_reminder.validate().unwrap_err().is_validation());
    }
}
