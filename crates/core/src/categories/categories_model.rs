//! Category domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Whether a category classifies income or expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryType {
    Income,
    Expense,
}

impl CategoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::Income => "INCOME",
            CategoryType::Expense => "EXPENSE",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub is_system_category: bool,
}

/// Input model for creating a user-defined category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl NewCategory {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        Ok(())
    }
}

/// Finds a category by id in an already-fetched list.
pub fn find_category(categories: &[Category], category_id: i64) -> Option<&Category> {
    categories.iter().find(|c| c.id == category_id)
}

/// Display name for a category id, falling back to `Category #<id>`.
pub fn category_display_name(categories: &[Category], category_id: i64) -> String {
    find_category(categories, category_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| format!("Category #{}", category_id))
}
