use async_trait::async_trait;

use super::categories_model::{Category, CategoryType, NewCategory};
use crate::errors::Result;

/// Command/query operations on the `/categories` collection.
#[async_trait]
pub trait CategoryClientTrait: Send + Sync {
    /// Lists categories, optionally restricted to one type.
    async fn list_categories(&self, category_type: Option<CategoryType>) -> Result<Vec<Category>>;
    async fn get_category(&self, category_id: i64) -> Result<Category>;
    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;
    async fn delete_category(&self, category_id: i64) -> Result<()>;
}
