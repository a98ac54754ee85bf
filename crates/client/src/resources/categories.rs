use async_trait::async_trait;
use reqwest::Method;

use tucash_core::categories::{Category, CategoryClientTrait, CategoryType, NewCategory};
use tucash_core::errors::Result;
use tucash_core::pagination::ListResponse;

use crate::client::ApiClient;

const CATEGORIES_PATH: &str = "/categories";

#[async_trait]
impl CategoryClientTrait for ApiClient {
    async fn list_categories(&self, category_type: Option<CategoryType>) -> Result<Vec<Category>> {
        let query: Vec<(&str, String)> = category_type
            .map(|t| vec![("type", t.as_str().to_string())])
            .unwrap_or_default();
        let list: ListResponse<Category> = self.get_with_query(CATEGORIES_PATH, &query).await?;
        Ok(list.into_vec())
    }

    async fn get_category(&self, category_id: i64) -> Result<Category> {
        self.get(&format!("{}/{}", CATEGORIES_PATH, category_id))
            .await
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        new_category.validate()?;
        self.send_json(Method::POST, CATEGORIES_PATH, &new_category)
            .await
    }

    async fn delete_category(&self, category_id: i64) -> Result<()> {
        self.send_unit(Method::DELETE, &format!("{}/{}", CATEGORIES_PATH, category_id))
            .await
    }
}
