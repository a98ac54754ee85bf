//! List response shapes returned by the backend.
//!
//! The Spring backend wraps collections in a paginated envelope while the
//! mock json-server returns bare arrays. Both are decoded at the boundary and
//! normalised to a plain `Vec<T>` before any aggregation sees them.

use serde::{Deserialize, Serialize};

/// Spring-style paginated envelope. Only `content` is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub empty: bool,
}

impl<T> Page<T> {
    /// Wraps a complete list as a single page.
    pub fn single(content: Vec<T>) -> Self {
        let len = content.len();
        Self {
            total_elements: len as u64,
            total_pages: u32::from(len > 0),
            number: 0,
            size: len as u32,
            first: true,
            last: true,
            empty: len == 0,
            content,
        }
    }
}

/// Either shape a list endpoint may answer with.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Paged(Page<T>),
}

impl<T> ListResponse<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Bare(items) => items,
            ListResponse::Paged(page) => page.content,
        }
    }

    /// Normalises to a page; a bare array becomes a single complete page.
    pub fn into_page(self) -> Page<T> {
        match self {
            ListResponse::Bare(items) => Page::single(items),
            ListResponse::Paged(page) => page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_array_decodes() {
        let parsed: ListResponse<i64> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(parsed.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_envelope_decodes() {
        let json = r#"{"content":[4,5],"totalPages":3,"totalElements":42,"number":0,"size":2}"#;
        let page = serde_json::from_str::<ListResponse<i64>>(json)
            .unwrap()
            .into_page();
        assert_eq!(page.content, vec![4, 5]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 42);
    }

    #[test]
    fn test_bare_array_as_page() {
        let page = serde_json::from_str::<ListResponse<i64>>("[]")
            .unwrap()
            .into_page();
        assert!(page.empty);
        assert_eq!(page.total_pages, 0);
    }
}
