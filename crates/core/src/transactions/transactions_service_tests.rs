use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::{ApiError, Error, Result};
use crate::pagination::Page;
use crate::transactions::{
    list_all_transactions, NewTransaction, Transaction, TransactionClientTrait,
    TransactionFilter, TransactionType, TransactionUpdate,
};

fn transaction(id: i64) -> Transaction {
    Transaction {
        id,
        account_id: 1,
        account_name: None,
        category_id: 5,
        category_name: None,
        category_icon: None,
        transaction_type: TransactionType::Expense,
        amount: Decimal::from(id),
        transaction_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        description: None,
        goal_id: None,
        created_at: None,
        updated_at: None,
    }
}

/// Serves `pages` in order and records the page numbers asked for.
struct PagedTransactionClient {
    pages: Vec<Page<Transaction>>,
    requested: Mutex<Vec<u32>>,
    fail_on: Option<u32>,
}

impl PagedTransactionClient {
    fn new(pages: Vec<Page<Transaction>>) -> Self {
        Self {
            pages,
            requested: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }
}

#[async_trait]
impl TransactionClientTrait for PagedTransactionClient {
    async fn list_transactions(&self, filter: &TransactionFilter) -> Result<Page<Transaction>> {
        self.requested.lock().unwrap().push(filter.page);
        if self.fail_on == Some(filter.page) {
            return Err(Error::Api(ApiError::new(503, "Service Unavailable")));
        }
        Ok(self
            .pages
            .get(filter.page as usize)
            .cloned()
            .unwrap_or_else(|| Page::single(Vec::new())))
    }

    async fn get_transaction(&self, transaction_id: i64) -> Result<Transaction> {
        Ok(transaction(transaction_id))
    }

    async fn create_transaction(&self, _new_transaction: NewTransaction) -> Result<Transaction> {
        Ok(transaction(1))
    }

    async fn update_transaction(
        &self,
        transaction_id: i64,
        _update: TransactionUpdate,
    ) -> Result<Transaction> {
        Ok(transaction(transaction_id))
    }

    async fn delete_transaction(&self, _transaction_id: i64) -> Result<()> {
        Ok(())
    }
}

fn page(ids: &[i64], number: u32, total_pages: u32, size: u32) -> Page<Transaction> {
    Page {
        content: ids.iter().copied().map(transaction).collect(),
        total_elements: 0,
        total_pages,
        number,
        size,
        first: number == 0,
        last: number + 1 == total_pages,
        empty: ids.is_empty(),
    }
}

#[tokio::test]
async fn test_walks_every_page() {
    let client = PagedTransactionClient::new(vec![page(&[1, 2], 0, 2, 2), page(&[3], 1, 2, 2)]);

    let all = list_all_transactions(&client, &TransactionFilter::default().with_size(2))
        .await
        .unwrap();

    assert_eq!(all.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(*client.requested.lock().unwrap(), vec![0, 1]);
}

#[tokio::test]
async fn test_envelope_without_flags_stops_on_short_page() {
    let mut first = page(&[1, 2], 0, 0, 2);
    first.last = false;
    let mut second = page(&[3], 1, 0, 2);
    second.last = false;
    let client = PagedTransactionClient::new(vec![first, second]);

    let all = list_all_transactions(&client, &TransactionFilter::default().with_size(2))
        .await
        .unwrap();

    assert_eq!(all.len(), 3);
    assert_eq!(*client.requested.lock().unwrap(), vec![0, 1]);
}

#[tokio::test]
async fn test_bare_array_is_a_single_request() {
    let client = PagedTransactionClient::new(vec![Page::single(vec![
        transaction(1),
        transaction(2),
        transaction(3),
    ])]);

    let all = list_all_transactions(&client, &TransactionFilter::default().with_size(2))
        .await
        .unwrap();

    assert_eq!(all.len(), 3);
    assert_eq!(client.requested.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_failure_on_a_later_page_is_returned() {
    let client = PagedTransactionClient {
        fail_on: Some(1),
        ..PagedTransactionClient::new(vec![page(&[1, 2], 0, 2, 2), page(&[3], 1, 2, 2)])
    };

    let err = list_all_transactions(&client, &TransactionFilter::default().with_size(2))
        .await
        .unwrap_err();

    assert_eq!(err.message_key(), "errors.server");
}
