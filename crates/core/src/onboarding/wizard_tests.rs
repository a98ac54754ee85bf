use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;
use crate::accounts::{Account, AccountClientTrait, NewAccount};
use crate::errors::{ApiError, Error, Result};
use crate::pagination::Page;
use crate::transactions::{
    NewTransaction, Transaction, TransactionClientTrait, TransactionFilter, TransactionType,
    TransactionUpdate,
};

#[derive(Default)]
struct MockAccountClient {
    accounts: Mutex<Vec<Account>>,
    fail: bool,
    list_calls: AtomicUsize,
}

#[async_trait]
impl AccountClientTrait for MockAccountClient {
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Api(ApiError::connection("connection refused")));
        }
        Ok(self.accounts.lock().unwrap().clone())
    }

    async fn get_account(&self, account_id: i64) -> Result<Account> {
        Err(Error::Api(ApiError::new(404, format!("Account {}", account_id))))
    }

    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        if self.fail {
            return Err(Error::Api(ApiError::new(500, "Internal Server Error")));
        }
        let mut accounts = self.accounts.lock().unwrap();
        let account = Account {
            id: accounts.len() as i64 + 1,
            name: new_account.name,
            currency: new_account.currency,
            ..Default::default()
        };
        accounts.push(account.clone());
        Ok(account)
    }

    async fn delete_account(&self, _account_id: i64) -> Result<()> {
        Ok(())
    }
}

#[derive(Default)]
struct MockTransactionClient {
    created: Mutex<Vec<NewTransaction>>,
    fail: bool,
}

#[async_trait]
impl TransactionClientTrait for MockTransactionClient {
    async fn list_transactions(&self, _filter: &TransactionFilter) -> Result<Page<Transaction>> {
        Ok(Page::single(Vec::new()))
    }

    async fn get_transaction(&self, transaction_id: i64) -> Result<Transaction> {
        Err(Error::Api(ApiError::new(404, format!("Transaction {}", transaction_id))))
    }

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        if self.fail {
            return Err(Error::Api(ApiError::connection("timeout")));
        }
        self.created.lock().unwrap().push(new_transaction.clone());
        Ok(Transaction {
            id: 99,
            account_id: new_transaction.account_id,
            account_name: None,
            category_id: new_transaction.category_id,
            category_name: None,
            category_icon: None,
            transaction_type: new_transaction.transaction_type,
            amount: new_transaction.amount,
            transaction_date: new_transaction.transaction_date,
            description: new_transaction.description,
            goal_id: None,
            created_at: None,
            updated_at: None,
        })
    }

    async fn update_transaction(
        &self,
        transaction_id: i64,
        _update: TransactionUpdate,
    ) -> Result<Transaction> {
        Err(Error::Api(ApiError::new(404, format!("Transaction {}", transaction_id))))
    }

    async fn delete_transaction(&self, _transaction_id: i64) -> Result<()> {
        Ok(())
    }
}

fn draft() -> TransactionDraft {
    TransactionDraft {
        category_id: 3,
        transaction_type: TransactionType::Expense,
        amount: dec!(12.50),
        transaction_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        description: Some("Lunch".into()),
    }
}

#[test]
fn test_next_and_back_clamp() {
    let mut wizard = Wizard::new();
    assert_eq!(wizard.back(), WizardStep::Welcome);
    wizard.next();
    wizard.next();
    assert_eq!(wizard.next(), WizardStep::Summary);
    assert_eq!(wizard.next(), WizardStep::Summary);
    assert_eq!(wizard.current_step().index(), 3);
    assert_eq!(wizard.back(), WizardStep::Transaction);
}

#[test]
fn test_step_descriptors() {
    let mut wizard = Wizard::new();
    wizard.next();
    wizard.next();
    let steps = wizard.steps();
    let completed: Vec<bool> = steps.iter().map(|s| s.completed).collect();
    assert_eq!(completed, vec![true, true, false, false]);
    let optional: Vec<bool> = steps.iter().map(|s| s.optional).collect();
    assert_eq!(optional, vec![false, false, true, false]);
    assert_eq!(steps[2].title_key, "onboarding.steps.transaction");
}

#[test]
fn test_skip_transaction_only_from_transaction_step() {
    let mut wizard = Wizard::new();
    assert_eq!(wizard.skip_transaction(), WizardStep::Welcome);

    wizard.next();
    wizard.account_created(Account {
        id: 1,
        name: "Cash".into(),
        currency: "PEN".into(),
        ..Default::default()
    });
    assert_eq!(wizard.current_step(), WizardStep::Transaction);
    assert_eq!(wizard.skip_transaction(), WizardStep::Summary);

    let summary = wizard.summary();
    assert_eq!(summary.account_name.as_deref(), Some("Cash"));
    assert!(!summary.has_transaction);
}

#[tokio::test]
async fn test_full_flow_with_transaction() {
    let accounts = MockAccountClient::default();
    let transactions = MockTransactionClient::default();
    let mut wizard = Wizard::new();
    wizard.next();

    let account = wizard
        .submit_account(&accounts, NewAccount::new("Wallet", "PEN"))
        .await
        .unwrap();
    assert_eq!(wizard.current_step(), WizardStep::Transaction);

    wizard.submit_transaction(&transactions, draft()).await.unwrap();
    assert!(wizard.is_finished());
    assert!(wizard.summary().has_transaction);
    assert_eq!(transactions.created.lock().unwrap()[0].account_id, account.id);
}

#[tokio::test]
async fn test_failed_account_creation_stays_on_step() {
    let accounts = MockAccountClient {
        fail: true,
        ..Default::default()
    };
    let mut wizard = Wizard::new();
    wizard.next();

    let result = wizard
        .submit_account(&accounts, NewAccount::new("Wallet", "PEN"))
        .await;

    assert!(result.is_err());
    assert_eq!(wizard.current_step(), WizardStep::Account);
    assert_eq!(wizard.error(), Some(ACCOUNT_SAVE_ERROR));
    assert!(wizard.created_account().is_none());

    wizard.back();
    assert_eq!(wizard.error(), None);
}

#[tokio::test]
async fn test_invalid_account_is_not_sent() {
    let accounts = MockAccountClient::default();
    let mut wizard = Wizard::new();
    wizard.next();

    let err = wizard
        .submit_account(&accounts, NewAccount::new("  ", "PEN"))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(accounts.accounts.lock().unwrap().is_empty());
    assert_eq!(wizard.error(), Some("errors.validation"));
}

#[tokio::test]
async fn test_failed_transaction_stays_on_step() {
    let transactions = MockTransactionClient {
        fail: true,
        ..Default::default()
    };
    let mut wizard = Wizard::new();
    wizard.next();
    wizard.account_created(Account {
        id: 7,
        ..Default::default()
    });

    assert!(wizard.submit_transaction(&transactions, draft()).await.is_err());
    assert_eq!(wizard.current_step(), WizardStep::Transaction);
    assert_eq!(wizard.error(), Some(TRANSACTION_SAVE_ERROR));
    assert!(wizard.created_transaction().is_none());
}

#[test]
fn test_summary_is_not_reachable_by_a_direct_jump() {
    let mut wizard = Wizard::new();

    let tx = Transaction {
        id: 3,
        account_id: 1,
        category_id: 5,
        transaction_type: TransactionType::Expense,
        amount: dec!(10),
        transaction_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        account_name: None,
        category_name: None,
        category_icon: None,
        description: None,
        goal_id: None,
        created_at: None,
        updated_at: None,
    };
    assert_eq!(wizard.transaction_created(tx.clone()), WizardStep::Welcome);
    assert!(wizard.created_transaction().is_none());

    assert_eq!(
        wizard.account_created(Account {
            id: 1,
            ..Default::default()
        }),
        WizardStep::Welcome
    );
    assert!(wizard.created_account().is_none());

    wizard.next();
    assert_eq!(wizard.transaction_created(tx), WizardStep::Account);
    assert!(!wizard.is_finished());
}

#[tokio::test]
async fn test_submit_account_off_step_sends_nothing() {
    let accounts = MockAccountClient::default();
    let mut wizard = Wizard::new();

    let err = wizard
        .submit_account(&accounts, NewAccount::new("Wallet", "PEN"))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(wizard.current_step(), WizardStep::Welcome);
    assert!(accounts.accounts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_transaction_requires_created_account() {
    let transactions = MockTransactionClient::default();
    let mut wizard = Wizard::new();
    wizard.next();
    wizard.next();

    let err = wizard.submit_transaction(&transactions, draft()).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(wizard.error(), Some(ACCOUNT_REQUIRED_ERROR));
    assert!(transactions.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_gate_shows_once_for_empty_account_list() {
    let accounts = MockAccountClient::default();
    let gate = OnboardingGate::new();

    assert!(gate.should_show(&accounts).await.unwrap());
    assert!(!gate.should_show(&accounts).await.unwrap());
    assert_eq!(accounts.list_calls.load(Ordering::SeqCst), 1);

    gate.reset();
    accounts
        .create_account(NewAccount::new("Bank", "USD"))
        .await
        .unwrap();
    assert!(!gate.should_show(&accounts).await.unwrap());
}

#[tokio::test]
async fn test_gate_retries_after_failed_lookup() {
    let failing = MockAccountClient {
        fail: true,
        ..Default::default()
    };
    let gate = OnboardingGate::new();
    assert!(gate.should_show(&failing).await.is_err());

    let empty = MockAccountClient::default();
    assert!(gate.should_show(&empty).await.unwrap());
}
