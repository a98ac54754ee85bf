//! First-run wizard: welcome, create an account, optionally record a first
//! transaction, then a summary.

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::wizard_model::{StepDescriptor, WizardStep, WizardSummary};
use crate::accounts::{Account, AccountClientTrait, NewAccount};
use crate::errors::{Error, Result, ValidationError};
use crate::transactions::{NewTransaction, Transaction, TransactionClientTrait, TransactionType};

pub const ACCOUNT_SAVE_ERROR: &str = "accounts.form.errors.save";
pub const TRANSACTION_SAVE_ERROR: &str = "transactions.form.errors.save";
pub const ACCOUNT_REQUIRED_ERROR: &str = "onboarding.errors.accountRequired";

/// The transaction form on step 2. The account comes from step 1.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub category_id: i64,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub transaction_date: NaiveDate,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Wizard {
    current: WizardStep,
    created_account: Option<Account>,
    created_transaction: Option<Transaction>,
    error: Option<String>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> WizardStep {
        self.current
    }

    pub fn created_account(&self) -> Option<&Account> {
        self.created_account.as_ref()
    }

    pub fn created_transaction(&self) -> Option<&Transaction> {
        self.created_transaction.as_ref()
    }

    /// Message key of the last failed submission, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_finished(&self) -> bool {
        self.current == WizardStep::Summary
    }

    pub fn next(&mut self) -> WizardStep {
        self.move_to(self.current.next())
    }

    pub fn back(&mut self) -> WizardStep {
        self.move_to(self.current.previous())
    }

    /// Records the account from step 1 and moves one step forward. Ignored
    /// on any other step.
    pub fn account_created(&mut self, account: Account) -> WizardStep {
        if self.current != WizardStep::Account {
            warn!(
                "Ignoring onboarding account #{} outside the account step ({:?})",
                account.id, self.current
            );
            return self.current;
        }
        debug!("Onboarding account created: #{}", account.id);
        self.created_account = Some(account);
        self.next()
    }

    /// Records the first transaction and moves one step forward. Ignored on
    /// any step but the transaction step.
    pub fn transaction_created(&mut self, transaction: Transaction) -> WizardStep {
        if self.current != WizardStep::Transaction {
            warn!(
                "Ignoring onboarding transaction #{} outside the transaction step ({:?})",
                transaction.id, self.current
            );
            return self.current;
        }
        debug!("Onboarding transaction created: #{}", transaction.id);
        self.created_transaction = Some(transaction);
        self.next()
    }

    /// Skips the optional transaction step. Has no effect on other steps.
    pub fn skip_transaction(&mut self) -> WizardStep {
        if self.current == WizardStep::Transaction {
            self.move_to(WizardStep::Summary)
        } else {
            self.current
        }
    }

    pub fn steps(&self) -> Vec<StepDescriptor> {
        WizardStep::ALL
            .iter()
            .map(|step| StepDescriptor {
                id: step.index(),
                title_key: step.title_key(),
                completed: self.current > *step,
                optional: step.is_optional(),
            })
            .collect()
    }

    pub fn summary(&self) -> WizardSummary {
        WizardSummary {
            account_name: self.created_account.as_ref().map(|a| a.name.clone()),
            has_transaction: self.created_transaction.is_some(),
        }
    }

    /// Creates the account through `client`. On failure the wizard stays on
    /// the current step with an inline error; nothing is retried.
    pub async fn submit_account(
        &mut self,
        client: &dyn AccountClientTrait,
        new_account: NewAccount,
    ) -> Result<Account> {
        self.require_step(WizardStep::Account)?;
        if let Err(e) = new_account.validate() {
            self.error = Some(e.message_key().to_string());
            return Err(e);
        }
        match client.create_account(new_account).await {
            Ok(account) => {
                self.account_created(account.clone());
                Ok(account)
            }
            Err(e) => {
                warn!("Error creating onboarding account: {}", e);
                self.error = Some(ACCOUNT_SAVE_ERROR.to_string());
                Err(e)
            }
        }
    }

    /// Creates the first transaction against the account from step 1.
    pub async fn submit_transaction(
        &mut self,
        client: &dyn TransactionClientTrait,
        draft: TransactionDraft,
    ) -> Result<Transaction> {
        let account_id = match &self.created_account {
            Some(account) => account.id,
            None => {
                self.error = Some(ACCOUNT_REQUIRED_ERROR.to_string());
                return Err(Error::Validation(ValidationError::MissingField(
                    "accountId".to_string(),
                )));
            }
        };
        self.require_step(WizardStep::Transaction)?;
        let new_transaction = NewTransaction {
            account_id,
            category_id: draft.category_id,
            transaction_type: draft.transaction_type,
            amount: draft.amount,
            transaction_date: draft.transaction_date,
            description: draft.description,
        };
        if let Err(e) = new_transaction.validate() {
            self.error = Some(e.message_key().to_string());
            return Err(e);
        }
        match client.create_transaction(new_transaction).await {
            Ok(transaction) => {
                self.transaction_created(transaction.clone());
                Ok(transaction)
            }
            Err(e) => {
                warn!("Error creating onboarding transaction: {}", e);
                self.error = Some(TRANSACTION_SAVE_ERROR.to_string());
                Err(e)
            }
        }
    }

    fn require_step(&mut self, step: WizardStep) -> Result<()> {
        if self.current == step {
            return Ok(());
        }
        let err = Error::Validation(ValidationError::InvalidInput(format!(
            "{:?} step is not active (current: {:?})",
            step, self.current
        )));
        self.error = Some(err.message_key().to_string());
        Err(err)
    }

    fn move_to(&mut self, step: WizardStep) -> WizardStep {
        self.error = None;
        self.current = step;
        self.current
    }
}
