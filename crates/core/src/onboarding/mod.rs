//! Onboarding module - the first-run wizard and when to show it.

mod onboarding_gate;
mod wizard;
mod wizard_model;

#[cfg(test)]
mod wizard_tests;

pub use onboarding_gate::OnboardingGate;
pub use wizard::{
    TransactionDraft, Wizard, ACCOUNT_REQUIRED_ERROR, ACCOUNT_SAVE_ERROR, TRANSACTION_SAVE_ERROR,
};
pub use wizard_model::{StepDescriptor, WizardStep, WizardSummary};
