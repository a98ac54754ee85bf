use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

use crate::accounts::AccountClientTrait;
use crate::errors::Result;

/// Decides whether to offer the wizard: at most once per session, and only
/// to users without any account.
#[derive(Debug, Default)]
pub struct OnboardingGate {
    checked: AtomicBool,
}

impl OnboardingGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// A failed lookup does not count as a check, so the next call asks again.
    pub async fn should_show(&self, accounts: &dyn AccountClientTrait) -> Result<bool> {
        if self.checked.load(Ordering::SeqCst) {
            return Ok(false);
        }
        let account_count = accounts.list_accounts().await?.len();
        if self.checked.swap(true, Ordering::SeqCst) {
            return Ok(false);
        }
        info!("Onboarding check: {} existing accounts", account_count);
        Ok(account_count == 0)
    }

    /// Forgets the check, e.g. after sign-out.
    pub fn reset(&self) {
        self.checked.store(false, Ordering::SeqCst);
    }
}
