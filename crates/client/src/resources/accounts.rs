use async_trait::async_trait;
use log::info;
use reqwest::Method;

use tucash_core::accounts::{Account, AccountClientTrait, NewAccount};
use tucash_core::errors::Result;

use crate::client::ApiClient;

const ACCOUNTS_PATH: &str = "/accounts";

#[async_trait]
impl AccountClientTrait for ApiClient {
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        let accounts: Vec<Account> = self.get_list(ACCOUNTS_PATH).await?;
        info!("[TuCashApi] Fetched {} accounts", accounts.len());
        Ok(accounts)
    }

    async fn get_account(&self, account_id: i64) -> Result<Account> {
        self.get(&format!("{}/{}", ACCOUNTS_PATH, account_id)).await
    }

    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        self.send_json(Method::POST, ACCOUNTS_PATH, &new_account).await
    }

    async fn delete_account(&self, account_id: i64) -> Result<()> {
        self.send_unit(Method::DELETE, &format!("{}/{}", ACCOUNTS_PATH, account_id))
            .await
    }
}
