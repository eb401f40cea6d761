use gramfetch_core::account::accounts_from_search;
use gramfetch_core::endpoints::search_url;
use gramfetch_core::Account;

use crate::client::Client;
use crate::error::Result;

impl Client {
    /// Search accounts by name. Results that fail to map are left out.
    pub async fn search_users(&self, query: &str) -> Result<Vec<Account>> {
        let document = self
            .fetch_document(&search_url(self.base_url(), query))
            .await?;

        Ok(accounts_from_search(&document))
    }
}
