use gramfetch_core::account::account_from_profile_page;
use gramfetch_core::endpoints::account_info_url;
use gramfetch_core::{Account, Feed, Media};
use log::debug;

use crate::client::Client;
use crate::error::{Error, Result};

impl Client {
    /// Look up an account by username.
    pub async fn account_by_username(&self, username: &str) -> Result<Account> {
        let document = self
            .fetch_document(&account_info_url(self.base_url(), username))
            .await?;

        account_from_profile_page(&document).ok_or_else(|| Error::parse("account"))
    }

    /// Fetch up to `quantity` of an account's most recent posts.
    ///
    /// Entries that fail to map are skipped but still count toward `quantity`.
    pub async fn account_media(&self, username: &str, quantity: usize) -> Result<Vec<Media>> {
        self.collect_feed(&Feed::account_media(username), quantity)
            .await
    }

    /// Fetch every post of an account, using its reported media count as the cap.
    pub async fn all_account_media(&self, username: &str) -> Result<Vec<Media>> {
        let account = self.account_by_username(username).await?;
        let count = account
            .media_count
            .map(|c| usize::try_from(c).unwrap_or(usize::MAX))
            .unwrap_or(0);

        debug!("{username} reports {count} posts");
        self.account_media(username, count).await
    }
}
