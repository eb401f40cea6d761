use gramfetch_core::endpoints::media_info_url;
use gramfetch_core::media::{code_from_url, media_from_page};
use gramfetch_core::Media;

use crate::client::Client;
use crate::error::{Error, Result};

impl Client {
    /// Look up a post by its short code.
    pub async fn media_by_code(&self, code: &str) -> Result<Media> {
        let document = self
            .fetch_document(&media_info_url(self.base_url(), code))
            .await?;

        media_from_page(&document).ok_or_else(|| Error::parse("media"))
    }

    /// Look up a post by its public URL, e.g. `https://www.instagram.com/p/<code>/`.
    pub async fn media_by_url(&self, url: &str) -> Result<Media> {
        let code = code_from_url(url).ok_or_else(|| Error::InvalidMediaUrl(url.to_string()))?;
        self.media_by_code(&code).await
    }
}
