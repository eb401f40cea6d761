use gramfetch_core::endpoints::tag_url;
use gramfetch_core::feed::tag_top_posts;
use gramfetch_core::{Feed, Media, TOP_POSTS_LEN};

use crate::client::Client;
use crate::error::Result;

impl Client {
    /// Fetch up to `quantity` recent posts for a hashtag (without the `#`).
    pub async fn tag_media(&self, tag: &str, quantity: usize) -> Result<Vec<Media>> {
        self.collect_feed(&Feed::tag(tag), quantity).await
    }

    /// Top posts of a hashtag. Slots whose entry did not map are `None`.
    pub async fn tag_top_media(&self, tag: &str) -> Result<[Option<Media>; TOP_POSTS_LEN]> {
        let document = self.fetch_document(&tag_url(self.base_url(), tag, "")).await?;

        Ok(tag_top_posts(&document))
    }
}
