use gramfetch_core::endpoints::location_url;
use gramfetch_core::feed::location_top_posts;
use gramfetch_core::location::location_from_page;
use gramfetch_core::{Feed, Location, Media, TOP_POSTS_LEN};

use crate::client::Client;
use crate::error::{Error, Result};

impl Client {
    /// Look up a location by id.
    pub async fn location_by_id(&self, location_id: &str) -> Result<Location> {
        let document = self
            .fetch_document(&location_url(self.base_url(), location_id, ""))
            .await?;

        location_from_page(&document).ok_or_else(|| Error::parse("location"))
    }

    /// Fetch up to `quantity` recent posts tagged with a location.
    pub async fn location_media(&self, location_id: &str, quantity: usize) -> Result<Vec<Media>> {
        self.collect_feed(&Feed::location(location_id), quantity)
            .await
    }

    /// Top posts of a location. Slots whose entry did not map are `None`.
    pub async fn location_top_media(
        &self,
        location_id: &str,
    ) -> Result<[Option<Media>; TOP_POSTS_LEN]> {
        let document = self
            .fetch_document(&location_url(self.base_url(), location_id, ""))
            .await?;

        Ok(location_top_posts(&document))
    }
}
