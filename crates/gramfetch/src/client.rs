use gramfetch_core::feed::Feed;
use gramfetch_core::pagination::{Collector, PageFlow};
use gramfetch_core::Media;
use log::{debug, warn};
use reqwest::StatusCode;
use serde_json::{Map, Value};

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Read-only client for the platform's JSON endpoints
///
/// Every operation awaits its requests one after another on the caller's task.
/// Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch `url` and decode the body as a JSON object.
    ///
    /// A 404 yields an empty object rather than an error; the mapper that
    /// reads it then reports the shape mismatch.
    pub async fn fetch_document(&self, url: &str) -> Result<Value> {
        debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Failed to fetch {url}: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!("{url} returned 404, treating as empty document");
            return Ok(Value::Object(Map::new()));
        }
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read body of {url}: {e}")))?;

        let document: Map<String, Value> = serde_json::from_slice(&body)
            .map_err(|e| Error::Decode(format!("{url}: {e}")))?;

        Ok(Value::Object(document))
    }

    /// Walk a paged feed until `quantity` entries are consumed or the feed ends.
    ///
    /// A failed fetch on any page aborts the walk and the items gathered so
    /// far are dropped.
    pub async fn collect_feed(&self, feed: &Feed, quantity: usize) -> Result<Vec<Media>> {
        let mut collector = Collector::new(quantity);
        let mut page = 1;

        while collector.wants_page() {
            let url = feed.page_url(&self.base_url, collector.cursor());
            let document = self.fetch_document(&url).await?;
            let flow = collector.absorb(feed.read_page(&document), |entry| feed.map_entry(entry));

            debug!(
                "{} page {}: {} consumed, {} mapped, {}",
                feed.label(),
                page,
                collector.consumed(),
                collector.items().len(),
                match flow {
                    PageFlow::Continue => "continuing",
                    PageFlow::Done => "done",
                }
            );
            page += 1;
        }

        Ok(collector.into_items())
    }
}
