use gramfetch_core::endpoints::DEFAULT_BASE_URL;

use crate::error::{Error, Result};

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl ClientConfig {
    /// Default User-Agent sent with every request
    pub const DEFAULT_USER_AGENT: &'static str = concat!("gramfetch/", env!("CARGO_PKG_VERSION"));

    /// Load configuration from environment variables
    /// Uses GRAMFETCH_BASE_URL with default fallback
    /// Uses GRAMFETCH_USER_AGENT with default fallback
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("GRAMFETCH_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            user_agent: std::env::var("GRAMFETCH_USER_AGENT")
                .unwrap_or_else(|_| Self::DEFAULT_USER_AGENT.to_string()),
        }
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, base_url: Option<String>, user_agent: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(agent) = user_agent {
            self.user_agent = agent;
        }
        self
    }

    /// Point the client at a different host, e.g. a fixture server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
        }
    }
}
