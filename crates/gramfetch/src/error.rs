#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Can't parse {0}")]
    Parse(String),

    #[error("Not a post URL: {0}")]
    InvalidMediaUrl(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn parse(what: &str) -> Self {
        Error::Parse(what.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
