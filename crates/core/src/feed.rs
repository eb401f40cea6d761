//! Paged feeds and their page envelopes
//!
//! Each feed knows how to build the URL for a page, how to pull the entries
//! and the continuation signal out of a page document, and how its cursor
//! moves forward. The account media listing advances on the id of the last
//! entry that mapped; location and tag feeds hand back an opaque
//! `end_cursor` that must be sent verbatim on the next request.

use serde::Deserialize;
use serde_json::Value;

use crate::de::{from_object, lenient, lenient_list};
use crate::endpoints::{account_media_url, location_url, tag_url};
use crate::media::{media_from_account_listing, media_from_listing_node, Media};

/// Number of slots in a top posts view.
pub const TOP_POSTS_LEN: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed {
    AccountMedia { username: String },
    Location { id: String },
    Tag { name: String },
}

/// How the cursor for the next page is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorAdvance {
    /// Use the id of the last entry on the page that mapped successfully.
    LastMappedId,
    /// Use the server supplied cursor as is.
    EndCursor(String),
}

/// Entries and continuation signal extracted from one page document.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedPage {
    pub entries: Vec<Value>,
    pub has_more: bool,
    pub advance: CursorAdvance,
}

impl Feed {
    pub fn account_media(username: impl Into<String>) -> Self {
        Feed::AccountMedia {
            username: username.into(),
        }
    }

    pub fn location(id: impl Into<String>) -> Self {
        Feed::Location { id: id.into() }
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Feed::Tag { name: name.into() }
    }

    /// URL of the page that starts at `cursor`. The first page uses an empty cursor.
    pub fn page_url(&self, base: &str, cursor: &str) -> String {
        match self {
            Feed::AccountMedia { username } => account_media_url(base, username, cursor),
            Feed::Location { id } => location_url(base, id, cursor),
            Feed::Tag { name } => tag_url(base, name, cursor),
        }
    }

    /// Pull entries and the continuation signal out of a page document.
    ///
    /// Missing keys read as an empty page with nothing more to fetch.
    pub fn read_page(&self, doc: &Value) -> FeedPage {
        match self {
            Feed::AccountMedia { .. } => read_account_media_page(doc),
            Feed::Location { .. } => read_explore_page(doc, "location"),
            Feed::Tag { .. } => read_explore_page(doc, "tag"),
        }
    }

    /// Map one entry of this feed to a [`Media`].
    pub fn map_entry(&self, entry: &Value) -> Option<Media> {
        match self {
            Feed::AccountMedia { .. } => media_from_account_listing(entry),
            Feed::Location { .. } | Feed::Tag { .. } => media_from_listing_node(entry),
        }
    }

    /// Short label used in log lines.
    pub fn label(&self) -> String {
        match self {
            Feed::AccountMedia { username } => format!("account media of {username}"),
            Feed::Location { id } => format!("location {id}"),
            Feed::Tag { name } => format!("tag #{name}"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AccountMediaEnvelope {
    #[serde(default, deserialize_with = "lenient_list")]
    items: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    more_available: Option<bool>,
}

fn read_account_media_page(doc: &Value) -> FeedPage {
    let envelope = from_object::<AccountMediaEnvelope>(doc);
    let (entries, has_more) = envelope
        .map(|e| (e.items.unwrap_or_default(), e.more_available.unwrap_or(false)))
        .unwrap_or_default();

    FeedPage {
        entries,
        has_more,
        advance: CursorAdvance::LastMappedId,
    }
}

/// `{"location": {...}}` and `{"tag": {...}}` share this body.
#[derive(Debug, Deserialize)]
struct ExploreSection {
    #[serde(default, deserialize_with = "lenient")]
    media: Option<MediaSection>,
    #[serde(default, deserialize_with = "lenient")]
    top_posts: Option<MediaSection>,
}

#[derive(Debug, Deserialize)]
struct MediaSection {
    #[serde(default, deserialize_with = "lenient_list")]
    nodes: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    page_info: Option<PageInfo>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    #[serde(default, deserialize_with = "lenient")]
    has_next_page: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    end_cursor: Option<String>,
}

fn explore_section(doc: &Value, root: &str) -> Option<ExploreSection> {
    from_object(doc.get(root)?)
}

fn read_explore_page(doc: &Value, root: &str) -> FeedPage {
    let media = explore_section(doc, root).and_then(|s| s.media);
    let (entries, page_info) = match media {
        Some(section) => (section.nodes.unwrap_or_default(), section.page_info),
        None => (Vec::new(), None),
    };
    let (has_more, end_cursor) = page_info
        .map(|p| (p.has_next_page.unwrap_or(false), p.end_cursor.unwrap_or_default()))
        .unwrap_or_default();

    FeedPage {
        entries,
        has_more,
        advance: CursorAdvance::EndCursor(end_cursor),
    }
}

/// Place the first nine `top_posts` nodes into fixed slots.
///
/// Slot `i` holds node `i`. A node that fails to map leaves its slot empty;
/// later nodes do not shift down to fill it.
fn top_posts(doc: &Value, root: &str) -> [Option<Media>; TOP_POSTS_LEN] {
    let nodes = explore_section(doc, root)
        .and_then(|s| s.top_posts)
        .and_then(|t| t.nodes)
        .unwrap_or_default();

    std::array::from_fn(|i| nodes.get(i).and_then(media_from_listing_node))
}

pub fn location_top_posts(doc: &Value) -> [Option<Media>; TOP_POSTS_LEN] {
    top_posts(doc, "location")
}

pub fn tag_top_posts(doc: &Value) -> [Option<Media>; TOP_POSTS_LEN] {
    top_posts(doc, "tag")
}
