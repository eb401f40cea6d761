use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de::{from_object, lenient, lenient_f64, lenient_id, lenient_list, lenient_u64};
use crate::media::{media_from_listing_node, Media};

/// A location page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_public_page: Option<bool>,
    /// Total posts tagged with this location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_count: Option<u64>,
    /// First page of recent posts
    pub media: Vec<Media>,
    pub top_posts: Vec<Media>,
}

#[derive(Debug, Deserialize)]
struct LocationPage {
    #[serde(default, deserialize_with = "lenient")]
    location: Option<RawLocation>,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    #[serde(default, deserialize_with = "lenient_id")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    slug: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    lng: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    has_public_page: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    media: Option<NodeList>,
    #[serde(default, deserialize_with = "lenient")]
    top_posts: Option<NodeList>,
}

#[derive(Debug, Deserialize)]
struct NodeList {
    #[serde(default, deserialize_with = "lenient_u64")]
    count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_list")]
    nodes: Option<Vec<Value>>,
}

fn mapped_nodes(list: Option<&NodeList>) -> Vec<Media> {
    list.and_then(|l| l.nodes.as_ref())
        .map(|nodes| nodes.iter().filter_map(media_from_listing_node).collect())
        .unwrap_or_default()
}

/// Map a location page document to a [`Location`].
///
/// Returns `None` when `location.id` or `location.name` is missing. Nodes in
/// the media and top post lists that fail to map are dropped.
pub fn location_from_page(doc: &Value) -> Option<Location> {
    let page: LocationPage = from_object(doc)?;
    let location = page.location?;

    let media = mapped_nodes(location.media.as_ref());
    let top_posts = mapped_nodes(location.top_posts.as_ref());

    Some(Location {
        id: location.id?,
        name: location.name?,
        slug: location.slug,
        lat: location.lat,
        lng: location.lng,
        has_public_page: location.has_public_page,
        media_count: location.media.and_then(|m| m.count),
        media,
        top_posts,
    })
}
