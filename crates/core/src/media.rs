use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de::{count_of, from_object, lenient, lenient_id, lenient_list, lenient_u64, Count};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
    Carousel,
}

/// Author of a post. Listing nodes only carry the id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// A single post
///
/// The three source shapes (post page, account listing, search/tag/location
/// listing) each fill a different subset of the optional fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub id: String,
    pub code: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
    /// Unix seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_views: Option<u64>,
}

impl Media {
    /// Public permalink for the post.
    pub fn permalink(&self) -> String {
        format!("https://www.instagram.com/p/{}/", self.code)
    }
}

#[derive(Debug, Deserialize)]
struct RawDimensions {
    #[serde(default, deserialize_with = "lenient_u64")]
    width: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    height: Option<u64>,
}

fn dimensions(raw: Option<RawDimensions>) -> Option<Dimensions> {
    let raw = raw?;
    Some(Dimensions {
        width: u32::try_from(raw.width?).ok()?,
        height: u32::try_from(raw.height?).ok()?,
    })
}

#[derive(Debug, Deserialize)]
struct RawOwner {
    #[serde(default, deserialize_with = "lenient_id")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    username: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    profile_pic_url: Option<String>,
    /// Name used by the account media listing
    #[serde(default, deserialize_with = "lenient")]
    profile_picture: Option<String>,
}

fn owner(raw: Option<RawOwner>) -> Option<Owner> {
    let raw = raw?;
    Some(Owner {
        id: raw.id?,
        username: raw.username,
        full_name: raw.full_name,
        profile_pic_url: raw.profile_pic_url.or(raw.profile_picture),
    })
}

// Post page: {"graphql": {"shortcode_media": {...}}}

#[derive(Debug, Deserialize)]
struct MediaPage {
    #[serde(default, deserialize_with = "lenient")]
    graphql: Option<MediaPageGraphql>,
}

#[derive(Debug, Deserialize)]
struct MediaPageGraphql {
    #[serde(default, deserialize_with = "lenient")]
    shortcode_media: Option<ShortcodeMedia>,
}

#[derive(Debug, Deserialize)]
struct ShortcodeMedia {
    #[serde(default, rename = "__typename", deserialize_with = "lenient")]
    typename: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    shortcode: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    dimensions: Option<RawDimensions>,
    #[serde(default, deserialize_with = "lenient")]
    display_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    video_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    is_video: Option<bool>,
    #[serde(default, deserialize_with = "lenient_u64")]
    video_view_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    edge_media_to_caption: Option<CaptionEdges>,
    #[serde(default, deserialize_with = "lenient")]
    edge_media_to_comment: Option<Count>,
    #[serde(default, deserialize_with = "lenient")]
    edge_media_preview_like: Option<Count>,
    #[serde(default, deserialize_with = "lenient_u64")]
    taken_at_timestamp: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    owner: Option<RawOwner>,
}

#[derive(Debug, Deserialize)]
struct CaptionEdges {
    #[serde(default, deserialize_with = "lenient_list")]
    edges: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct CaptionEdge {
    #[serde(default, deserialize_with = "lenient")]
    node: Option<TextNode>,
}

#[derive(Debug, Deserialize)]
struct TextNode {
    #[serde(default, deserialize_with = "lenient")]
    text: Option<String>,
}

/// Map a post page document to a [`Media`].
///
/// Returns `None` when `id` or `shortcode` is missing.
pub fn media_from_page(doc: &Value) -> Option<Media> {
    let page: MediaPage = from_object(doc)?;
    let media = page.graphql?.shortcode_media?;

    let media_type = match media.typename.as_deref() {
        Some("GraphSidecar") => MediaType::Carousel,
        Some("GraphVideo") => MediaType::Video,
        _ if media.is_video == Some(true) => MediaType::Video,
        _ => MediaType::Image,
    };

    let caption = media
        .edge_media_to_caption
        .and_then(|c| c.edges)
        .and_then(|edges| edges.into_iter().next())
        .and_then(|edge| from_object::<CaptionEdge>(&edge))
        .and_then(|edge| edge.node)
        .and_then(|node| node.text);

    Some(Media {
        id: media.id?,
        code: media.shortcode?,
        media_type,
        caption,
        owner: owner(media.owner),
        dimensions: dimensions(media.dimensions),
        likes: count_of(media.edge_media_preview_like),
        comments: count_of(media.edge_media_to_comment),
        taken_at: media.taken_at_timestamp,
        display_url: media.display_url,
        video_url: media.video_url,
        video_views: media.video_view_count,
    })
}

// Account media listing entry: items[] of /{username}/media/

#[derive(Debug, Deserialize)]
struct AccountListingItem {
    #[serde(default, deserialize_with = "lenient_id")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    code: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    created_time: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    caption: Option<TextNode>,
    #[serde(default, deserialize_with = "lenient")]
    likes: Option<Count>,
    #[serde(default, deserialize_with = "lenient")]
    comments: Option<Count>,
    #[serde(default, deserialize_with = "lenient")]
    images: Option<Resolutions>,
    #[serde(default, deserialize_with = "lenient")]
    videos: Option<Resolutions>,
    #[serde(default, deserialize_with = "lenient_u64")]
    video_views: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    user: Option<RawOwner>,
}

#[derive(Debug, Deserialize)]
struct Resolutions {
    #[serde(default, deserialize_with = "lenient")]
    standard_resolution: Option<Resource>,
}

#[derive(Debug, Deserialize)]
struct Resource {
    #[serde(default, deserialize_with = "lenient")]
    url: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    width: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    height: Option<u64>,
}

/// Map one `items[]` entry of the account media listing to a [`Media`].
///
/// Returns `None` when `id` or `code` is missing.
pub fn media_from_account_listing(item: &Value) -> Option<Media> {
    let item: AccountListingItem = from_object(item)?;

    let media_type = match item.kind.as_deref() {
        Some("video") => MediaType::Video,
        Some("carousel") => MediaType::Carousel,
        _ => MediaType::Image,
    };

    let image = item.images.and_then(|r| r.standard_resolution);
    let video = item.videos.and_then(|r| r.standard_resolution);
    let dims = image.as_ref().and_then(|res| {
        dimensions(Some(RawDimensions {
            width: res.width,
            height: res.height,
        }))
    });

    Some(Media {
        id: item.id?,
        code: item.code?,
        media_type,
        caption: item.caption.and_then(|c| c.text),
        owner: owner(item.user),
        dimensions: dims,
        likes: count_of(item.likes),
        comments: count_of(item.comments),
        taken_at: item.created_time,
        display_url: image.and_then(|res| res.url),
        video_url: video.and_then(|res| res.url),
        video_views: item.video_views,
    })
}

// Search/tag/location listing node: media.nodes[] and top_posts.nodes[]

#[derive(Debug, Deserialize)]
struct ListingNode {
    #[serde(default, rename = "__typename", deserialize_with = "lenient")]
    typename: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    code: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    date: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    dimensions: Option<RawDimensions>,
    #[serde(default, deserialize_with = "lenient")]
    display_src: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    caption: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    likes: Option<Count>,
    #[serde(default, deserialize_with = "lenient")]
    comments: Option<Count>,
    #[serde(default, deserialize_with = "lenient")]
    is_video: Option<bool>,
    #[serde(default, deserialize_with = "lenient_u64")]
    video_views: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    owner: Option<RawOwner>,
}

/// Map one listing node (search, tag or location feed) to a [`Media`].
///
/// Returns `None` when `id` or `code` is missing.
pub fn media_from_listing_node(node: &Value) -> Option<Media> {
    let node: ListingNode = from_object(node)?;

    let media_type = match (node.typename.as_deref(), node.is_video) {
        (Some("GraphSidecar"), _) => MediaType::Carousel,
        (_, Some(true)) => MediaType::Video,
        _ => MediaType::Image,
    };

    Some(Media {
        id: node.id?,
        code: node.code?,
        media_type,
        caption: node.caption,
        owner: owner(node.owner),
        dimensions: dimensions(node.dimensions),
        likes: count_of(node.likes),
        comments: count_of(node.comments),
        taken_at: node.date,
        display_url: node.display_src,
        video_url: None,
        video_views: node.video_views,
    })
}

/// Extract the short code from a post URL.
///
/// Accepts `/p/<code>`, `/tv/<code>`, `/reel/<code>` and `/reels/<code>`
/// paths, with or without scheme, host, query or trailing slash.
pub fn code_from_url(url: &str) -> Option<String> {
    let re = Regex::new(r"/(?:p|tv|reels?)/([A-Za-z0-9_-]+)").ok()?;
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Whether `input` looks like a bare short code rather than a URL.
pub fn is_media_code(input: &str) -> bool {
    !input.is_empty()
        && input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Convert Unix timestamp to formatted string
pub fn format_timestamp(timestamp: Option<u64>) -> Option<String> {
    timestamp.and_then(|ts| {
        let dt = DateTime::<Utc>::from_timestamp(i64::try_from(ts).ok()?, 0)?;
        Some(dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn media_page_fixture() -> Value {
        json!({
            "graphql": {
                "shortcode_media": {
                    "__typename": "GraphVideo",
                    "id": "1477090519454320804",
                    "shortcode": "BR_z2Yajyik",
                    "dimensions": {"height": 640, "width": 640},
                    "display_url": "https://scontent.cdninstagram.com/e35/17127624_n.jpg",
                    "video_url": "https://scontent.cdninstagram.com/t50/17133000_n.mp4",
                    "is_video": true,
                    "video_view_count": 15320,
                    "edge_media_to_caption": {
                        "edges": [{"node": {"text": "Surfing at dawn #waves"}}]
                    },
                    "edge_media_to_comment": {"count": 87},
                    "edge_media_preview_like": {"count": 2045},
                    "taken_at_timestamp": 1_489_000_000u64,
                    "owner": {
                        "id": "528817151",
                        "username": "nasa",
                        "full_name": "NASA",
                        "profile_pic_url": "https://scontent.cdninstagram.com/nasa.jpg"
                    }
                }
            }
        })
    }

    #[test]
    fn test_media_from_page_full() {
        let media = media_from_page(&media_page_fixture()).unwrap();

        assert_eq!(media.id, "1477090519454320804");
        assert_eq!(media.code, "BR_z2Yajyik");
        assert_eq!(media.media_type, MediaType::Video);
        assert_eq!(media.caption.as_deref(), Some("Surfing at dawn #waves"));
        assert_eq!(
            media.dimensions,
            Some(Dimensions {
                width: 640,
                height: 640
            })
        );
        assert_eq!(media.likes, Some(2045));
        assert_eq!(media.comments, Some(87));
        assert_eq!(media.taken_at, Some(1_489_000_000));
        assert_eq!(
            media.display_url.as_deref(),
            Some("https://scontent.cdninstagram.com/e35/17127624_n.jpg")
        );
        assert_eq!(
            media.video_url.as_deref(),
            Some("https://scontent.cdninstagram.com/t50/17133000_n.mp4")
        );
        assert_eq!(media.video_views, Some(15320));

        let owner = media.owner.unwrap();
        assert_eq!(owner.id, "528817151");
        assert_eq!(owner.username.as_deref(), Some("nasa"));
        assert_eq!(owner.full_name.as_deref(), Some("NASA"));
    }

    #[test]
    fn test_media_from_page_sidecar_is_carousel() {
        let mut doc = media_page_fixture();
        doc["graphql"]["shortcode_media"]["__typename"] = json!("GraphSidecar");
        doc["graphql"]["shortcode_media"]["is_video"] = json!(false);

        let media = media_from_page(&doc).unwrap();
        assert_eq!(media.media_type, MediaType::Carousel);
    }

    #[test]
    fn test_media_from_page_without_caption_edges() {
        let mut doc = media_page_fixture();
        doc["graphql"]["shortcode_media"]["edge_media_to_caption"] = json!({"edges": []});

        let media = media_from_page(&doc).unwrap();
        assert!(media.caption.is_none());
    }

    #[test]
    fn test_media_from_page_missing_shortcode() {
        let mut doc = media_page_fixture();
        doc["graphql"]["shortcode_media"]
            .as_object_mut()
            .unwrap()
            .remove("shortcode");

        assert!(media_from_page(&doc).is_none());
    }

    #[test]
    fn test_media_from_page_array_caption_edges_are_ignored() {
        let mut doc = media_page_fixture();
        doc["graphql"]["shortcode_media"]["edge_media_to_caption"] =
            json!({"edges": [[{"text": "positional"}]]});

        let media = media_from_page(&doc).unwrap();
        assert!(media.caption.is_none());
    }

    #[test]
    fn test_media_from_page_empty_document() {
        assert!(media_from_page(&json!({})).is_none());
        assert!(media_from_page(&json!({"graphql": null})).is_none());
    }

    fn account_listing_fixture() -> Value {
        json!({
            "id": "1482084328041000000_528817151",
            "code": "BSRqwp0hVUN",
            "type": "image",
            "created_time": "1490916000",
            "caption": {"text": "Earth from orbit", "created_time": "1490916000"},
            "likes": {"count": 512000},
            "comments": {"count": 3100},
            "images": {
                "thumbnail": {"url": "https://scontent.cdninstagram.com/s150/orbit.jpg", "width": 150, "height": 150},
                "standard_resolution": {"url": "https://scontent.cdninstagram.com/s640/orbit.jpg", "width": 640, "height": 800}
            },
            "user": {
                "id": "528817151",
                "username": "nasa",
                "full_name": "NASA",
                "profile_picture": "https://scontent.cdninstagram.com/nasa.jpg"
            }
        })
    }

    #[test]
    fn test_media_from_account_listing_full() {
        let media = media_from_account_listing(&account_listing_fixture()).unwrap();

        assert_eq!(media.id, "1482084328041000000_528817151");
        assert_eq!(media.code, "BSRqwp0hVUN");
        assert_eq!(media.media_type, MediaType::Image);
        assert_eq!(media.caption.as_deref(), Some("Earth from orbit"));
        assert_eq!(media.taken_at, Some(1_490_916_000));
        assert_eq!(media.likes, Some(512_000));
        assert_eq!(media.comments, Some(3100));
        assert_eq!(
            media.dimensions,
            Some(Dimensions {
                width: 640,
                height: 800
            })
        );
        assert_eq!(
            media.display_url.as_deref(),
            Some("https://scontent.cdninstagram.com/s640/orbit.jpg")
        );
        assert!(media.video_url.is_none());

        let owner = media.owner.unwrap();
        assert_eq!(owner.username.as_deref(), Some("nasa"));
        assert_eq!(
            owner.profile_pic_url.as_deref(),
            Some("https://scontent.cdninstagram.com/nasa.jpg")
        );
    }

    #[test]
    fn test_media_from_account_listing_video_and_null_caption() {
        let mut item = account_listing_fixture();
        item["type"] = json!("video");
        item["caption"] = Value::Null;
        item["videos"] = json!({
            "standard_resolution": {"url": "https://scontent.cdninstagram.com/launch.mp4", "width": 640, "height": 640}
        });
        item["video_views"] = json!(90210);

        let media = media_from_account_listing(&item).unwrap();
        assert_eq!(media.media_type, MediaType::Video);
        assert!(media.caption.is_none());
        assert_eq!(
            media.video_url.as_deref(),
            Some("https://scontent.cdninstagram.com/launch.mp4")
        );
        assert_eq!(media.video_views, Some(90210));
    }

    #[test]
    fn test_media_from_account_listing_missing_code() {
        let mut item = account_listing_fixture();
        item.as_object_mut().unwrap().remove("code");

        assert!(media_from_account_listing(&item).is_none());
    }

    #[test]
    fn test_media_from_account_listing_array_is_rejected() {
        let item = json!(["1477090519454320804_528817151", "BR_z2Yajyik", "image"]);
        assert!(media_from_account_listing(&item).is_none());
    }

    fn listing_node_fixture() -> Value {
        json!({
            "id": "1481937421651712000",
            "code": "BSRJHkUgWW1",
            "date": 1_490_898_000u64,
            "dimensions": {"width": 1080, "height": 1350},
            "display_src": "https://scontent.cdninstagram.com/e35/node.jpg",
            "thumbnail_src": "https://scontent.cdninstagram.com/s640/node.jpg",
            "caption": "Golden hour at the pier",
            "likes": {"count": 64},
            "comments": {"count": 2},
            "is_video": false,
            "owner": {"id": "1990311"}
        })
    }

    #[test]
    fn test_media_from_listing_node_full() {
        let media = media_from_listing_node(&listing_node_fixture()).unwrap();

        assert_eq!(media.id, "1481937421651712000");
        assert_eq!(media.code, "BSRJHkUgWW1");
        assert_eq!(media.media_type, MediaType::Image);
        assert_eq!(media.caption.as_deref(), Some("Golden hour at the pier"));
        assert_eq!(media.taken_at, Some(1_490_898_000));
        assert_eq!(
            media.dimensions,
            Some(Dimensions {
                width: 1080,
                height: 1350
            })
        );
        assert_eq!(media.likes, Some(64));
        assert_eq!(media.comments, Some(2));
        assert_eq!(
            media.display_url.as_deref(),
            Some("https://scontent.cdninstagram.com/e35/node.jpg")
        );
        assert_eq!(
            media.owner,
            Some(Owner {
                id: "1990311".to_string(),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_media_from_listing_node_video() {
        let mut node = listing_node_fixture();
        node["is_video"] = json!(true);
        node["video_views"] = json!(400);

        let media = media_from_listing_node(&node).unwrap();
        assert_eq!(media.media_type, MediaType::Video);
        assert_eq!(media.video_views, Some(400));
    }

    #[test]
    fn test_media_from_listing_node_missing_id() {
        let mut node = listing_node_fixture();
        node.as_object_mut().unwrap().remove("id");

        assert!(media_from_listing_node(&node).is_none());
    }

    #[test]
    fn test_media_from_listing_node_not_an_object() {
        assert!(media_from_listing_node(&json!("BSRJHkUgWW1")).is_none());
        assert!(media_from_listing_node(&json!(null)).is_none());
    }

    #[test]
    fn test_media_from_listing_node_array_is_rejected() {
        assert!(media_from_listing_node(&json!([null, "1", "BSRJHkUgWW1"])).is_none());
    }

    #[test]
    fn test_media_from_listing_node_array_owner_is_dropped() {
        let mut node = listing_node_fixture();
        node["owner"] = json!(["1990311"]);

        let media = media_from_listing_node(&node).unwrap();
        assert!(media.owner.is_none());
    }

    #[test]
    fn test_permalink() {
        let media = Media {
            code: "BSRJHkUgWW1".to_string(),
            ..Default::default()
        };
        assert_eq!(media.permalink(), "https://www.instagram.com/p/BSRJHkUgWW1/");
    }

    #[test]
    fn test_code_from_url() {
        assert_eq!(
            code_from_url("https://www.instagram.com/p/BSRJHkUgWW1/"),
            Some("BSRJHkUgWW1".to_string())
        );
        assert_eq!(
            code_from_url("https://instagram.com/p/BSRJHkUgWW1"),
            Some("BSRJHkUgWW1".to_string())
        );
        assert_eq!(
            code_from_url("https://www.instagram.com/reel/C5x-_aB1/?igsh=abc"),
            Some("C5x-_aB1".to_string())
        );
        assert_eq!(
            code_from_url("https://www.instagram.com/tv/B1a2/"),
            Some("B1a2".to_string())
        );
    }

    #[test]
    fn test_code_from_url_without_post_path() {
        assert_eq!(code_from_url("https://www.instagram.com/natgeo/"), None);
        assert_eq!(code_from_url("not a url"), None);
    }

    #[test]
    fn test_is_media_code() {
        assert!(is_media_code("BSRJHkUgWW1"));
        assert!(is_media_code("C5x-_aB1"));
        assert!(!is_media_code("https://www.instagram.com/p/BSRJHkUgWW1/"));
        assert!(!is_media_code(""));
    }

    #[test]
    fn test_format_timestamp_valid() {
        let timestamp = Some(1609459200); // 2021-01-01 00:00:00 UTC
        let formatted = format_timestamp(timestamp);
        assert_eq!(formatted, Some("2021-01-01 00:00:00 UTC".to_string()));
    }

    #[test]
    fn test_format_timestamp_none() {
        assert_eq!(format_timestamp(None), None);
    }
}
