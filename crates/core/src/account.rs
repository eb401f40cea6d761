use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de::{count_of, from_object, lenient, lenient_id, lenient_u64, Count};

/// An account profile
///
/// Profile pages fill every field. Search results carry only a subset, so the
/// optional fields stay `None` for accounts found through search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followed_by: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follows: Option<u64>,
    pub is_private: bool,
    pub is_verified: bool,
}

/// `{"user": {...}}` as returned by the profile page endpoint
#[derive(Debug, Deserialize)]
struct ProfilePage {
    #[serde(default, deserialize_with = "lenient")]
    user: Option<ProfileUser>,
}

#[derive(Debug, Deserialize)]
struct ProfileUser {
    #[serde(default, deserialize_with = "lenient_id")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    username: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    biography: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    external_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    profile_pic_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    profile_pic_url_hd: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    is_private: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    is_verified: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    followed_by: Option<Count>,
    #[serde(default, deserialize_with = "lenient")]
    follows: Option<Count>,
    #[serde(default, deserialize_with = "lenient")]
    media: Option<Count>,
}

/// One entry of `users[]` in the search response
#[derive(Debug, Deserialize)]
struct SearchEntry {
    #[serde(default, deserialize_with = "lenient")]
    user: Option<SearchUser>,
}

#[derive(Debug, Deserialize)]
struct SearchUser {
    #[serde(default, deserialize_with = "lenient_id")]
    pk: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    username: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    profile_pic_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    is_private: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    is_verified: Option<bool>,
    #[serde(default, deserialize_with = "lenient_u64")]
    follower_count: Option<u64>,
}

/// Map a profile page document to an [`Account`].
///
/// Returns `None` when `user.id` or `user.username` is missing.
pub fn account_from_profile_page(doc: &Value) -> Option<Account> {
    let page: ProfilePage = from_object(doc)?;
    let user = page.user?;

    Some(Account {
        id: user.id?,
        username: user.username?,
        full_name: user.full_name,
        biography: user.biography,
        external_url: user.external_url,
        profile_pic_url: user.profile_pic_url_hd.or(user.profile_pic_url),
        media_count: count_of(user.media),
        followed_by: count_of(user.followed_by),
        follows: count_of(user.follows),
        is_private: user.is_private.unwrap_or(false),
        is_verified: user.is_verified.unwrap_or(false),
    })
}

/// Map one `users[]` entry of a search response to an [`Account`].
///
/// Returns `None` when `user.pk` or `user.username` is missing.
pub fn account_from_search_entry(entry: &Value) -> Option<Account> {
    let entry: SearchEntry = from_object(entry)?;
    let user = entry.user?;

    Some(Account {
        id: user.pk?,
        username: user.username?,
        full_name: user.full_name,
        profile_pic_url: user.profile_pic_url,
        followed_by: user.follower_count,
        is_private: user.is_private.unwrap_or(false),
        is_verified: user.is_verified.unwrap_or(false),
        ..Default::default()
    })
}

/// Map every entry of a search response, skipping the ones that don't map.
pub fn accounts_from_search(doc: &Value) -> Vec<Account> {
    doc.get("users")
        .and_then(Value::as_array)
        .map(|users| users.iter().filter_map(account_from_search_entry).collect())
        .unwrap_or_default()
}
