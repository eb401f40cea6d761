//! URL templates for the platform's JSON endpoints
//!
//! Templates are relative paths with `{name}` placeholders. They are joined to
//! a base URL at call time so tests can point the client at a fixture server.

/// Default host for every endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.instagram.com";

/// Logical endpoint names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Profile page of an account
    AccountInfo,
    /// Single post page
    MediaInfo,
    /// Recent posts of an account, paged by the last item id
    AccountMedia,
    /// Location page, paged by `end_cursor`
    Location,
    /// Hashtag page, paged by `end_cursor`
    Tag,
    /// Blended user search
    Search,
}

impl Endpoint {
    /// The path template for this endpoint.
    pub const fn template(self) -> &'static str {
        match self {
            Endpoint::AccountInfo => "/{username}/?__a=1",
            Endpoint::MediaInfo => "/p/{code}/?__a=1",
            Endpoint::AccountMedia => "/{username}/media/?max_id={cursor}",
            Endpoint::Location => "/explore/locations/{id}/?__a=1&max_id={cursor}",
            Endpoint::Tag => "/explore/tags/{tag}/?__a=1&max_id={cursor}",
            Endpoint::Search => "/web/search/topsearch/?context=blended&query={query}",
        }
    }

    /// Build a full URL from `base` and the named parameters.
    ///
    /// Values are percent-encoded. Placeholders without a matching parameter
    /// are left as they are.
    pub fn url(self, base: &str, params: &[(&str, &str)]) -> String {
        format!(
            "{}{}",
            base.trim_end_matches('/'),
            fill_template(self.template(), params)
        )
    }
}

/// Substitute `{name}` placeholders in `template`.
pub fn fill_template(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{name}}}"), &urlencoding::encode(value))
        })
}

pub fn account_info_url(base: &str, username: &str) -> String {
    Endpoint::AccountInfo.url(base, &[("username", username)])
}

pub fn media_info_url(base: &str, code: &str) -> String {
    Endpoint::MediaInfo.url(base, &[("code", code)])
}

pub fn account_media_url(base: &str, username: &str, cursor: &str) -> String {
    Endpoint::AccountMedia.url(base, &[("username", username), ("cursor", cursor)])
}

pub fn location_url(base: &str, location_id: &str, cursor: &str) -> String {
    Endpoint::Location.url(base, &[("id", location_id), ("cursor", cursor)])
}

pub fn tag_url(base: &str, tag: &str, cursor: &str) -> String {
    Endpoint::Tag.url(base, &[("tag", tag), ("cursor", cursor)])
}

pub fn search_url(base: &str, query: &str) -> String {
    Endpoint::Search.url(base, &[("query", query)])
}
