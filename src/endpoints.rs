//! Endpoint table.
//!
//! Every remote operation is one [`Endpoint`] entry: its path relative to the
//! API base URL, the HTTP verb, the response format, and which part of the
//! envelope's `data` the typed method returns. The typed methods in
//! [`crate::api`] only assemble parameters and dispatch through
//! [`BitlyClient::invoke`](crate::BitlyClient::invoke).

use serde_json::Value;

use crate::error::{BitlyError, Result};

/// HTTP verb used for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Parameters go in the query string.
    Get,
    /// Parameters go in a form-encoded body.
    Post,
}

/// Shape of the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `{status_code, status_txt, data}` envelope.
    Json,
    /// Raw body returned verbatim.
    Raw,
}

/// Projection applied to the envelope's `data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unwrap {
    /// Return `data` as is.
    Whole,
    /// Return `data[key]`.
    Key(&'static str),
    /// Return `data[key][0]`.
    First(&'static str),
}

/// A single remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub method: Method,
    pub format: Format,
    pub unwrap: Unwrap,
}

impl Endpoint {
    /// A GET endpoint returning the JSON envelope's whole `data`.
    pub const fn get(path: &'static str) -> Self {
        Self {
            path,
            method: Method::Get,
            format: Format::Json,
            unwrap: Unwrap::Whole,
        }
    }

    pub const fn post(mut self) -> Self {
        self.method = Method::Post;
        self
    }

    pub const fn raw(mut self) -> Self {
        self.format = Format::Raw;
        self
    }

    pub const fn key(mut self, key: &'static str) -> Self {
        self.unwrap = Unwrap::Key(key);
        self
    }

    pub const fn first(mut self, key: &'static str) -> Self {
        self.unwrap = Unwrap::First(key);
        self
    }

    pub fn is_post(&self) -> bool {
        self.method == Method::Post
    }

    pub fn expects_json(&self) -> bool {
        self.format == Format::Json
    }

    /// Apply this endpoint's projection to a decoded `data` value.
    ///
    /// # Errors
    ///
    /// Returns [`BitlyError::MalformedResponse`] if the expected key or list
    /// element is missing.
    pub fn project(&self, mut data: Value) -> Result<Value> {
        match self.unwrap {
            Unwrap::Whole => Ok(data),
            Unwrap::Key(key) => match data.get_mut(key) {
                Some(v) => Ok(v.take()),
                None => Err(self.missing(key)),
            },
            Unwrap::First(key) => match data.get_mut(key).and_then(|v| v.get_mut(0)) {
                Some(v) => Ok(v.take()),
                None => Err(self.missing(&format!("{key}[0]"))),
            },
        }
    }

    fn missing(&self, what: &str) -> BitlyError {
        BitlyError::MalformedResponse(format!("{} response has no '{what}' field", self.path))
    }
}

// Authentication
pub const OAUTH_ACCESS_TOKEN: Endpoint = Endpoint::get("oauth/access_token").post().raw();

// Links
pub const SHORTEN: Endpoint = Endpoint::get("v3/shorten");
pub const EXPAND: Endpoint = Endpoint::get("v3/expand").first("expand");
pub const INFO: Endpoint = Endpoint::get("v3/info").first("info");
pub const LINK_LOOKUP: Endpoint = Endpoint::get("v3/link/lookup").first("link_lookup");
pub const LINK_INFO: Endpoint = Endpoint::get("v3/link/info");
pub const LINK_CONTENT: Endpoint = Endpoint::get("v3/link/content").key("content");
pub const LINK_CATEGORY: Endpoint = Endpoint::get("v3/link/category").key("categories");
pub const LINK_SOCIAL: Endpoint = Endpoint::get("v3/link/social").key("social_scores");
pub const LINK_LOCATION: Endpoint = Endpoint::get("v3/link/location").key("locations");
pub const LINK_LANGUAGE: Endpoint = Endpoint::get("v3/link/language").key("languages");
pub const LINK_ENCODERS: Endpoint = Endpoint::get("v3/link/encoders");
pub const LINK_ENCODERS_COUNT: Endpoint = Endpoint::get("v3/link/encoders_count");

// Legacy short-link metrics
pub const CLICKS: Endpoint = Endpoint::get("v3/clicks").first("clicks");
pub const CLICKS_BY_DAY: Endpoint = Endpoint::get("v3/clicks_by_day").first("clicks_by_day");
pub const CLICKS_BY_MINUTE: Endpoint =
    Endpoint::get("v3/clicks_by_minute").first("clicks_by_minute");
pub const REFERRERS: Endpoint = Endpoint::get("v3/referrers").first("referrers");
pub const REFERRING_DOMAINS: Endpoint =
    Endpoint::get("v3/referring_domains").key("referring_domains");
pub const COUNTRIES: Endpoint = Endpoint::get("v3/countries").first("countries");

// Link metrics
pub const LINK_CLICKS: Endpoint = Endpoint::get("v3/link/clicks").key("link_clicks");
pub const LINK_COUNTRIES: Endpoint = Endpoint::get("v3/link/countries").key("countries");
pub const LINK_REFERRERS: Endpoint = Endpoint::get("v3/link/referrers").key("referrers");
pub const LINK_REFERRERS_BY_DOMAIN: Endpoint =
    Endpoint::get("v3/link/referrers_by_domain").key("referrers");
pub const LINK_REFERRING_DOMAINS: Endpoint =
    Endpoint::get("v3/link/referring_domains").key("referring_domains");
pub const LINK_SHARES: Endpoint = Endpoint::get("v3/link/shares");

// User
pub const USER_INFO: Endpoint = Endpoint::get("v3/user/info");
pub const USER_LINK_HISTORY: Endpoint = Endpoint::get("v3/user/link_history").key("link_history");
pub const USER_NETWORK_HISTORY: Endpoint = Endpoint::get("v3/user/network_history");
pub const USER_LINK_EDIT: Endpoint = Endpoint::get("v3/user/link_edit").key("link_edit");
pub const USER_LINK_LOOKUP: Endpoint = Endpoint::get("v3/user/link_lookup").key("link_lookup");
pub const USER_LINK_SAVE: Endpoint = Endpoint::get("v3/user/link_save").key("link_save");
pub const USER_BUNDLE_HISTORY: Endpoint = Endpoint::get("v3/user/bundle_history").key("bundles");

// User metrics
pub const USER_CLICKS: Endpoint = Endpoint::get("v3/user/clicks");
pub const USER_COUNTRIES: Endpoint = Endpoint::get("v3/user/countries").key("countries");
pub const USER_POPULAR_LINKS: Endpoint =
    Endpoint::get("v3/user/popular_links").key("popular_links");
pub const USER_REFERRERS: Endpoint = Endpoint::get("v3/user/referrers").key("referrers");
pub const USER_REFERRING_DOMAINS: Endpoint =
    Endpoint::get("v3/user/referring_domains").key("referring_domains");
pub const USER_SHARE_COUNTS: Endpoint = Endpoint::get("v3/user/share_counts").key("share_counts");
pub const USER_SHARE_COUNTS_BY_SHARE_TYPE: Endpoint =
    Endpoint::get("v3/user/share_counts_by_share_type").key("share_counts");
pub const USER_SHORTEN_COUNTS: Endpoint =
    Endpoint::get("v3/user/shorten_counts").key("user_shorten_counts");

// Domains
pub const PRO_DOMAIN: Endpoint = Endpoint::get("v3/bitly_pro_domain").key("bitly_pro_domain");
pub const USER_TRACKING_DOMAIN_LIST: Endpoint =
    Endpoint::get("v3/user/tracking_domain_list").key("tracking_domains");
pub const USER_TRACKING_DOMAIN_CLICKS: Endpoint =
    Endpoint::get("v3/user/tracking_domain_clicks").key("tracking_domain_clicks");
pub const USER_TRACKING_DOMAIN_SHORTEN_COUNTS: Endpoint =
    Endpoint::get("v3/user/tracking_domain_shorten_counts").key("tracking_domain_shorten_counts");

// Bundles
pub const BUNDLE_ARCHIVE: Endpoint = Endpoint::get("v3/bundle/archive").raw();
pub const BUNDLE_BUNDLES_BY_USER: Endpoint =
    Endpoint::get("v3/bundle/bundles_by_user").key("bundles");
pub const BUNDLE_CLONE: Endpoint = Endpoint::get("v3/bundle/clone").key("bundle");
pub const BUNDLE_COLLABORATOR_ADD: Endpoint =
    Endpoint::get("v3/bundle/collaborator_add").key("bundle");
pub const BUNDLE_COLLABORATOR_REMOVE: Endpoint =
    Endpoint::get("v3/bundle/collaborator_remove").key("bundle");
pub const BUNDLE_PENDING_COLLABORATOR_REMOVE: Endpoint =
    Endpoint::get("v3/bundle/pending_collaborator_remove").key("bundle");
pub const BUNDLE_CONTENTS: Endpoint = Endpoint::get("v3/bundle/contents").key("bundle");
pub const BUNDLE_CREATE: Endpoint = Endpoint::get("v3/bundle/create").key("bundle");
pub const BUNDLE_EDIT: Endpoint = Endpoint::get("v3/bundle/edit").key("bundle");
pub const BUNDLE_LINK_ADD: Endpoint = Endpoint::get("v3/bundle/link_add").key("bundle");
pub const BUNDLE_LINK_COMMENT_ADD: Endpoint =
    Endpoint::get("v3/bundle/link_comment_add").key("bundle");
pub const BUNDLE_LINK_COMMENT_EDIT: Endpoint =
    Endpoint::get("v3/bundle/link_comment_edit").key("bundle");
pub const BUNDLE_LINK_COMMENT_REMOVE: Endpoint =
    Endpoint::get("v3/bundle/link_comment_remove").key("bundle");
pub const BUNDLE_LINK_EDIT: Endpoint = Endpoint::get("v3/bundle/link_edit").key("bundle");
pub const BUNDLE_LINK_REMOVE: Endpoint = Endpoint::get("v3/bundle/link_remove").key("bundle");
pub const BUNDLE_LINK_REORDER: Endpoint = Endpoint::get("v3/bundle/link_reorder").key("bundle");
pub const BUNDLE_VIEW_COUNT: Endpoint = Endpoint::get("v3/bundle/view_count").key("view_count");

// Search and realtime
pub const HIGHVALUE: Endpoint = Endpoint::get("v3/highvalue");
pub const SEARCH: Endpoint = Endpoint::get("v3/search").key("results");
pub const REALTIME_BURSTING_PHRASES: Endpoint =
    Endpoint::get("v3/realtime/bursting_phrases").key("phrases");
pub const REALTIME_HOT_PHRASES: Endpoint = Endpoint::get("v3/realtime/hot_phrases").key("phrases");
pub const REALTIME_CLICKRATE: Endpoint = Endpoint::get("v3/realtime/clickrate").key("rate");

/// Every endpoint the client knows about.
pub const ALL: &[Endpoint] = &[
    OAUTH_ACCESS_TOKEN,
    SHORTEN,
    EXPAND,
    INFO,
    LINK_LOOKUP,
    LINK_INFO,
    LINK_CONTENT,
    LINK_CATEGORY,
    LINK_SOCIAL,
    LINK_LOCATION,
    LINK_LANGUAGE,
    LINK_ENCODERS,
    LINK_ENCODERS_COUNT,
    CLICKS,
    CLICKS_BY_DAY,
    CLICKS_BY_MINUTE,
    REFERRERS,
    REFERRING_DOMAINS,
    COUNTRIES,
    LINK_CLICKS,
    LINK_COUNTRIES,
    LINK_REFERRERS,
    LINK_REFERRERS_BY_DOMAIN,
    LINK_REFERRING_DOMAINS,
    LINK_SHARES,
    USER_INFO,
    USER_LINK_HISTORY,
    USER_NETWORK_HISTORY,
    USER_LINK_EDIT,
    USER_LINK_LOOKUP,
    USER_LINK_SAVE,
    USER_BUNDLE_HISTORY,
    USER_CLICKS,
    USER_COUNTRIES,
    USER_POPULAR_LINKS,
    USER_REFERRERS,
    USER_REFERRING_DOMAINS,
    USER_SHARE_COUNTS,
    USER_SHARE_COUNTS_BY_SHARE_TYPE,
    USER_SHORTEN_COUNTS,
    PRO_DOMAIN,
    USER_TRACKING_DOMAIN_LIST,
    USER_TRACKING_DOMAIN_CLICKS,
    USER_TRACKING_DOMAIN_SHORTEN_COUNTS,
    BUNDLE_ARCHIVE,
    BUNDLE_BUNDLES_BY_USER,
    BUNDLE_CLONE,
    BUNDLE_COLLABORATOR_ADD,
    BUNDLE_COLLABORATOR_REMOVE,
    BUNDLE_PENDING_COLLABORATOR_REMOVE,
    BUNDLE_CONTENTS,
    BUNDLE_CREATE,
    BUNDLE_EDIT,
    BUNDLE_LINK_ADD,
    BUNDLE_LINK_COMMENT_ADD,
    BUNDLE_LINK_COMMENT_EDIT,
    BUNDLE_LINK_COMMENT_REMOVE,
    BUNDLE_LINK_EDIT,
    BUNDLE_LINK_REMOVE,
    BUNDLE_LINK_REORDER,
    BUNDLE_VIEW_COUNT,
    HIGHVALUE,
    SEARCH,
    REALTIME_BURSTING_PHRASES,
    REALTIME_HOT_PHRASES,
    REALTIME_CLICKRATE,
];

/// Look up an endpoint by path, e.g. `"v3/shorten"`.
pub fn by_path(path: &str) -> Option<&'static Endpoint> {
    let path = path.trim_start_matches('/');
    ALL.iter().find(|e| e.path == path)
}
