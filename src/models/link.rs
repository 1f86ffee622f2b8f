//! Link models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::query::Params;

/// Result of shortening a long URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenedLink {
    /// The short link (e.g., "http://bit.ly/ze6poY").
    pub url: String,

    /// The user-specific hash.
    pub hash: String,

    /// The hash shared by every short link to the same long URL.
    #[serde(default)]
    pub global_hash: String,

    /// The URL that was shortened.
    pub long_url: String,

    /// Whether this call created the link (the wire sends `0`/`1`).
    #[serde(deserialize_with = "deserialize_flag")]
    pub new_hash: bool,
}

/// Accept `true`/`false`, `0`/`1`, or their string forms.
pub(crate) fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Int(n) => Ok(n != 0),
        Flag::Text(s) => match s.as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!("invalid flag '{other}'"))),
        },
    }
}

/// Changes to a saved link for `user_link_edit`.
///
/// Only the fields that are `Some` are sent, and their names form the
/// `edit` parameter the service requires.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkEdit {
    pub title: Option<String>,
    pub note: Option<String>,
    pub private: Option<bool>,
    pub user_ts: Option<DateTime<Utc>>,
    pub archived: Option<bool>,
}

impl LinkEdit {
    /// Names of the supplied fields, in wire order.
    pub fn edited_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push("title");
        }
        if self.note.is_some() {
            fields.push("note");
        }
        if self.private.is_some() {
            fields.push("private");
        }
        if self.user_ts.is_some() {
            fields.push("user_ts");
        }
        if self.archived.is_some() {
            fields.push("archived");
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.edited_fields().is_empty()
    }

    pub(crate) fn apply(&self, params: &mut Params) {
        params.insert_opt("title", self.title.as_deref());
        params.insert_opt("note", self.note.as_deref());
        params.insert_opt("private", self.private);
        params.insert_opt("user_ts", self.user_ts.map(|ts| ts.timestamp()));
        params.insert_opt("archived", self.archived);
        params.insert("edit", self.edited_fields().join(","));
    }
}

/// Metadata for a link saved with `user_link_save`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkSave {
    pub title: Option<String>,
    pub note: Option<String>,
    pub private: Option<bool>,
    pub user_ts: Option<DateTime<Utc>>,
}

impl LinkSave {
    pub(crate) fn apply(&self, params: &mut Params) {
        params.insert_opt("title", self.title.as_deref());
        params.insert_opt("note", self.note.as_deref());
        params.insert_opt("private", self.private);
        params.insert_opt("user_ts", self.user_ts.map(|ts| ts.timestamp()));
    }
}

/// Filters for `user_link_history`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryQuery {
    /// Return only this bitlink.
    pub link: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub created_before: Option<DateTime<Utc>>,
    pub created_after: Option<DateTime<Utc>>,
    pub modified_after: Option<DateTime<Utc>>,
    pub expand_client_id: Option<bool>,
    /// `"on"`, `"off"`, or `"both"`.
    pub archived: Option<String>,
    /// `"on"`, `"off"`, or `"both"`.
    pub private: Option<String>,
    /// Sub-account login to query instead of the authenticated user.
    pub user: Option<String>,
}

impl HistoryQuery {
    pub(crate) fn apply(&self, params: &mut Params) {
        params.insert_opt("link", self.link.as_deref());
        params.insert_opt("limit", self.limit);
        params.insert_opt("offset", self.offset);
        params.insert_opt("created_before", self.created_before.map(|ts| ts.timestamp()));
        params.insert_opt("created_after", self.created_after.map(|ts| ts.timestamp()));
        params.insert_opt("modified_after", self.modified_after.map(|ts| ts.timestamp()));
        params.insert_opt("expand_client_id", self.expand_client_id);
        params.insert_opt("archived", self.archived.as_deref());
        params.insert_opt("private", self.private.as_deref());
        params.insert_opt("user", self.user.as_deref());
    }
}
