//! Mock server state management.
//!
//! Provides the in-memory data store for the mock bit.ly API server.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

/// A short link known to the mock server.
#[derive(Debug, Clone, Serialize)]
pub struct MockLink {
    pub hash: String,
    pub long_url: String,
    pub title: Option<String>,
    /// Unix seconds.
    pub created_at: i64,
    pub clicks: i64,
}

/// A bundle known to the mock server.
#[derive(Debug, Clone, Serialize)]
pub struct MockBundle {
    pub bundle_link: String,
    pub title: String,
    pub description: String,
    pub private: bool,
    pub links: Vec<String>,
    pub archived: bool,
}

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug)]
pub struct MockState {
    /// Links indexed by hash.
    pub links: HashMap<String, MockLink>,

    /// Bundles indexed by bundle link.
    pub bundles: HashMap<String, MockBundle>,

    /// OAuth2 authorization codes and the token each one yields.
    pub auth_codes: HashMap<String, String>,

    /// Optional authentication token. If set, requests must include this token.
    pub required_token: Option<String>,

    /// Login of the authenticated user.
    pub login: String,

    /// Host used when rendering short links.
    pub short_domain: String,

    next_id: u64,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            links: HashMap::new(),
            bundles: HashMap::new(),
            auth_codes: HashMap::new(),
            required_token: None,
            login: "mockuser".to_string(),
            short_domain: "bit.ly".to_string(),
            next_id: 1000,
        }
    }
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a link to the state.
    pub fn with_link(mut self, link: MockLink) -> Self {
        self.links.insert(link.hash.clone(), link);
        self
    }

    /// Add a bundle to the state.
    pub fn with_bundle(mut self, bundle: MockBundle) -> Self {
        self.bundles.insert(bundle.bundle_link.clone(), bundle);
        self
    }

    /// Accept `code` in the token exchange, answering with `token`.
    pub fn with_auth_code(mut self, code: &str, token: &str) -> Self {
        self.auth_codes.insert(code.to_string(), token.to_string());
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Render the short URL for a hash.
    pub fn short_url(&self, hash: &str) -> String {
        format!("http://{}/{}", self.short_domain, hash)
    }

    /// Find a link by hash or by short URL.
    pub fn resolve(&self, short_url: Option<&str>, hash: Option<&str>) -> Option<&MockLink> {
        let hash = match (hash, short_url) {
            (Some(h), _) => h,
            (None, Some(url)) => url.trim_end_matches('/').rsplit('/').next()?,
            (None, None) => return None,
        };
        self.links.get(hash)
    }

    /// Find the link for a long URL.
    pub fn find_by_long_url(&self, long_url: &str) -> Option<&MockLink> {
        self.links.values().find(|l| l.long_url == long_url)
    }

    /// Shorten a long URL, reusing an existing link. Returns the link and
    /// whether it was newly created.
    pub fn shorten(&mut self, long_url: &str, now: i64) -> (MockLink, bool) {
        if let Some(existing) = self.find_by_long_url(long_url) {
            return (existing.clone(), false);
        }

        let hash = format!("mk{}", self.next_id);
        self.next_id += 1;

        let link = MockLink {
            hash: hash.clone(),
            long_url: long_url.to_string(),
            title: None,
            created_at: now,
            clicks: 0,
        };
        self.links.insert(hash, link.clone());
        (link, true)
    }

    /// Links ordered newest first.
    pub fn history(&self) -> Vec<&MockLink> {
        let mut links: Vec<&MockLink> = self.links.values().collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.hash.cmp(&a.hash)));
        links
    }

    /// Create a bundle owned by the mock user.
    pub fn create_bundle(&mut self, title: &str, description: &str, private: bool) -> &MockBundle {
        let bundle_link = format!("http://bitly.com/bundles/{}/{}", self.login, self.next_id);
        self.next_id += 1;

        self.bundles.entry(bundle_link.clone()).or_insert(MockBundle {
            bundle_link,
            title: title.to_string(),
            description: description.to_string(),
            private,
            links: vec![],
            archived: false,
        })
    }

    /// Append a link to a bundle.
    pub fn add_bundle_link(&mut self, bundle_link: &str, link: &str) -> Option<&MockBundle> {
        let bundle = self.bundles.get_mut(bundle_link)?;
        bundle.links.push(link.to_string());
        Some(bundle)
    }

    /// Mark a bundle archived. Returns false if it does not exist.
    pub fn archive_bundle(&mut self, bundle_link: &str) -> bool {
        match self.bundles.get_mut(bundle_link) {
            Some(bundle) => {
                bundle.archived = true;
                true
            }
            None => false,
        }
    }
}
