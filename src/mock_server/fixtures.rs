//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use super::state::{MockBundle, MockLink};

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// Default data set loaded by [`MockServer::start`](super::MockServer::start).
pub struct DefaultScenario {
    pub links: Vec<MockLink>,
    pub bundles: Vec<MockBundle>,
    pub auth_codes: Vec<(String, String)>,
}

impl Fixtures {
    // =========================================================================
    // Link Fixtures
    // =========================================================================

    /// Create a link with no title and no clicks.
    pub fn minimal_link(hash: &str, long_url: &str) -> MockLink {
        MockLink {
            hash: hash.to_string(),
            long_url: long_url.to_string(),
            title: None,
            created_at: 1_600_000_000,
            clicks: 0,
        }
    }

    /// Create a titled link with a click count.
    pub fn popular_link(hash: &str, long_url: &str, title: &str, clicks: i64) -> MockLink {
        let mut link = Self::minimal_link(hash, long_url);
        link.title = Some(title.to_string());
        link.clicks = clicks;
        link
    }

    // =========================================================================
    // Bundle Fixtures
    // =========================================================================

    /// Create an empty public bundle.
    pub fn empty_bundle(bundle_link: &str, title: &str) -> MockBundle {
        MockBundle {
            bundle_link: bundle_link.to_string(),
            title: title.to_string(),
            description: String::new(),
            private: false,
            links: vec![],
            archived: false,
        }
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// Two links, one bundle, and one valid authorization code
    /// (`test-code` yielding `test-token`).
    pub fn default_scenario() -> DefaultScenario {
        let mut bundle = Self::empty_bundle("http://bitly.com/bundles/mockuser/1", "Favorites");
        bundle.links.push("http://bit.ly/ze6poY".to_string());

        DefaultScenario {
            links: vec![
                Self::popular_link(
                    "ze6poY",
                    "http://example.com/",
                    "Example Domain",
                    42,
                ),
                Self::minimal_link("aB3dE", "https://www.rust-lang.org/"),
            ],
            bundles: vec![bundle],
            auth_codes: vec![("test-code".to_string(), "test-token".to_string())],
        }
    }
}
