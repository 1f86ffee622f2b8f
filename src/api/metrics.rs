//! Click, referrer, and country metrics.
//!
//! These endpoints differ only in path, so their methods are generated.

use serde_json::Value;

use super::identify;
use crate::client::BitlyClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{MetricsQuery, LINK_METRICS_LIMIT, USER_METRICS_LIMIT};
use crate::query::Params;

/// Legacy per-short-link lookups, identified by URL or hash.
macro_rules! short_link_metrics {
    ($($(#[$doc:meta])* $name:ident => $endpoint:ident;)*) => {
        impl BitlyClient {
            $(
                $(#[$doc])*
                ///
                /// # Errors
                ///
                /// Returns [`BitlyError::Usage`](crate::BitlyError::Usage)
                /// if both `short_url` and `hash` are missing or empty.
                pub async fn $name(
                    &self,
                    short_url: Option<&str>,
                    hash: Option<&str>,
                ) -> Result<Value> {
                    let params = identify(stringify!($name), short_url, hash)?;
                    self.invoke(&endpoints::$endpoint, params).await
                }
            )*
        }
    };
}

/// Windowed metrics for one bitlink.
macro_rules! link_metrics {
    ($($(#[$doc:meta])* $name:ident => $endpoint:ident;)*) => {
        impl BitlyClient {
            $(
                $(#[$doc])*
                pub async fn $name(&self, link: &str, query: &MetricsQuery) -> Result<Value> {
                    let mut params = Params::new().with("link", link);
                    query.apply(&mut params, LINK_METRICS_LIMIT);
                    self.invoke(&endpoints::$endpoint, params).await
                }
            )*
        }
    };
}

/// Windowed metrics across the authenticated user's links.
macro_rules! user_metrics {
    ($($(#[$doc:meta])* $name:ident => $endpoint:ident;)*) => {
        impl BitlyClient {
            $(
                $(#[$doc])*
                pub async fn $name(&self, query: &MetricsQuery) -> Result<Value> {
                    let mut params = Params::new();
                    query.apply(&mut params, USER_METRICS_LIMIT);
                    self.invoke(&endpoints::$endpoint, params).await
                }
            )*
        }
    };
}

short_link_metrics! {
    /// Total click counts for a short link.
    clicks => CLICKS;
    /// Clicks per day for a short link.
    clicks_by_day => CLICKS_BY_DAY;
    /// Clicks per minute over the last hour.
    clicks_by_minute => CLICKS_BY_MINUTE;
    /// Referring pages for a short link.
    referrers => REFERRERS;
    /// Referring domains for a short link.
    referring_domains => REFERRING_DOMAINS;
    /// Click counts per country for a short link.
    countries => COUNTRIES;
}

link_metrics! {
    /// Clicks on a bitlink.
    link_clicks => LINK_CLICKS;
    /// Clicks on a bitlink by country.
    link_countries => LINK_COUNTRIES;
    /// Referrers of a bitlink.
    link_referrers => LINK_REFERRERS;
    /// Referrers of a bitlink grouped by referring domain.
    link_referrers_by_domain => LINK_REFERRERS_BY_DOMAIN;
    /// Referring domains of a bitlink.
    link_referring_domains => LINK_REFERRING_DOMAINS;
    /// Social shares of a bitlink.
    link_shares => LINK_SHARES;
}

user_metrics! {
    /// Clicks across the user's links.
    user_clicks => USER_CLICKS;
    /// Clicks by country across the user's links.
    user_countries => USER_COUNTRIES;
    /// The user's most clicked links.
    user_popular_links => USER_POPULAR_LINKS;
    user_referrers => USER_REFERRERS;
    user_referring_domains => USER_REFERRING_DOMAINS;
    /// Shares of the user's links.
    user_share_counts => USER_SHARE_COUNTS;
    user_share_counts_by_share_type => USER_SHARE_COUNTS_BY_SHARE_TYPE;
    /// Links the user shortened per time unit.
    user_shorten_counts => USER_SHORTEN_COUNTS;
}
