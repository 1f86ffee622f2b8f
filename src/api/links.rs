//! Shortening, expansion, and link metadata.

use serde_json::Value;

use super::identify;
use crate::client::BitlyClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::ShortenedLink;
use crate::query::Params;

impl BitlyClient {
    /// Shorten a long URL.
    ///
    /// `domain` picks a branded short domain (e.g., `j.mp`) when the account
    /// has one.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let link = client.shorten("https://example.com/article", None).await?;
    /// println!("{} (new: {})", link.url, link.new_hash);
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn shorten(&self, long_url: &str, domain: Option<&str>) -> Result<ShortenedLink> {
        let params = Params::new()
            .with("longUrl", long_url)
            .with_opt("domain", domain);
        let data = self.invoke(&endpoints::SHORTEN, params).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Look up the long URL behind a short link.
    ///
    /// Returns the first `expand` entry (`short_url`, `long_url`,
    /// `user_hash`, `global_hash`).
    ///
    /// # Errors
    ///
    /// Returns [`BitlyError::Usage`](crate::BitlyError::Usage) without
    /// sending anything if both `short_url` and `hash` are missing or empty.
    #[tracing::instrument(skip(self))]
    pub async fn expand(&self, short_url: Option<&str>, hash: Option<&str>) -> Result<Value> {
        let params = identify("expand", short_url, hash)?;
        self.invoke(&endpoints::EXPAND, params).await
    }

    /// Fetch title and creator information for a short link.
    ///
    /// # Errors
    ///
    /// Same precondition as [`expand`](Self::expand).
    #[tracing::instrument(skip(self))]
    pub async fn info(
        &self,
        short_url: Option<&str>,
        hash: Option<&str>,
        expand_user: Option<bool>,
    ) -> Result<Value> {
        let params = identify("info", short_url, hash)?.with_opt("expand_user", expand_user);
        self.invoke(&endpoints::INFO, params).await
    }

    /// Find the public bitlink for a long URL.
    pub async fn link_lookup(&self, url: &str) -> Result<Value> {
        self.invoke(&endpoints::LINK_LOOKUP, Params::new().with("url", url))
            .await
    }

    /// Metadata about a link's destination page.
    pub async fn link_info(&self, link: &str) -> Result<Value> {
        self.invoke(&endpoints::LINK_INFO, Params::new().with("link", link))
            .await
    }

    /// The extracted content of a link's destination page.
    ///
    /// `content_type` is `"html"` or `"text"`.
    pub async fn link_content(&self, link: &str, content_type: Option<&str>) -> Result<Value> {
        let params = Params::new()
            .with("link", link)
            .with_opt("content_type", content_type);
        self.invoke(&endpoints::LINK_CONTENT, params).await
    }

    pub async fn link_category(&self, link: &str) -> Result<Value> {
        self.invoke(&endpoints::LINK_CATEGORY, Params::new().with("link", link))
            .await
    }

    pub async fn link_social(&self, link: &str) -> Result<Value> {
        self.invoke(&endpoints::LINK_SOCIAL, Params::new().with("link", link))
            .await
    }

    pub async fn link_location(&self, link: &str) -> Result<Value> {
        self.invoke(&endpoints::LINK_LOCATION, Params::new().with("link", link))
            .await
    }

    pub async fn link_language(&self, link: &str) -> Result<Value> {
        self.invoke(&endpoints::LINK_LANGUAGE, Params::new().with("link", link))
            .await
    }

    /// Users who shortened the same long URL.
    pub async fn link_encoders(
        &self,
        link: &str,
        my_network: Option<bool>,
        subaccounts: Option<bool>,
        limit: Option<u32>,
        expand_user: Option<bool>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("link", link)
            .with_opt("my_network", my_network)
            .with_opt("subaccounts", subaccounts)
            .with_opt("limit", limit)
            .with_opt("expand_user", expand_user);
        self.invoke(&endpoints::LINK_ENCODERS, params).await
    }

    pub async fn link_encoders_count(&self, link: &str) -> Result<Value> {
        self.invoke(
            &endpoints::LINK_ENCODERS_COUNT,
            Params::new().with("link", link),
        )
        .await
    }
}
