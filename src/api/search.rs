//! Search, high-value links, and realtime phrases.

use serde_json::Value;

use crate::client::BitlyClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::SearchQuery;
use crate::query::Params;

impl BitlyClient {
    /// Search links receiving clicks.
    pub async fn search(&self, query: &SearchQuery) -> Result<Value> {
        let mut params = Params::new();
        query.apply(&mut params);
        self.invoke(&endpoints::SEARCH, params).await
    }

    /// Links the service currently rates as high value.
    pub async fn highvalue(&self, limit: u32, lang: Option<&str>) -> Result<Value> {
        let params = Params::new().with("limit", limit).with_opt("lang", lang);
        self.invoke(&endpoints::HIGHVALUE, params).await
    }

    pub async fn realtime_bursting_phrases(&self) -> Result<Value> {
        self.invoke(&endpoints::REALTIME_BURSTING_PHRASES, Params::new())
            .await
    }

    pub async fn realtime_hot_phrases(&self) -> Result<Value> {
        self.invoke(&endpoints::REALTIME_HOT_PHRASES, Params::new())
            .await
    }

    /// Clicks per second on links containing `phrase`.
    pub async fn realtime_clickrate(&self, phrase: &str) -> Result<Value> {
        self.invoke(
            &endpoints::REALTIME_CLICKRATE,
            Params::new().with("phrase", phrase),
        )
        .await
    }
}
