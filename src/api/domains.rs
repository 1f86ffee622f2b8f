//! Branded short domains and tracking domains.

use serde_json::Value;

use crate::client::BitlyClient;
use crate::endpoints;
use crate::error::{BitlyError, Result};
use crate::models::{MetricsQuery, USER_METRICS_LIMIT};
use crate::query::Params;

impl BitlyClient {
    /// Whether `domain` is a registered branded short domain.
    pub async fn pro_domain(&self, domain: &str) -> Result<bool> {
        let value = self
            .invoke(&endpoints::PRO_DOMAIN, Params::new().with("domain", domain))
            .await?;
        match value {
            Value::Bool(b) => Ok(b),
            Value::Number(n) => Ok(n.as_i64().is_some_and(|n| n != 0)),
            other => Err(BitlyError::MalformedResponse(format!(
                "bitly_pro_domain is not a flag: {other}"
            ))),
        }
    }

    /// Tracking domains configured for the user.
    pub async fn user_tracking_domain_list(&self) -> Result<Value> {
        self.invoke(&endpoints::USER_TRACKING_DOMAIN_LIST, Params::new())
            .await
    }

    /// Clicks on links under one tracking domain.
    pub async fn user_tracking_domain_clicks(
        &self,
        domain: &str,
        query: &MetricsQuery,
    ) -> Result<Value> {
        let mut params = Params::new().with("domain", domain);
        query.apply(&mut params, USER_METRICS_LIMIT);
        self.invoke(&endpoints::USER_TRACKING_DOMAIN_CLICKS, params)
            .await
    }

    /// Links shortened under one tracking domain.
    pub async fn user_tracking_domain_shorten_counts(
        &self,
        domain: &str,
        query: &MetricsQuery,
    ) -> Result<Value> {
        let mut params = Params::new().with("domain", domain);
        query.apply(&mut params, USER_METRICS_LIMIT);
        self.invoke(&endpoints::USER_TRACKING_DOMAIN_SHORTEN_COUNTS, params)
            .await
    }
}
