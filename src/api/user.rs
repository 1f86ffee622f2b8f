//! Authenticated user's profile, history, and saved links.

use serde_json::Value;

use crate::client::BitlyClient;
use crate::endpoints;
use crate::error::{BitlyError, Result};
use crate::models::{HistoryQuery, LinkEdit, LinkSave};
use crate::query::Params;

impl BitlyClient {
    /// Profile of the authenticated user, or of `login` when given.
    pub async fn user_info(&self, login: Option<&str>, full_name: Option<&str>) -> Result<Value> {
        let params = Params::new()
            .with_opt("login", login)
            .with_opt("full_name", full_name);
        self.invoke(&endpoints::USER_INFO, params).await
    }

    /// Links in the user's history, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn user_link_history(&self, query: &HistoryQuery) -> Result<Value> {
        let mut params = Params::new();
        query.apply(&mut params);
        self.invoke(&endpoints::USER_LINK_HISTORY, params).await
    }

    /// Links shared by the user's network.
    pub async fn user_network_history(
        &self,
        offset: Option<u32>,
        limit: Option<u32>,
        expand_client_id: Option<bool>,
        expand_user: Option<bool>,
    ) -> Result<Value> {
        let params = Params::new()
            .with_opt("offset", offset)
            .with_opt("limit", limit)
            .with_opt("expand_client_id", expand_client_id)
            .with_opt("expand_user", expand_user);
        self.invoke(&endpoints::USER_NETWORK_HISTORY, params).await
    }

    /// Change metadata on a link in the user's history.
    ///
    /// # Errors
    ///
    /// Returns [`BitlyError::Usage`] if `edit` changes nothing.
    pub async fn user_link_edit(&self, link: &str, edit: &LinkEdit) -> Result<Value> {
        if edit.is_empty() {
            return Err(BitlyError::Usage(
                "user_link_edit requires at least one field to change".to_string(),
            ));
        }
        let mut params = Params::new().with("link", link);
        edit.apply(&mut params);
        self.invoke(&endpoints::USER_LINK_EDIT, params).await
    }

    /// Find the user's bitlink for a long URL.
    pub async fn user_link_lookup(&self, url: &str) -> Result<Value> {
        self.invoke(&endpoints::USER_LINK_LOOKUP, Params::new().with("url", url))
            .await
    }

    /// Save a long URL to the user's history.
    pub async fn user_link_save(&self, long_url: &str, save: &LinkSave) -> Result<Value> {
        let mut params = Params::new().with("longUrl", long_url);
        save.apply(&mut params);
        self.invoke(&endpoints::USER_LINK_SAVE, params).await
    }

    /// Bundles owned by or shared with the user.
    pub async fn user_bundle_history(&self) -> Result<Value> {
        self.invoke(&endpoints::USER_BUNDLE_HISTORY, Params::new())
            .await
    }
}
