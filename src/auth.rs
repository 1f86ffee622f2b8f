//! OAuth2 web flow.
//!
//! The first leg sends the user to [`BitlyClient::authorize_url`]; the
//! service redirects back with a `code`, which
//! [`BitlyClient::exchange_authorization_code`] trades for an access token.

use url::{form_urlencoded, Url};

use crate::client::BitlyClient;
use crate::endpoints;
use crate::error::{BitlyError, Result};
use crate::query::Params;

/// Where users grant an application access.
pub const AUTHORIZE_URL: &str = "https://bitly.com/oauth/authorize";

impl BitlyClient {
    /// Build the URL that starts the OAuth2 web flow.
    ///
    /// # Errors
    ///
    /// Returns [`BitlyError::Usage`] if the client has no `client_id`.
    pub fn authorize_url(&self, redirect_uri: &str, state: Option<&str>) -> Result<Url> {
        let client_id = self.client_id().ok_or_else(|| {
            BitlyError::Usage("authorize_url requires a client_id".to_string())
        })?;

        let mut url = Url::parse(AUTHORIZE_URL)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("client_id", client_id);
            pairs.append_pair("redirect_uri", redirect_uri);
            if let Some(state) = state {
                pairs.append_pair("state", state);
            }
        }
        Ok(url)
    }

    /// Exchange an authorization code for an access token.
    ///
    /// The token is stored on the client, so later calls are authenticated,
    /// and also returned.
    ///
    /// # Errors
    ///
    /// Fails like any other call, or with [`BitlyError::MalformedResponse`]
    /// if the reply carries no `access_token`.
    #[tracing::instrument(skip(self, code))]
    pub async fn exchange_authorization_code(
        &mut self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<String> {
        let params = Params::new()
            .with("code", code)
            .with("redirect_uri", redirect_uri)
            .with_opt("client_id", self.client_id())
            .with_opt("client_secret", self.client_secret());

        let body = self
            .invoke_raw(&endpoints::OAUTH_ACCESS_TOKEN, params)
            .await?;

        let token = parse_access_token(&body)?;
        self.store_access_token(token.clone());
        tracing::info!("stored access token from authorization code exchange");
        Ok(token)
    }
}

/// Pull `access_token` out of a form-encoded token response.
fn parse_access_token(body: &str) -> Result<String> {
    form_urlencoded::parse(body.as_bytes())
        .find(|(key, _)| key == "access_token")
        .map(|(_, value)| value.into_owned())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            BitlyError::MalformedResponse("token response has no access_token".to_string())
        })
}
