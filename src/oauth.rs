//! OAuth 2.0 flows against the login endpoints of the server.
//!
//! The server reports some failures inside an otherwise successful token response by
//! putting an `error:` message in the access token. [`check_token`] is the only place
//! that knows about it; every flow returning a [`Token`] goes through it.

use crate::casdoor_client::CasdoorClient;
use crate::error::{Error, Result};
use log::{debug, trace};
use oauth2::basic::{BasicClient, BasicErrorResponse, BasicTokenResponse};
use oauth2::reqwest::async_http_client;
use oauth2::{
    AuthType, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, RedirectUrl,
    RequestTokenError, Scope, TokenResponse, TokenUrl,
};
use serde_json::Value;
use url::Url;

/// Token pair returned by the code exchange and by a refresh.
pub type Token = BasicTokenResponse;

const AUTHORIZE_PATH: &str = "/api/login/oauth/authorize";
const ACCESS_TOKEN_PATH: &str = "/api/login/oauth/access_token";
const REFRESH_TOKEN_PATH: &str = "/api/login/oauth/refresh_token";
const LOGOUT_PATH: &str = "/api/login/oauth/logout";

const SIGNIN_PAGE: &str = "/login/oauth/authorize";
const SIGNUP_PAGE: &str = "/signup/oauth/authorize";

const ERROR_MARKER: &str = "error:";
const DEFAULT_SCOPE: &str = "read";

type TokenRequestError =
    RequestTokenError<oauth2::reqwest::Error<reqwest::Error>, BasicErrorResponse>;

impl CasdoorClient {
    fn oauth_client(&self, authorize_path: &str) -> Result<BasicClient> {
        let endpoint = &self.settings.endpoint;
        let oauth_client = BasicClient::new(
            ClientId::new(self.settings.client_id.clone()),
            Some(ClientSecret::new(self.settings.client_secret.clone())),
            AuthUrl::new(format!("{}{}", endpoint, authorize_path))?,
            Some(TokenUrl::new(format!("{}{}", endpoint, ACCESS_TOKEN_PATH))?),
        )
        // The server expects the client credentials next to the code
        .set_auth_type(AuthType::RequestBody);

        Ok(oauth_client)
    }

    /// Exchanges an authorization code for a token pair.
    pub async fn get_oauth_token(&self, code: &str, state: &str) -> Result<Token> {
        trace!("Preparing authorization code exchange");
        let oauth_client = self.oauth_client(AUTHORIZE_PATH)?;

        let exchange_request = oauth_client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .add_extra_param("state", state.to_string());

        let response = match self.settings.timeout() {
            Some(timeout) => {
                tokio::time::timeout(timeout, exchange_request.request_async(async_http_client))
                    .await
                    .map_err(|elapsed| Error::Transport(Box::new(elapsed)))?
            }
            None => exchange_request.request_async(async_http_client).await,
        }
        .map_err(token_request_error)?;

        debug!("Exchanged authorization code for a token");
        check_token(response)
    }

    /// Trades a refresh token for a new token pair.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<Token> {
        let query = [
            ("grant_type", "refresh_token"),
            ("scope", DEFAULT_SCOPE),
            ("refresh_token", refresh_token),
            ("client_id", self.settings.client_id.as_str()),
            ("client_secret", self.settings.client_secret.as_str()),
        ];

        let response: Value = self
            .post_json(REFRESH_TOKEN_PATH, &query, Vec::new(), false)
            .await?;

        debug!("Refreshed token");
        token_from_value(response)
    }

    /// Revokes a token, returns whether the server acknowledged it.
    pub async fn token_logout(&self, access_token: &str, state: &str) -> Result<bool> {
        let url = self.build_url(
            LOGOUT_PATH,
            &[("id_token_hint", access_token), ("state", state)],
        )?;

        let envelope = self.get_envelope(url).await?.into_ok()?;
        Ok(envelope.is_affected())
    }

    /// Login page users should be sent to, the application name is used as state.
    pub fn signin_url(&self, redirect_uri: &str) -> Result<Url> {
        let (url, _state) = self
            .oauth_client(SIGNIN_PAGE)?
            .set_redirect_uri(RedirectUrl::new(redirect_uri.to_string())?)
            .authorize_url(|| CsrfToken::new(self.settings.application_name.clone()))
            .add_scope(Scope::new(DEFAULT_SCOPE.to_string()))
            .url();

        Ok(url)
    }

    /// Signup page of the application.
    ///
    /// Without password signup the user is sent through the OAuth signup flow instead.
    pub fn signup_url(&self, enable_password: bool, redirect_uri: &str) -> Result<Url> {
        if enable_password {
            return Ok(Url::parse(&format!(
                "{}/signup/{}",
                self.settings.endpoint, self.settings.application_name
            ))?);
        }

        let signin_url = self.signin_url(redirect_uri)?;
        Ok(Url::parse(&signin_url.as_str().replacen(SIGNIN_PAGE, SIGNUP_PAGE, 1))?)
    }

    /// Public profile page of a user of the configured organization.
    pub fn user_profile_url(&self, user_name: &str, access_token: Option<&str>) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/users/{}/{}",
            self.settings.endpoint, self.settings.organization_name, user_name
        ))?;
        if let Some(access_token) = access_token {
            url.query_pairs_mut().append_pair("access_token", access_token);
        }

        Ok(url)
    }

    /// Account page of the user owning `access_token`.
    pub fn my_profile_url(&self, access_token: Option<&str>) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/account", self.settings.endpoint))?;
        if let Some(access_token) = access_token {
            url.query_pairs_mut().append_pair("access_token", access_token);
        }

        Ok(url)
    }
}

/// Rejects tokens whose access token carries the server's `error:` marker.
pub fn check_token(token: Token) -> Result<Token> {
    if let Some(message) = token.access_token().secret().strip_prefix(ERROR_MARKER) {
        return Err(Error::Auth(message.trim_start().to_string()));
    }

    Ok(token)
}

fn token_from_value(value: Value) -> Result<Token> {
    if let Some(error) = value.get("error").and_then(Value::as_str) {
        let description = value
            .get("error_description")
            .and_then(Value::as_str)
            .unwrap_or_default();
        return Err(Error::Auth(format!("{} {}", error, description).trim_end().to_string()));
    }

    check_token(serde_json::from_value(value)?)
}

fn token_request_error(err: TokenRequestError) -> Error {
    match err {
        RequestTokenError::ServerResponse(response) => Error::Auth(response.to_string()),
        RequestTokenError::Request(err) => Error::Transport(Box::new(err)),
        RequestTokenError::Parse(err, _body) => Error::Decode(err.into_inner()),
        RequestTokenError::Other(message) => Error::Auth(message),
    }
}
