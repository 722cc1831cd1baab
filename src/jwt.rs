use crate::casdoor_client::CasdoorClient;
use crate::error::{Error, Result};
use crate::user::User;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use log::trace;
use serde::{Deserialize, Serialize};

/// Claims of an access token issued by the server: the signed in user plus the
/// usual registered claims.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub nonce: String,
    #[serde(default)]
    pub scope: String,

    #[serde(default)]
    pub iss: String,
    #[serde(default)]
    pub sub: String,
    #[serde(default, deserialize_with = "crate::de::one_or_many")]
    pub aud: Vec<String>,
    #[serde(default)]
    pub exp: u64,
    #[serde(default)]
    pub nbf: u64,
    #[serde(default)]
    pub iat: u64,
    #[serde(default)]
    pub jti: String,
}

impl CasdoorClient {
    /// Verifies an access token with the configured certificate and returns its claims.
    ///
    /// The token must be signed with RS256, not be expired and be issued for this client.
    pub fn parse_jwt_token(&self, token: &str) -> Result<Claims> {
        let key = DecodingKey::from_rsa_pem(self.settings.certificate.as_bytes())
            .map_err(Error::Certificate)?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.settings.client_id]);

        let token_data = decode::<Claims>(token, &key, &validation)
            .map_err(|err| Error::Auth(err.to_string()))?;

        trace!("Verified token of '{}'", token_data.claims.user.name);
        Ok(token_data.claims)
    }
}
