//! # Casdoor Client
//! The goal of this library is to make it easy to talk to a Casdoor identity server from rust:
//! log users in with OAuth 2.0, refresh and revoke their tokens, verify tokens locally and manage
//! users, roles, permissions and resources.
//! The client is based on the `Reqwest` and `Oauth2` library
//!
//! Every operation is a single request to the server. Responses come wrapped in an
//! [`Envelope`], whose status is checked before the payload is handed back.
//!
//! ## Usage
//! Add this library as a dependency to your project.
//! ```toml
//! [dependencies]
//! casdoor_client = { git = "ssh://git@github.com/jeroenvervaeke/casdoor_client.git" }
//! ```
//!
//! ## Example code
//! ```no_run
//!# async fn doc_test() -> anyhow::Result<()> {
//! use casdoor_client::{CasdoorClient, Role, Settings};
//!
//! // Set up the client, the certificate is the one of the application's signing key
//! let certificate = std::fs::read_to_string("token_jwt_key.pem")?;
//! let settings = Settings::new(
//!     "https://door.example.com",
//!     "xxxxxxxxxx",
//!     "xxxxxxxxxx",
//!     certificate,
//!     "built-in",
//!     "app-built-in",
//! );
//! let client = CasdoorClient::new(settings)?;
//!
//! // Log a user in with the code the server redirected back with
//! let token = client.get_oauth_token("code", "state").await?;
//!
//! // Manage records of the organization
//! let role = Role {
//!     name: "r1".to_string(),
//!     description: "d1".to_string(),
//!     ..Role::default()
//! };
//! client.add_role(&role).await?;
//! assert!(client.get_role("r1").await?.is_some());
//!
//!# let _ = token;
//!# Ok(())
//!# }
//! ```
mod casdoor_client;
mod de;
mod entity;
mod envelope;
mod error;
mod jwt;
mod oauth;
mod permission;
mod resource;
mod role;
mod settings;
mod user;

pub use crate::casdoor_client::CasdoorClient;
pub use crate::entity::Entity;
pub use crate::envelope::Envelope;
pub use crate::error::{Error, Result};
pub use crate::jwt::Claims;
pub use crate::oauth::{check_token, Token};
pub use crate::permission::Permission;
pub use crate::resource::{Resource, UploadedResource};
pub use crate::role::Role;
pub use crate::settings::Settings;
pub use crate::user::User;

pub use oauth2::TokenResponse;
