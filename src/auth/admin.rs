//! Admin token acquisition.

use serde::Deserialize;
use serde_json::json;

use super::{AdminCredentials, BearerToken};
use crate::client::Client;
use crate::transport::Method;
use crate::{Error, Result};

/// Admin password login endpoint.
pub const ADMIN_AUTH_PATH: &str = "/admins/auth-with-password";

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
}

/// Client for administrator authentication.
///
/// Access via `client.admins()`.
///
/// ```rust,ignore
/// let creds = AdminCredentials::new("admin@example.com", "password");
/// let token = client.admins().authenticate(&creds).await?;
/// let provisioner = Provisioner::new(client.clone()).with_token(token);
/// ```
#[derive(Clone)]
pub struct AdminAuthClient {
    client: Client,
}

impl AdminAuthClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Exchanges admin credentials for a bearer token.
    ///
    /// Any status other than 200 fails with `Unauthorized`, carrying the
    /// status and response text. Transport failures are returned unchanged.
    pub async fn authenticate(&self, credentials: &AdminCredentials) -> Result<BearerToken> {
        let body = json!({
            "identity": credentials.email(),
            "password": credentials.password(),
        });

        let response = self
            .client
            .transport()
            .request(Method::Post, ADMIN_AUTH_PATH, Some(&body), None)
            .await?;

        if !response.is_ok() {
            tracing::warn!(status = response.status, "admin authentication rejected");
            return Err(Error::unauthorized(format!(
                "admin login for {} failed with HTTP {}: {}",
                credentials.email(),
                response.status,
                response.error_message()
            ))
            .with_status(response.status, response.text));
        }

        let auth: AuthResponse = response.json()?;
        if auth.token.is_empty() {
            return Err(Error::invalid_response("admin login returned an empty token"));
        }

        tracing::info!(email = credentials.email(), "admin authenticated");
        Ok(BearerToken::new(auth.token))
    }
}

impl std::fmt::Debug for AdminAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAuthClient")
            .field("url", &self.client.url())
            .finish()
    }
}
