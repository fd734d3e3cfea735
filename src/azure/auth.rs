//! Service principal authentication.
//!
//! Exchanges the client secret for a management-plane bearer token using the
//! OAuth2 client-credentials grant.

use crate::config;
use chrono::{DateTime, Duration, Utc};
use colored::Colorize;
use serde::Deserialize;
use std::env;
use std::error::Error;

/// Service principal credentials read from the environment.
#[derive(Clone)]
pub struct Credential {
    tenant_id: String,
    client_id: String,
    client_secret: String,
}

/// Token response from the AAD token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

/// A bearer token for the management endpoint.
pub struct AccessToken {
    /// The raw bearer token.
    pub token: String,
    /// When the token expires.
    pub expires_on: DateTime<Utc>,
}

impl Credential {
    /// Read AZURE_TENANT_ID, AZURE_CLIENT_ID and AZURE_CLIENT_SECRET.
    ///
    /// Fails early with the name of the missing variable rather than letting
    /// the token request come back with an opaque AAD error.
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        Ok(Credential {
            tenant_id: require_var("AZURE_TENANT_ID")?,
            client_id: require_var("AZURE_CLIENT_ID")?,
            client_secret: require_var("AZURE_CLIENT_SECRET")?,
        })
    }

    /// Request a bearer token scoped to the management endpoint.
    pub async fn fetch_token(&self, http: &reqwest::Client) -> Result<AccessToken, Box<dyn Error>> {
        let url = format!(
            "{authority}/{tenant}/oauth2/v2.0/token",
            authority = config::AUTHORITY_HOST,
            tenant = self.tenant_id
        );
        log::debug!("POST {url}", url = url.on_blue());

        let response = http
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("scope", config::MANAGEMENT_SCOPE),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            log::warn!(
                "{failed} token request for client {client}",
                failed = "failed".on_red(),
                client = self.client_id
            );
            return Err(format!("Token request failed: {status}: {body}").into());
        }

        let parsed = parse_token_response(&body)?;
        let expires_on = Utc::now() + Duration::seconds(parsed.expires_in);
        log::info!(
            "Acquired management token for client {client}, expires {expires}",
            client = self.client_id,
            expires = expires_on.format("%Y-%m-%d %H:%M:%S UTC")
        );

        Ok(AccessToken {
            token: parsed.access_token,
            expires_on,
        })
    }
}

fn require_var(name: &str) -> Result<String, Box<dyn Error>> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(format!("Missing required environment variable: {name}").into()),
    }
}

fn parse_token_response(body: &str) -> Result<TokenResponse, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing token response: path={} error={}", e.path(), e).into())
}
