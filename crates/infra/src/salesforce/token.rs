//! OAuth2 client-credentials token provider
//!
//! Runs the service-to-service grant against the CRM's token endpoint:
//! a form-encoded POST of `grant_type=client_credentials` plus the client
//! id and secret. Stateless; the submitter stores the returned token into
//! the shared cell.

use async_trait::async_trait;
use leadbridge_core::TokenSource;
use leadbridge_domain::{LeadBridgeError, Result, SalesforceConfig};
use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, error};

use crate::http::HttpClient;

/// Fetches bearer tokens via the OAuth2 client-credentials grant.
pub struct TokenProvider {
    http_client: HttpClient,
    token_url: String,
    client_id: String,
    client_secret: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl TokenProvider {
    /// Create a provider from the CRM configuration.
    pub fn new(http_client: HttpClient, config: &SalesforceConfig) -> Self {
        Self {
            http_client,
            token_url: config.token_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        }
    }
}

#[async_trait]
impl TokenSource for TokenProvider {
    async fn fetch_token(&self) -> Result<String> {
        let request_body = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let builder =
            self.http_client.request(Method::POST, &self.token_url).form(&request_body);

        // Token endpoint failures, network included, all surface as auth
        // errors per the error taxonomy.
        let response = self.http_client.send(builder).await.map_err(|err| {
            error!(error = %err, "failed to reach token endpoint");
            LeadBridgeError::Auth("Salesforce authentication failed".to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body, "token endpoint rejected client credentials");
            return Err(LeadBridgeError::Auth("Salesforce authentication failed".to_string()));
        }

        let tokens: TokenResponse = response.json().await.map_err(|err| {
            error!(error = %err, "failed to parse token endpoint response");
            LeadBridgeError::Auth("Salesforce authentication failed".to_string())
        })?;

        debug!("obtained fresh access token");
        Ok(tokens.access_token)
    }
}
