//! Application context
//!
//! Owns the wired-up service singletons shared by all request handlers.

use std::sync::Arc;

use leadbridge_core::{LeadSubmitter, TokenCell};
use leadbridge_domain::{Config, Result};
use leadbridge_infra::{HttpClient, SalesforceClient, TokenProvider};

/// Shared application state handed to every handler.
pub struct AppContext {
    /// The lead submission service, one instance for all requests.
    pub submitter: Arc<LeadSubmitter>,
}

impl AppContext {
    /// Wire the full stack from configuration: HTTP client, token provider,
    /// CRM gateway, shared token cell (seeded from `SF_ACCESS_TOKEN` when
    /// set), and the submitter on top.
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = HttpClient::new()?;

        let token_provider =
            Arc::new(TokenProvider::new(http_client.clone(), &config.salesforce));
        let gateway =
            Arc::new(SalesforceClient::new(http_client, config.salesforce.api_base.clone()));
        let token_cell = TokenCell::new(config.salesforce.preset_access_token.clone());

        Ok(Self {
            submitter: Arc::new(LeadSubmitter::new(gateway, token_provider, token_cell)),
        })
    }
}
