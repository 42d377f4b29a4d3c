//! Salesforce REST adapter for the CRM gateway port
//!
//! POSTs lead records to the CRM's Lead collection endpoint with bearer
//! authentication. Which statuses come back as replies and which become
//! errors is decided by the caller via [`StatusPolicy`].

use async_trait::async_trait;
use leadbridge_core::{CreateLeadReply, CrmGateway, StatusPolicy};
use leadbridge_domain::{LeadBridgeError, LeadRecord, Result};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::HttpClient;

const LEAD_COLLECTION_PATH: &str = "/sobjects/Lead";
const GENERIC_ERROR_MESSAGE: &str = "Internal server error";

/// Client for the CRM's Lead collection endpoint.
pub struct SalesforceClient {
    http_client: HttpClient,
    api_base: String,
}

impl SalesforceClient {
    /// Create a client against the configured API base URL.
    pub fn new(http_client: HttpClient, api_base: impl Into<String>) -> Self {
        Self { http_client, api_base: api_base.into() }
    }

    fn lead_url(&self) -> String {
        format!("{}{LEAD_COLLECTION_PATH}", self.api_base)
    }
}

#[async_trait]
impl CrmGateway for SalesforceClient {
    async fn create_lead(
        &self,
        record: &LeadRecord,
        access_token: &str,
        policy: StatusPolicy,
    ) -> Result<CreateLeadReply> {
        let builder = self
            .http_client
            .request(Method::POST, self.lead_url())
            .bearer_auth(access_token)
            .json(record);

        let response = self.http_client.send(builder).await?;
        let status = response.status();

        if !policy.absorbs(status.as_u16()) {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body, "lead creation rejected by CRM");
            let message =
                if body.is_empty() { GENERIC_ERROR_MESSAGE.to_string() } else { body };
            return Err(LeadBridgeError::CrmRejected { status: status.as_u16(), message });
        }

        // The id is best-effort: 401 replies and some non-201 outcomes have
        // no record body, and the retry path accepts whatever came back.
        let record_id = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body.get("id").and_then(Value::as_str).map(str::to_string));

        debug!(%status, record_id = record_id.as_deref(), "lead creation response absorbed");
        Ok(CreateLeadReply { status: status.as_u16(), record_id })
    }
}
