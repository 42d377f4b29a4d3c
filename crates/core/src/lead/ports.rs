//! Lead submission port interfaces
//!
//! Infrastructure adapters implement these traits; the submitter only sees
//! the traits.

use async_trait::async_trait;
use leadbridge_domain::{LeadRecord, Result};

/// Which CRM response statuses the gateway surfaces as a [`CreateLeadReply`]
/// instead of an error.
///
/// The first attempt mirrors the service's historical transport validation:
/// success statuses and 401 come back as replies so the submitter can decide
/// whether to refresh and retry, while any other status is an error. The
/// retry deliberately absorbs everything; its outcome is never re-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Absorb `[200,300)` and 401; any other status is an error.
    FirstAttempt,
    /// Absorb every status; only transport failures are errors.
    Retry,
}

impl StatusPolicy {
    /// Whether a response with `status` should be surfaced as a reply.
    #[must_use]
    pub fn absorbs(self, status: u16) -> bool {
        match self {
            Self::FirstAttempt => (200..300).contains(&status) || status == 401,
            Self::Retry => true,
        }
    }
}

/// Outcome of one CRM call that the gateway chose to absorb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLeadReply {
    /// HTTP status returned by the CRM.
    pub status: u16,
    /// The created record's id, when the response body carried one.
    pub record_id: Option<String>,
}

/// Trait for the CRM's lead collection endpoint.
#[async_trait]
pub trait CrmGateway: Send + Sync {
    /// POST a lead record with the given bearer token.
    ///
    /// Statuses absorbed by `policy` come back as `Ok`; everything else
    /// (non-absorbed statuses, transport failures) is an `Err` carrying the
    /// CRM's status and body when available.
    async fn create_lead(
        &self,
        record: &LeadRecord,
        access_token: &str,
        policy: StatusPolicy,
    ) -> Result<CreateLeadReply>;
}

/// Trait for obtaining a fresh CRM access token.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Run the client-credentials exchange and return the new bearer token.
    ///
    /// The caller is responsible for storing the token into shared state.
    async fn fetch_token(&self) -> Result<String>;
}
