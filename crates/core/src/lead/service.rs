//! Lead submitter - core business logic
//!
//! Orchestrates one submission attempt against the CRM, refreshing the
//! shared token and retrying exactly once when the first attempt does not
//! come back as 201.

use std::sync::Arc;

use leadbridge_domain::{LeadRecord, Result};
use tracing::{debug, warn};

use super::ports::{CreateLeadReply, CrmGateway, StatusPolicy, TokenSource};
use crate::token::TokenCell;

/// Final outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadOutcome {
    /// Id of the created CRM record, when the CRM reported one.
    pub record_id: Option<String>,
}

/// Classification of a first-attempt reply.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AttemptOutcome {
    /// 201: the record was created, no second call is made.
    Created(Option<String>),
    /// 401: the bearer token has expired.
    AuthExpired,
    /// Some other absorbed 2xx that is not 201.
    NotCreated(u16),
}

fn classify(reply: &CreateLeadReply) -> AttemptOutcome {
    match reply.status {
        201 => AttemptOutcome::Created(reply.record_id.clone()),
        401 => AttemptOutcome::AuthExpired,
        other => AttemptOutcome::NotCreated(other),
    }
}

/// Lead submission service.
///
/// Holds the shared token cell plus the two ports it orchestrates. One
/// instance serves all requests concurrently; per-request state lives on the
/// stack of [`submit`](Self::submit).
pub struct LeadSubmitter {
    gateway: Arc<dyn CrmGateway>,
    tokens: Arc<dyn TokenSource>,
    token_cell: TokenCell,
}

impl LeadSubmitter {
    /// Create a new submitter around a gateway, a token source, and the
    /// shared token cell.
    pub fn new(
        gateway: Arc<dyn CrmGateway>,
        tokens: Arc<dyn TokenSource>,
        token_cell: TokenCell,
    ) -> Self {
        Self { gateway, tokens, token_cell }
    }

    /// Submit a validated record to the CRM.
    ///
    /// State machine: `Sending(token)` then either `Created(id)`, or
    /// `Retrying -> Sending(new token) -> Created(id)`, or a failure. The
    /// retry never re-checks the CRM's status: whatever the second call
    /// returns is treated as the final success and its record id (possibly
    /// absent) is reported. That matches the service's historical behavior
    /// and is a known latent bug kept on purpose; only transport failures
    /// and a failed token refresh make the retry path fail.
    pub async fn submit(&self, record: &LeadRecord) -> Result<LeadOutcome> {
        let token = self.token_cell.current().unwrap_or_default();
        let reply = self.gateway.create_lead(record, &token, StatusPolicy::FirstAttempt).await?;

        match classify(&reply) {
            AttemptOutcome::Created(record_id) => {
                debug!(record_id = record_id.as_deref(), "lead created on first attempt");
                Ok(LeadOutcome { record_id })
            }
            outcome => {
                warn!(
                    status = reply.status,
                    auth_expired = matches!(outcome, AttemptOutcome::AuthExpired),
                    "lead creation not confirmed; refreshing token and retrying once"
                );

                let fresh = self.tokens.fetch_token().await?;
                self.token_cell.store(fresh.clone());

                let retry = self.gateway.create_lead(record, &fresh, StatusPolicy::Retry).await?;
                debug!(status = retry.status, "retry response accepted as final");
                Ok(LeadOutcome { record_id: retry.record_id })
            }
        }
    }
}
