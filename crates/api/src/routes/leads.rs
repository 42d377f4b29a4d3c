//! Lead submission endpoints
//!
//! Both endpoints share one pipeline: map and validate the raw body for the
//! route's form profile, submit through the shared submitter, and render the
//! outcome. Every failure becomes a JSON response; nothing here is fatal to
//! the process.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use leadbridge_core::{map_fields, FormProfile};
use leadbridge_domain::LeadBridgeError;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::context::AppContext;

const SUCCESS_MESSAGE: &str = "Lead created successfully in Salesforce";
const GENERIC_ERROR_MESSAGE: &str = "Internal server error";

/// POST /sf_api/lead
pub async fn create_lead(
    State(context): State<Arc<AppContext>>,
    body: Result<Json<Value>, JsonRejection>,
) -> (StatusCode, Json<Value>) {
    submit(&context, FormProfile::GeneralLead, body).await
}

/// POST /sf_api/lead/become-a-dealer
pub async fn create_dealer_lead(
    State(context): State<Arc<AppContext>>,
    body: Result<Json<Value>, JsonRejection>,
) -> (StatusCode, Json<Value>) {
    submit(&context, FormProfile::BecomeADealer, body).await
}

async fn submit(
    context: &AppContext,
    profile: FormProfile,
    body: Result<Json<Value>, JsonRejection>,
) -> (StatusCode, Json<Value>) {
    // A missing or undecodable body goes through the same validation error
    // as an explicit null.
    let payload = body.ok().map(|Json(value)| value);
    info!(?profile, "received lead creation request");

    let record = match map_fields(payload.as_ref(), profile) {
        Ok(record) => record,
        Err(err) => return error_response(&err),
    };

    match context.submitter.submit(&record).await {
        Ok(outcome) => {
            info!(?profile, record_id = outcome.record_id.as_deref(), "lead created");
            (
                StatusCode::CREATED,
                Json(json!({
                    "success": true,
                    "salesforceId": outcome.record_id,
                    "message": SUCCESS_MESSAGE,
                })),
            )
        }
        Err(err) => error_response(&err),
    }
}

/// Render a domain error as the endpoint's failure shape.
///
/// Validation problems are 400s, CRM rejections relay the CRM's own status
/// and body (re-parsed as JSON when possible, as the upstream API answers
/// with structured errors), everything else collapses to a generic 500.
fn error_response(err: &LeadBridgeError) -> (StatusCode, Json<Value>) {
    let (status, message) = match err {
        LeadBridgeError::Validation(msg) => (StatusCode::BAD_REQUEST, Value::String(msg.clone())),
        LeadBridgeError::CrmRejected { status, message } => {
            error!(status, message, "lead creation failed");
            let body = serde_json::from_str::<Value>(message)
                .unwrap_or_else(|_| Value::String(message.clone()));
            (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                body,
            )
        }
        other => {
            error!(error = %other, "lead creation failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Value::String(GENERIC_ERROR_MESSAGE.to_string()))
        }
    };

    (status, Json(json!({ "success": false, "error": message })))
}
