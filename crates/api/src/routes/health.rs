//! Health check endpoint

use axum::Json;
use serde_json::{json, Value};

/// Always 200 with a static message, independent of CRM or token state.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "message": "Salesforce Lead API is running!" }))
}
