//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for LeadBridge
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum LeadBridgeError {
    /// Client-input problem: missing body, missing required field, bad list
    /// field. Always rendered as a 400 response, never propagated further.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The CRM token endpoint rejected the client-credentials exchange or
    /// the exchange could not be completed.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The CRM answered a lead creation with a status outside the absorbed
    /// range. Carries the CRM's own status and response body so the HTTP
    /// surface can relay them.
    #[error("CRM rejected request ({status}): {message}")]
    CrmRejected {
        /// HTTP status returned by the CRM.
        status: u16,
        /// Response body text, or a generic message when unavailable.
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for LeadBridge operations
pub type Result<T> = std::result::Result<T, LeadBridgeError>;
