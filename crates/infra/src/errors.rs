//! Conversions from external infrastructure errors into domain errors.

use leadbridge_domain::LeadBridgeError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub LeadBridgeError);

impl From<InfraError> for LeadBridgeError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<LeadBridgeError> for InfraError {
    fn from(value: LeadBridgeError) -> Self {
        Self(value)
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        let detail = if value.is_timeout() {
            format!("http request timed out: {value}")
        } else if value.is_connect() {
            format!("http connection failed: {value}")
        } else if value.is_builder() {
            return Self(LeadBridgeError::Internal(format!("failed to build http request: {value}")));
        } else if value.is_decode() {
            format!("failed to decode http response: {value}")
        } else {
            format!("http request failed: {value}")
        };
        Self(LeadBridgeError::Network(detail))
    }
}
