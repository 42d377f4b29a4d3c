//! # LeadBridge Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The reqwest-backed HTTP client wrapper
//! - The Salesforce REST adapter (CRM gateway port)
//! - The OAuth2 client-credentials token provider (token source port)
//!
//! ## Architecture
//! - Implements traits defined in `leadbridge-core`
//! - Contains all "impure" code (network I/O)

pub mod errors;
pub mod http;
pub mod salesforce;

// Re-export commonly used items
pub use http::HttpClient;
pub use salesforce::{SalesforceClient, TokenProvider};
