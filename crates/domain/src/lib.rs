//! # LeadBridge Domain
//!
//! Business domain types and models for LeadBridge.
//!
//! This crate contains:
//! - The CRM lead record and its fixed field values
//! - Domain error types and Result definitions
//! - Environment-driven configuration structures
//!
//! ## Architecture
//! - No dependencies on other LeadBridge crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
