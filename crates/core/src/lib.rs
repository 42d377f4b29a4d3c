//! # LeadBridge Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Form-variant validation profiles and the field mapper
//! - The lead submitter (single reauthentication retry state machine)
//! - Port/adapter interfaces (traits) for the CRM gateway and token source
//!
//! ## Architecture Principles
//! - Only depends on `leadbridge-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod lead;
pub mod token;

// Re-export specific items to avoid ambiguity
pub use lead::mapper::map_fields;
pub use lead::ports::{CreateLeadReply, CrmGateway, StatusPolicy, TokenSource};
pub use lead::profile::FormProfile;
pub use lead::service::{LeadOutcome, LeadSubmitter};
pub use token::TokenCell;
