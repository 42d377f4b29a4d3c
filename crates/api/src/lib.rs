//! # LeadBridge API
//!
//! HTTP surface of the lead forwarding service: the axum router, request
//! handlers, and the application context that wires configuration to the
//! core submitter and infrastructure adapters.

pub mod context;
pub mod routes;

pub use context::AppContext;
pub use routes::build_router;
