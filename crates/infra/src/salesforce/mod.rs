//! Salesforce CRM integration

pub mod client;
pub mod token;

pub use client::SalesforceClient;
pub use token::TokenProvider;
