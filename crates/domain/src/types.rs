//! Domain data types

pub mod lead;

pub use lead::{LeadRecord, RecordTypeRef, DEALER_QUALIFICATION_RECORD_TYPE, WEBSITE_LEAD_SOURCE};
