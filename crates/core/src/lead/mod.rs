//! Lead submission pipeline: validation profiles, field mapping, and the
//! submit-with-one-reauth-retry orchestration.

pub mod mapper;
pub mod ports;
pub mod profile;
pub mod service;
