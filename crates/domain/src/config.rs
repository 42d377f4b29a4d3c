//! Environment-driven configuration
//!
//! All settings come from the process environment (optionally loaded from a
//! `.env` file by the binary). Nothing is persisted to disk.

use crate::errors::{LeadBridgeError, Result};

const DEFAULT_PORT: u16 = 3000;

/// Connection settings for the Salesforce-style CRM.
#[derive(Debug, Clone)]
pub struct SalesforceConfig {
    /// OAuth2 token endpoint for the client-credentials exchange.
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
    /// Base URL of the CRM REST API, without trailing slash
    /// (e.g. `https://example.my.salesforce.com/services/data/v62.0`).
    pub api_base: String,
    /// Optional bearer token to seed the shared token cell with at startup.
    pub preset_access_token: Option<String>,
}

/// HTTP listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Full application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub salesforce: SalesforceConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Required: `SF_TOKEN_URL`, `SF_CLIENT_ID`, `SF_CLIENT_SECRET`,
    /// `SF_API_BASE`. Optional: `SF_ACCESS_TOKEN`, `PORT` (default 3000).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup function.
    ///
    /// Keeps the parsing logic testable without mutating the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key).ok_or_else(|| {
                LeadBridgeError::Config(format!("missing environment variable: {key}"))
            })
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|err| {
                LeadBridgeError::Config(format!("invalid PORT value '{raw}': {err}"))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            salesforce: SalesforceConfig {
                token_url: required("SF_TOKEN_URL")?,
                client_id: required("SF_CLIENT_ID")?,
                client_secret: required("SF_CLIENT_SECRET")?,
                api_base: required("SF_API_BASE")?,
                preset_access_token: lookup("SF_ACCESS_TOKEN"),
            },
            server: ServerConfig { port },
        })
    }
}
