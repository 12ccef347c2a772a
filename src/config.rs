use std::env;

use log::debug;
use reqwest::Url;

use crate::error::{GatewayError, Result};

pub const API_URL_VAR: &str = "GATEWAYBOS_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8080/";

/// Where the back-office REST API lives.
///
/// Resolved once per process and handed to [`crate::ApiClient::new`]; every
/// gateway joins its resource path onto `endpoint_prefix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub endpoint_prefix: Url,
}

impl ApiConfig {
    pub fn new(endpoint_prefix: &str) -> Result<Self> {
        let normalized = if endpoint_prefix.ends_with('/') {
            endpoint_prefix.to_string()
        } else {
            format!("{endpoint_prefix}/")
        };

        let endpoint_prefix = Url::parse(&normalized)
            .map_err(|e| GatewayError::Config(format!("{endpoint_prefix:?} is not a valid URL: {e}")))?;
        if endpoint_prefix.cannot_be_a_base() {
            return Err(GatewayError::Config(format!(
                "{endpoint_prefix} can't be used as an API root"
            )));
        }

        Ok(Self { endpoint_prefix })
    }

    /// Reads `GATEWAYBOS_API_URL`, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let raw = env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        debug!("Resolved {API_URL_VAR}={raw}");

        Self::new(&raw)
    }

    pub fn endpoint_for(&self, api: &str) -> Result<Url> {
        self.endpoint_prefix
            .join(api)
            .map_err(|e| GatewayError::Config(format!("Can't build endpoint for {api}: {e}")))
    }
}
