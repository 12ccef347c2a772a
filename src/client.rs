use reqwest::Client;

use crate::config::ApiConfig;
use crate::error::Result;

const USER_AGENT: &str = concat!("gatewaybos/", env!("CARGO_PKG_VERSION"));

/// HTTP client plus the resolved API root, shared by every gateway.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_http_client(http, config))
    }

    /// Uses a caller-configured client, e.g. one with auth headers or a proxy.
    pub fn with_http_client(http: Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}
