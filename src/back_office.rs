use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::gateway::Gateway;
use crate::model::{Currencies, Customer, SmartTrade, Wallet};

/// The four record gateways, wired to one API client.
#[derive(Debug, Clone)]
pub struct BackOffice {
    pub currencies: Gateway<Currencies>,
    pub customers: Gateway<Customer>,
    pub smart_trades: Gateway<SmartTrade>,
    pub wallets: Gateway<Wallet>,
}

impl BackOffice {
    pub fn new(client: ApiClient) -> Result<Self> {
        Ok(Self {
            currencies: Gateway::new(client.clone())?,
            customers: Gateway::new(client.clone())?,
            smart_trades: Gateway::new(client.clone())?,
            wallets: Gateway::new(client)?,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ApiClient::new(ApiConfig::from_env()?)?)
    }
}
