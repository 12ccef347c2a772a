use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Customer, Identified};
use crate::error::Result;
use crate::gateway::Resource;

/// A customer's balance in one currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Wallet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

impl Identified for Wallet {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for Wallet {
    const ENTITY_NAME: &'static str = "Wallet";
    const RESOURCE_PATH: &'static str = "api/wallets";
    type Wire = Self;

    fn with_id(self, id: Option<String>) -> Self {
        Self { id, ..self }
    }

    fn to_wire(&self) -> Self::Wire {
        self.clone()
    }

    fn from_wire(wire: Self::Wire) -> Result<Self> {
        Ok(wire)
    }
}
