use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Customer, Identified};
use crate::date_codec::{format_date, parse_date};
use crate::error::Result;
use crate::gateway::Resource;

/// A booked FX trade.
///
/// Only [`SmartTradeWire`] is serializable: `value_date` has to go through the
/// date codec on its way to and from the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmartTrade {
    pub id: Option<String>,
    pub counter_party: Option<String>,
    pub currency_buy: Option<String>,
    pub currency_sell: Option<String>,
    pub rate: Option<f64>,
    pub amount: Option<Decimal>,
    pub contra_amount: Option<Decimal>,
    pub value_date: Option<NaiveDate>,
    pub transaction_id: Option<String>,
    pub direction: Option<String>,
    pub customer: Option<Customer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SmartTradeWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_party: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_buy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_sell: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub amount: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub contra_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

impl Identified for SmartTrade {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for SmartTrade {
    const ENTITY_NAME: &'static str = "SmartTrade";
    const RESOURCE_PATH: &'static str = "api/smart-trades";
    type Wire = SmartTradeWire;

    fn with_id(self, id: Option<String>) -> Self {
        Self { id, ..self }
    }

    fn to_wire(&self) -> SmartTradeWire {
        SmartTradeWire {
            id: self.id.clone(),
            counter_party: self.counter_party.clone(),
            currency_buy: self.currency_buy.clone(),
            currency_sell: self.currency_sell.clone(),
            rate: self.rate,
            amount: self.amount,
            contra_amount: self.contra_amount,
            value_date: format_date(self.value_date),
            transaction_id: self.transaction_id.clone(),
            direction: self.direction.clone(),
            customer: self.customer.clone(),
        }
    }

    fn from_wire(wire: SmartTradeWire) -> Result<Self> {
        Ok(Self {
            value_date: parse_date("valueDate", wire.value_date.as_deref())?,
            id: wire.id,
            counter_party: wire.counter_party,
            currency_buy: wire.currency_buy,
            currency_sell: wire.currency_sell,
            rate: wire.rate,
            amount: wire.amount,
            contra_amount: wire.contra_amount,
            transaction_id: wire.transaction_id,
            direction: wire.direction,
            customer: wire.customer,
        })
    }
}
