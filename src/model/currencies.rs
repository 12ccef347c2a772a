use serde::{Deserialize, Serialize};

use super::Identified;
use crate::error::Result;
use crate::gateway::Resource;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Currencies {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

impl Identified for Currencies {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for Currencies {
    const ENTITY_NAME: &'static str = "Currencies";
    const RESOURCE_PATH: &'static str = "api/currencies";
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
