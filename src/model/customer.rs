use std::fmt;

use serde::{Deserialize, Serialize};

use super::Identified;
use crate::error::Result;
use crate::gateway::Resource;

/// Login account a customer may be linked to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_legal_entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_hash_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

// Records are logged at debug level, keep the password out of it.
impl fmt::Debug for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Customer")
            .field("id", &self.id)
            .field("customer_name", &self.customer_name)
            .field("customer_legal_entity", &self.customer_legal_entity)
            .field(
                "customer_password",
                &self.customer_password.as_ref().map(|_| "<redacted>"),
            )
            .field("customer_hash_code", &self.customer_hash_code)
            .field("user", &self.user)
            .finish()
    }
}

impl Identified for Customer {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for Customer {
    const ENTITY_NAME: &'static str = "Customer";
    const RESOURCE_PATH: &'static str = "api/customers";
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
