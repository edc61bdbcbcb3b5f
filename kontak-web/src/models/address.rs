//! Address records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::parse_id;

/// Stored address
///
/// Addresses have no content uniqueness; the surrogate id is the only key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub id: Uuid,
    pub city: String,
    pub street: String,
    /// Neighbourhood unit (RT)
    pub block: String,
    /// Community unit (RW)
    pub sub_block: String,
    pub postal_code: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Submitted address form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AddressForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub block: String,
    #[serde(default)]
    pub sub_block: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub phone: String,
}

impl AddressForm {
    pub fn normalized(self) -> Self {
        Self {
            id: self.id.map(|id| id.trim().to_string()),
            city: self.city.trim().to_string(),
            street: self.street.trim().to_string(),
            block: self.block.trim().to_string(),
            sub_block: self.sub_block.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }

    pub fn own_id(&self) -> Option<Uuid> {
        self.id.as_deref().and_then(parse_id)
    }
}

impl From<&Address> for AddressForm {
    fn from(address: &Address) -> Self {
        Self {
            id: Some(address.id.to_string()),
            city: address.city.clone(),
            street: address.street.clone(),
            block: address.block.clone(),
            sub_block: address.sub_block.clone(),
            postal_code: address.postal_code.clone(),
            phone: address.phone.clone(),
        }
    }
}
