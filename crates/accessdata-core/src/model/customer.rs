use serde::{Deserialize, Serialize};

use super::ids::CustomerId;

/// Customer - a person with a first and last name
///
/// Created in memory without an id; storage assigns the id on first save and
/// it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    /// Storage-assigned identity (None until persisted)
    pub id: Option<CustomerId>,

    pub first_name: String,

    pub last_name: String,
}

impl Customer {
    /// Create an unsaved customer
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Rebuild a persisted customer from a storage row
    pub fn with_id(id: CustomerId, first_name: String, last_name: String) -> Self {
        Self {
            id: Some(id),
            first_name,
            last_name,
        }
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "Customer[id={}", id)?,
            None => write!(f, "Customer[id=null")?,
        }
        write!(
            f,
            ", firstName='{}', lastName='{}']",
            self.first_name, self.last_name
        )
    }
}
