//! Supplier model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub city: String,
    pub country: String,
}

impl Supplier {
    pub fn new(name: impl Into<String>, city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            city: city.into(),
            country: country.into(),
        }
    }

    /// The `(city, country)` pair suppliers share with customers.
    pub fn location(&self) -> (&str, &str) {
        (&self.city, &self.country)
    }
}
