//! Product model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub category: String,
    pub unit_price: Decimal,
    pub units_in_stock: i32,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: Decimal,
        units_in_stock: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            unit_price,
            units_in_stock,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.units_in_stock > 0
    }
}
