//! Order model

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(default)]
    pub id: u32,
    pub order_date: NaiveDate,
    pub total: Decimal,
}

impl Order {
    pub fn new(id: u32, order_date: NaiveDate, total: Decimal) -> Self {
        Self {
            id,
            order_date,
            total,
        }
    }

    pub fn year(&self) -> i32 {
        self.order_date.year()
    }

    pub fn month(&self) -> u32 {
        self.order_date.month()
    }
}
