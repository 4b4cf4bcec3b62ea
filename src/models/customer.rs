//! Customer model
//!
//! A customer owns its orders. Customers relate to suppliers only through the
//! `(city, country)` value pair, never through a stored reference.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::order::Order;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub country: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Customer {
    /// Create a customer with no optional contact data and no orders
    pub fn new(id: impl Into<String>, city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            company_name: String::new(),
            address: None,
            city: city.into(),
            region: None,
            postal_code: None,
            country: country.into(),
            phone: String::new(),
            fax: None,
            orders: Vec::new(),
        }
    }

    pub fn with_company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = name.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    /// Sum of all order totals, zero when the customer has no orders
    pub fn total_sum(&self) -> Decimal {
        self.orders.iter().map(|o| o.total).sum()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn has_orders(&self) -> bool {
        !self.orders.is_empty()
    }

    /// Date of the earliest order, if any
    pub fn first_order_date(&self) -> Option<NaiveDate> {
        self.orders.iter().map(|o| o.order_date).min()
    }

    /// The `(city, country)` pair used to correlate with suppliers.
    pub fn location(&self) -> (&str, &str) {
        (&self.city, &self.country)
    }
}

/// Full single-line dump used by the exercises that list whole customers.
impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CustomerId: {} CompanyName: {} City: {} Region: {} PostalCode: {} Country: {} Phone: {} Orders: {}",
            self.id,
            self.company_name,
            self.city,
            self.region.as_deref().unwrap_or_default(),
            self.postal_code.as_deref().unwrap_or_default(),
            self.country,
            self.phone,
            self.orders.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: u32, date: (i32, u32, u32), total: i64) -> Order {
        Order::new(
            id,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            Decimal::from(total),
        )
    }

    #[test]
    fn test_total_sum_without_orders_is_zero() {
        let customer = Customer::new("EMPTY", "Berlin", "Germany");
        assert_eq!(customer.total_sum(), Decimal::ZERO);
        assert!(customer.first_order_date().is_none());
        assert!(!customer.has_orders());
    }

    #[test]
    fn test_first_order_date_ignores_input_order() {
        let customer = Customer::new("ALFKI", "Berlin", "Germany").with_orders(vec![
            order(2, (2023, 3, 10), 2000),
            order(1, (2023, 1, 5), 4000),
        ]);
        assert_eq!(
            customer.first_order_date(),
            NaiveDate::from_ymd_opt(2023, 1, 5)
        );
        assert_eq!(customer.total_sum(), Decimal::from(6000));
    }

    #[test]
    fn test_display_renders_missing_fields_empty() {
        let customer = Customer::new("ALFKI", "Berlin", "Germany")
            .with_company_name("Alfreds Futterkiste")
            .with_phone("030-0074321");
        assert_eq!(
            customer.to_string(),
            "CustomerId: ALFKI CompanyName: Alfreds Futterkiste City: Berlin Region:  PostalCode:  Country: Germany Phone: 030-0074321 Orders: 0"
        );
    }
}
