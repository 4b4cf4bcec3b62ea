//! Customer to supplier matching on shared `(city, country)`
//!
//! Two formulations of the same relation: a nested scan over all suppliers
//! for each customer, and a group join that indexes suppliers by location
//! once. Both keep customers in dataset order and suppliers in dataset order.

use crate::dataset::Dataset;
use crate::models::{Customer, Supplier};

use super::grouping::group_join;

/// A customer with every supplier located in the same city and country
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSuppliers<'a> {
    pub customer: &'a Customer,
    pub suppliers: Vec<&'a Supplier>,
}

impl<'a> CustomerSuppliers<'a> {
    pub fn supplier_names(&self) -> Vec<&'a str> {
        self.suppliers.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Nested-filter formulation: scans the supplier list once per customer.
pub fn suppliers_by_location_nested(
    dataset: &Dataset,
) -> impl Iterator<Item = CustomerSuppliers<'_>> + '_ {
    dataset.customers().iter().map(move |customer| CustomerSuppliers {
        customer,
        suppliers: dataset
            .suppliers()
            .iter()
            .filter(|s| s.city == customer.city && s.country == customer.country)
            .collect(),
    })
}

/// Group-join formulation: suppliers are indexed by location up front.
pub fn suppliers_by_location_grouped(
    dataset: &Dataset,
) -> impl Iterator<Item = CustomerSuppliers<'_>> + '_ {
    group_join(
        dataset.customers(),
        dataset.suppliers(),
        Customer::location,
        Supplier::location,
    )
    .map(|(customer, suppliers)| CustomerSuppliers {
        customer,
        suppliers,
    })
}
