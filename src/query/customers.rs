//! Customer-centric queries: order totals, large orders, first order dates
//! and incomplete contact data.

use std::cmp::Ordering;

use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::dataset::Dataset;
use crate::models::Customer;

static NON_DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// A customer with the sum of all its order totals
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerTotal<'a> {
    pub customer_id: &'a str,
    pub total_sum: Decimal,
}

/// Month and year of a customer's earliest order
#[derive(Debug, Clone, PartialEq)]
pub struct FirstOrder<'a> {
    pub customer_id: &'a str,
    pub month: u32,
    pub year: i32,
}

/// First order month and year plus the customer's order total
#[derive(Debug, Clone, PartialEq)]
pub struct RankedFirstOrder<'a> {
    pub customer_id: &'a str,
    pub month: u32,
    pub year: i32,
    pub total_sum: Decimal,
}

impl RankedFirstOrder<'_> {
    /// Descending order on year, month, total and id, in that priority.
    pub fn cmp_descending(&self, other: &Self) -> Ordering {
        other
            .year
            .cmp(&self.year)
            .then_with(|| other.month.cmp(&self.month))
            .then_with(|| other.total_sum.cmp(&self.total_sum))
            .then_with(|| other.customer_id.cmp(self.customer_id))
    }
}

/// Customers whose order totals add up to more than `threshold`.
pub fn customers_with_total_over(
    dataset: &Dataset,
    threshold: Decimal,
) -> impl Iterator<Item = CustomerTotal<'_>> + '_ {
    dataset.customers().iter().filter_map(move |c| {
        let total_sum = c.total_sum();
        (total_sum > threshold).then_some(CustomerTotal {
            customer_id: &c.id,
            total_sum,
        })
    })
}

/// Customers with at least one single order above `threshold`.
pub fn customers_with_order_over(
    dataset: &Dataset,
    threshold: Decimal,
) -> impl Iterator<Item = &Customer> + '_ {
    dataset
        .customers()
        .iter()
        .filter(move |c| c.orders.iter().any(|o| o.total > threshold))
}

/// Earliest order month/year for every customer that has ordered.
pub fn first_order_dates(dataset: &Dataset) -> impl Iterator<Item = FirstOrder<'_>> + '_ {
    dataset.customers().iter().filter_map(|c| {
        let first = c.first_order_date()?;
        Some(FirstOrder {
            customer_id: &c.id,
            month: first.month(),
            year: first.year(),
        })
    })
}

/// Like [`first_order_dates`] with order totals, newest first.
///
/// Rows are sorted descending by year, then month, then total, then customer
/// id. The sort is stable, so rows equal on all four keys keep dataset order.
pub fn first_order_dates_ranked(dataset: &Dataset) -> Vec<RankedFirstOrder<'_>> {
    let mut rows: Vec<RankedFirstOrder<'_>> = dataset
        .customers()
        .iter()
        .filter_map(|c| {
            let first = c.first_order_date()?;
            Some(RankedFirstOrder {
                customer_id: &c.id,
                month: first.month(),
                year: first.year(),
                total_sum: c.total_sum(),
            })
        })
        .collect();

    rows.sort_by(RankedFirstOrder::cmp_descending);
    rows
}

/// Customers whose contact data looks incomplete.
///
/// A customer matches when any of these holds:
/// - the postal code is present and contains a non-digit character
/// - the region is missing or blank
/// - the phone number does not start with `(` (an empty phone matches too)
pub fn customers_with_incomplete_contact(
    dataset: &Dataset,
) -> impl Iterator<Item = &Customer> + '_ {
    dataset
        .customers()
        .iter()
        .filter(|c| has_incomplete_contact(c))
}

pub fn has_incomplete_contact(customer: &Customer) -> bool {
    let postal_not_numeric = customer
        .postal_code
        .as_deref()
        .is_some_and(|code| NON_DIGIT_REGEX.is_match(code));
    let region_missing = customer
        .region
        .as_deref()
        .is_none_or(|region| region.trim().is_empty());
    let no_operator_code = !customer.phone.starts_with('(');

    postal_not_numeric || region_missing || no_operator_code
}
