//! Per-city and per-customer order statistics

use rust_decimal::Decimal;

use crate::dataset::Dataset;
use crate::models::Customer;

use super::grouping::{count_by, group_by};

/// Average activity of the customers in one city
#[derive(Debug, Clone, PartialEq)]
pub struct CityStatistics<'a> {
    pub city: &'a str,
    /// Mean number of orders per customer
    pub intensity: f64,
    /// Mean order total per customer
    pub average_income: Decimal,
}

/// Group customers by city and average their order counts and totals.
///
/// Customers without orders count as 0 in both averages. Cities appear in
/// first-occurrence order.
pub fn city_statistics(dataset: &Dataset) -> Vec<CityStatistics<'_>> {
    group_by(dataset.customers(), |c| c.city.as_str())
        .into_iter()
        .map(|group| {
            let customers = group.items.len();
            let order_count: usize = group.items.iter().map(|c| c.order_count()).sum();
            let income: Decimal = group.items.iter().map(|c| c.total_sum()).sum();

            CityStatistics {
                city: group.key,
                intensity: mean_count(order_count, customers),
                average_income: mean_decimal(income, customers),
            }
        })
        .collect()
}

fn mean_count(total: usize, n: usize) -> f64 {
    if n == 0 {
        0.0
    } else {
        total as f64 / n as f64
    }
}

fn mean_decimal(total: Decimal, n: usize) -> Decimal {
    if n == 0 {
        Decimal::ZERO
    } else {
        total / Decimal::from(n)
    }
}

/// Order counts of one customer broken down three ways
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerActivity<'a> {
    pub customer_id: &'a str,
    /// `(month, orders)` in first-occurrence order
    pub by_month: Vec<(u32, usize)>,
    /// `(year, orders)` in first-occurrence order
    pub by_year: Vec<(i32, usize)>,
    /// `((year, month), orders)` in first-occurrence order
    pub by_year_month: Vec<((i32, u32), usize)>,
}

impl<'a> CustomerActivity<'a> {
    pub fn for_customer(customer: &'a Customer) -> Self {
        Self {
            customer_id: &customer.id,
            by_month: count_by(&customer.orders, |o| o.month()),
            by_year: count_by(&customer.orders, |o| o.year()),
            by_year_month: count_by(&customer.orders, |o| (o.year(), o.month())),
        }
    }
}

/// Activity breakdown for every customer, including those without orders.
pub fn customer_activity(dataset: &Dataset) -> impl Iterator<Item = CustomerActivity<'_>> + '_ {
    dataset.customers().iter().map(CustomerActivity::for_customer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_nothing_is_zero() {
        assert_eq!(mean_count(0, 0), 0.0);
        assert_eq!(mean_decimal(Decimal::ZERO, 0), Decimal::ZERO);
    }

    #[test]
    fn test_mean_decimal() {
        assert_eq!(mean_decimal(Decimal::from(100), 2), Decimal::from(50));
    }
}
