//! The ten report exercises
//!
//! Each function runs one query with its configured parameters and writes the
//! report to the sink, including any headers and separators around the rows.

use tracing::debug;

use crate::config::ReportConfig;
use crate::dataset::Dataset;
use crate::query::{
    city_statistics, customer_activity, customers_with_incomplete_contact,
    customers_with_order_over, customers_with_total_over, first_order_dates,
    first_order_dates_ranked, products_by_category_and_stock, products_by_price_band,
    suppliers_by_location_grouped, suppliers_by_location_nested,
};
use crate::report::{ReportSink, render_all};

const SHORT_SEPARATOR: &str = "_____________________________________";
const LONG_SEPARATOR: &str = "__________________________________________________________";

/// Customers with total orders greater than x, for a growing x.
pub fn customer_totals(dataset: &Dataset, config: &ReportConfig, sink: &mut dyn ReportSink) {
    for threshold in config.total_thresholds() {
        sink.write_line(SHORT_SEPARATOR);
        sink.write_line(&format!("More than: {}", threshold));
        let rows = render_all(customers_with_total_over(dataset, threshold), sink);
        debug!(%threshold, rows, "Customer totals reported");
    }
}

/// Suppliers in the same city and country as each customer.
pub fn customer_suppliers(dataset: &Dataset, _config: &ReportConfig, sink: &mut dyn ReportSink) {
    sink.write_line(LONG_SEPARATOR);
    sink.write_line("With  group:");
    render_all(suppliers_by_location_grouped(dataset), sink);

    sink.write_line(LONG_SEPARATOR);
    sink.write_line("Without group");
    render_all(suppliers_by_location_nested(dataset), sink);
}

/// Customers with at least one order above the order threshold.
pub fn large_order_customers(dataset: &Dataset, config: &ReportConfig, sink: &mut dyn ReportSink) {
    sink.write_line("Customers: ");
    render_all(customers_with_order_over(dataset, config.order_threshold), sink);
}

/// Month and year each customer first ordered.
pub fn first_orders(dataset: &Dataset, _config: &ReportConfig, sink: &mut dyn ReportSink) {
    render_all(first_order_dates(dataset), sink);
}

/// First order month/year with totals, newest first.
pub fn ranked_first_orders(dataset: &Dataset, _config: &ReportConfig, sink: &mut dyn ReportSink) {
    render_all(first_order_dates_ranked(dataset), sink);
}

/// Customers with a non-numeric postal code, no region or no operator code.
pub fn incomplete_contacts(dataset: &Dataset, _config: &ReportConfig, sink: &mut dyn ReportSink) {
    render_all(customers_with_incomplete_contact(dataset), sink);
}

/// Products by category and stock availability.
pub fn products_by_category(dataset: &Dataset, _config: &ReportConfig, sink: &mut dyn ReportSink) {
    render_all(products_by_category_and_stock(dataset), sink);
}

/// Products by price band.
pub fn products_by_price(dataset: &Dataset, config: &ReportConfig, sink: &mut dyn ReportSink) {
    render_all(products_by_price_band(dataset, &config.price_bands), sink);
}

/// Average order count and income per city.
pub fn city_averages(dataset: &Dataset, _config: &ReportConfig, sink: &mut dyn ReportSink) {
    render_all(city_statistics(dataset), sink);
}

/// Order counts per customer by month, year and year/month.
pub fn activity_statistics(dataset: &Dataset, _config: &ReportConfig, sink: &mut dyn ReportSink) {
    render_all(customer_activity(dataset), sink);
}
