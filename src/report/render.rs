//! Text rendering of query rows
//!
//! Single-line rows implement `Display`; every row implements [`Render`],
//! which writes its line or lines to a sink.

use std::fmt;

use crate::models::Customer;
use crate::query::{
    CategoryStock, CityStatistics, CustomerActivity, CustomerSuppliers, CustomerTotal, FirstOrder,
    PriceBandGroup, RankedFirstOrder,
};

use super::sink::ReportSink;

/// Something that can write itself to a report
pub trait Render {
    fn render(&self, sink: &mut dyn ReportSink);
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, sink: &mut dyn ReportSink) {
        (**self).render(sink);
    }
}

macro_rules! render_as_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self, sink: &mut dyn ReportSink) {
                    sink.write_line(&self.to_string());
                }
            }
        )*
    };
}

render_as_display!(
    Customer,
    CustomerTotal<'_>,
    CustomerSuppliers<'_>,
    FirstOrder<'_>,
    RankedFirstOrder<'_>,
);

impl fmt::Display for CustomerTotal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CustomerId = {} TotalSum = {}",
            self.customer_id, self.total_sum
        )
    }
}

impl fmt::Display for CustomerSuppliers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CustomerId: {} List of suppliers: {}",
            self.customer.id,
            self.supplier_names().join(", ")
        )
    }
}

impl fmt::Display for FirstOrder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CustomerId: {} Month: {} Year: {}",
            self.customer_id, self.month, self.year
        )
    }
}

impl fmt::Display for RankedFirstOrder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CustomerId: {} TotalSum: {} Month:{} Year: {}",
            self.customer_id, self.total_sum, self.month, self.year
        )
    }
}

impl Render for CategoryStock<'_> {
    fn render(&self, sink: &mut dyn ReportSink) {
        sink.write_line(&format!("Category: {}", self.category));
        for group in &self.stock_groups {
            let flag = if group.in_stock { "True" } else { "False" };
            sink.write_line(&format!("\tHas in stock: {}", flag));
            for product in &group.products {
                sink.write_line(&format!(
                    "\t\tProduct: {} Price: {}",
                    product.name, product.unit_price
                ));
            }
        }
    }
}

impl Render for PriceBandGroup<'_> {
    fn render(&self, sink: &mut dyn ReportSink) {
        sink.write_line(&format!("{}:", self.band));
        for product in &self.products {
            sink.write_line(&format!(
                "\tProduct: {} Price: {}",
                product.name, product.unit_price
            ));
        }
    }
}

impl Render for CityStatistics<'_> {
    fn render(&self, sink: &mut dyn ReportSink) {
        sink.write_line(&format!("City: {}", self.city));
        sink.write_line(&format!("\tIntensity: {}", self.intensity));
        sink.write_line(&format!("\tAverage Income: {}", self.average_income));
    }
}

impl Render for CustomerActivity<'_> {
    fn render(&self, sink: &mut dyn ReportSink) {
        sink.write_line(&format!("CustomerId: {}", self.customer_id));

        sink.write_line("\tMonths statistic:");
        for (month, count) in &self.by_month {
            sink.write_line(&format!("\t\tMonth: {} Orders count: {}", month, count));
        }

        sink.write_line("\tYears statistic:");
        for (year, count) in &self.by_year {
            sink.write_line(&format!("\t\tYear: {} Orders count: {}", year, count));
        }

        sink.write_line("\tYear and month statistic:");
        for ((year, month), count) in &self.by_year_month {
            sink.write_line(&format!(
                "\t\tYear: {} Month: {} Orders count: {}",
                year, month, count
            ));
        }
    }
}

/// Render every row of `rows` in order, returning how many rows were written.
pub fn render_all<I>(rows: I, sink: &mut dyn ReportSink) -> usize
where
    I: IntoIterator,
    I::Item: Render,
{
    let mut count = 0;
    for row in rows {
        row.render(sink);
        count += 1;
    }
    count
}
