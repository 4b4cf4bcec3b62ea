//! Query library
//!
//! Pure, read-only queries over a [`Dataset`](crate::dataset::Dataset). Rows
//! borrow from the dataset. Simple projections return iterators that can be
//! recreated by calling the query again; queries that group or sort
//! materialize their result.

pub mod customers;
pub mod grouping;
pub mod products;
pub mod statistics;
pub mod suppliers;

pub use customers::{
    CustomerTotal, FirstOrder, RankedFirstOrder, customers_with_incomplete_contact,
    customers_with_order_over, customers_with_total_over, first_order_dates,
    first_order_dates_ranked, has_incomplete_contact,
};
pub use grouping::{Group, JoinIndex, count_by, group_by, group_join};
pub use products::{
    CategoryStock, PriceBand, PriceBandGroup, StockGroup, products_by_category_and_stock,
    products_by_price_band,
};
pub use statistics::{CityStatistics, CustomerActivity, city_statistics, customer_activity};
pub use suppliers::{CustomerSuppliers, suppliers_by_location_grouped, suppliers_by_location_nested};
