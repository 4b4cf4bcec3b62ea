//! Models module
//!
//! Record types making up the reporting dataset. All records are plain data:
//! they are deserialized once when the dataset loads and never mutated.

pub mod customer;
pub mod order;
pub mod product;
pub mod supplier;

pub use customer::Customer;
pub use order::Order;
pub use product::Product;
pub use supplier::Supplier;
