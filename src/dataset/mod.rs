//! Read-only reporting dataset
//!
//! The dataset is created once, validated, and then only ever borrowed. The
//! default source is a JSON document compiled into the binary; a JSON or YAML
//! file can be supplied instead.

mod error;

pub use error::{DatasetError, DatasetResult};

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{Customer, Order, Product, Supplier};

const BUNDLED_DATA: &str = include_str!("../../data/northwind.json");

/// Customers (with their orders), products and suppliers
///
/// Deserializing goes through [`Dataset::validate`], so every `Dataset`
/// value satisfies the load-time preconditions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    customers: Vec<Customer>,
    products: Vec<Product>,
    suppliers: Vec<Supplier>,
}

/// Wire shape of a dataset document, before validation
#[derive(Deserialize)]
struct RawDataset {
    #[serde(default)]
    customers: Vec<Customer>,
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    suppliers: Vec<Supplier>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = DatasetError;

    fn try_from(raw: RawDataset) -> DatasetResult<Self> {
        Self::new(raw.customers, raw.products, raw.suppliers)
    }
}

impl Dataset {
    /// Build a dataset from already constructed records.
    pub fn new(
        customers: Vec<Customer>,
        products: Vec<Product>,
        suppliers: Vec<Supplier>,
    ) -> DatasetResult<Self> {
        let dataset = Self {
            customers,
            products,
            suppliers,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load the dataset bundled with the crate.
    pub fn bundled() -> DatasetResult<Self> {
        let dataset = Self::from_json_str(BUNDLED_DATA)?;
        info!(
            customers = dataset.customers.len(),
            orders = dataset.order_count(),
            products = dataset.products.len(),
            suppliers = dataset.suppliers.len(),
            "Loaded bundled dataset"
        );
        Ok(dataset)
    }

    /// Parse a dataset from a JSON document.
    pub fn from_json_str(json: &str) -> DatasetResult<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Parse a dataset from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> DatasetResult<Self> {
        let raw: RawDataset = serde_yaml::from_str(yaml)?;
        Self::try_from(raw)
    }

    /// Load a dataset file, picking the parser from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parse: fn(&str) -> DatasetResult<Self> = match extension.as_str() {
            "json" => Self::from_json_str,
            "yaml" | "yml" => Self::from_yaml_str,
            other => return Err(DatasetError::UnsupportedFormat(other.to_string())),
        };

        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = parse(&content)?;

        info!(
            path = %path.display(),
            customers = dataset.customers.len(),
            orders = dataset.order_count(),
            products = dataset.products.len(),
            suppliers = dataset.suppliers.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Check the load-time preconditions every query relies on.
    pub fn validate(&self) -> DatasetResult<()> {
        let mut seen = HashSet::new();
        for customer in &self.customers {
            if customer.id.trim().is_empty() {
                return Err(DatasetError::Invalid("customer with empty id".to_string()));
            }
            if !seen.insert(customer.id.as_str()) {
                return Err(DatasetError::Invalid(format!(
                    "duplicate customer id '{}'",
                    customer.id
                )));
            }
            if let Some(order) = customer.orders.iter().find(|o| o.total < Decimal::ZERO) {
                return Err(DatasetError::Invalid(format!(
                    "order {} of customer '{}' has negative total {}",
                    order.id, customer.id, order.total
                )));
            }
        }

        for product in &self.products {
            if product.unit_price < Decimal::ZERO {
                return Err(DatasetError::Invalid(format!(
                    "product '{}' has negative unit price {}",
                    product.name, product.unit_price
                )));
            }
            if product.units_in_stock < 0 {
                return Err(DatasetError::Invalid(format!(
                    "product '{}' has negative stock {}",
                    product.name, product.units_in_stock
                )));
            }
        }

        debug!(
            customers = self.customers.len(),
            products = self.products.len(),
            suppliers = self.suppliers.len(),
            "Dataset validated"
        );
        Ok(())
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Every order, in customer order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.customers.iter().flat_map(|c| c.orders.iter())
    }

    pub fn order_count(&self) -> usize {
        self.customers.iter().map(Customer::order_count).sum()
    }

    /// Look a customer up by id.
    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }
}
