//! Product queries: category/stock grouping and price bands

use std::fmt;

use rust_decimal::Decimal;

use crate::config::PriceBands;
use crate::dataset::Dataset;
use crate::models::Product;

use super::grouping::group_by;

/// Products of one category split by stock availability
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStock<'a> {
    pub category: &'a str,
    pub stock_groups: Vec<StockGroup<'a>>,
}

/// Products sharing the same availability, cheapest first
#[derive(Debug, Clone, PartialEq)]
pub struct StockGroup<'a> {
    pub in_stock: bool,
    pub products: Vec<&'a Product>,
}

/// Group products by category, then by whether any units are in stock.
///
/// Categories and stock groups appear in first-occurrence order. Products in
/// a stock group are sorted ascending by unit price; equal prices keep
/// dataset order.
pub fn products_by_category_and_stock(dataset: &Dataset) -> Vec<CategoryStock<'_>> {
    group_by(dataset.products(), |p| p.category.as_str())
        .into_iter()
        .map(|category| CategoryStock {
            category: category.key,
            stock_groups: group_by(category.items, |p| p.in_stock())
                .into_iter()
                .map(|stock| {
                    let mut products = stock.items;
                    products.sort_by(|a, b| a.unit_price.cmp(&b.unit_price));
                    StockGroup {
                        in_stock: stock.key,
                        products,
                    }
                })
                .collect(),
        })
        .collect()
}

/// Price bucket of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceBand {
    Cheap,
    Average,
    Expensive,
}

impl PriceBand {
    /// Bucket `price` with closed lower and open upper boundaries.
    pub fn classify(price: Decimal, bands: &PriceBands) -> Self {
        if price < bands.cheap_below {
            PriceBand::Cheap
        } else if price < bands.expensive_from {
            PriceBand::Average
        } else {
            PriceBand::Expensive
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceBand::Cheap => "Cheap",
            PriceBand::Average => "Average price",
            PriceBand::Expensive => "Expensive",
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Products falling into one price band
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBandGroup<'a> {
    pub band: PriceBand,
    pub products: Vec<&'a Product>,
}

/// Bucket products by price. Bands appear in first-occurrence order and only
/// when at least one product falls into them.
pub fn products_by_price_band<'a>(
    dataset: &'a Dataset,
    bands: &PriceBands,
) -> Vec<PriceBandGroup<'a>> {
    group_by(dataset.products(), |p| PriceBand::classify(p.unit_price, bands))
        .into_iter()
        .map(|g| PriceBandGroup {
            band: g.key,
            products: g.items,
        })
        .collect()
}
