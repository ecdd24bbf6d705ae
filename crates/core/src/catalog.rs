//! Catalog entities: products, their physical dimensions, and categories.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::quantity::StockCounters;
use crate::types::{CategoryId, ProductId};

/// Physical dimensions of a product, in the warehouse's units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// A catalog product as the system of record returns it.
///
/// Mutations go through the per-section gateway endpoints (main info,
/// dimensions, prices, quantities); this struct is never written back
/// wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub title: String,
    pub description: String,
    /// Sale price. Prices travel as JSON numbers, hence the float codec.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cost_price: Decimal,
    pub dimensions: Dimensions,
    /// Weight in kilograms. The wire key is misspelled on the server side
    /// and has to stay that way.
    #[serde(rename = "weigth")]
    pub weight: f64,
    /// The three stock counters, flattened into the product object on the
    /// wire.
    #[serde(flatten)]
    pub stock: StockCounters,
    pub category_id: CategoryId,
}

impl Product {
    /// Units that can still be sold; see [`StockCounters::available_for_sale`].
    #[must_use]
    pub const fn available_for_sale(&self) -> i64 {
        self.stock.available_for_sale()
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new(Uuid::new_v4()),
            sku: "SKU-1".to_string(),
            title: "Shelf bracket".to_string(),
            description: String::new(),
            price: Decimal::new(1999, 2),
            cost_price: Decimal::new(700, 2),
            dimensions: Dimensions {
                width: 10.0,
                height: 5.0,
                depth: 2.5,
            },
            weight: 0.4,
            stock: StockCounters::new(100, 20, 10),
            category_id: CategoryId::new(Uuid::new_v4()),
        }
    }

    #[test]
    fn test_available_for_sale_derives_from_counters() {
        assert_eq!(sample_product().available_for_sale(), 70);
    }

    #[test]
    fn test_counters_flatten_onto_product() {
        let json = serde_json::to_value(sample_product()).expect("serialize");
        assert_eq!(json["actualQuantity"], 100);
        assert_eq!(json["reservedQuantity"], 20);
        assert_eq!(json["quantityForShipping"], 10);
        // The misspelled wire key is load-bearing.
        assert_eq!(json["weigth"], 0.4);
        assert!(json.get("weight").is_none());
        assert!(json.get("stock").is_none());
    }

    #[test]
    fn test_product_roundtrip() {
        let product = sample_product();
        let json = serde_json::to_string(&product).expect("serialize");
        let back: Product = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, product);
    }
}
