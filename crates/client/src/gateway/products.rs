//! Catalog operations: products and categories.
//!
//! Product mutations are per-section partial replaces (main info,
//! dimensions, prices, quantities) with no cross-field transaction; a failed
//! section leaves the others untouched and the operator retries just that
//! one.

use reqwest::Method;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use orderdesk_core::catalog::{Category, Dimensions, Product};
use orderdesk_core::quantity::StockCounters;
use orderdesk_core::types::{CategoryId, ProductId};

use super::GatewayClient;
use super::types::{Envelope, Page};
use crate::{GatewayError, Stale};

/// Payload of the main-info section: identity and pricing text fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainInfoUpdate {
    pub sku: String,
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cost_price: Decimal,
}

/// Payload of the dimensions section.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionsUpdate {
    #[serde(flatten)]
    pub dimensions: Dimensions,
    /// Misspelled wire key, faithfully.
    #[serde(rename = "weigth")]
    pub weight: f64,
}

/// Payload of the prices section.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdate {
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cost_price: Decimal,
}

/// Payload for catalog admission of a new product: every section at once.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub sku: String,
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cost_price: Decimal,
    #[serde(flatten)]
    pub dimensions: Dimensions,
    #[serde(rename = "weigth")]
    pub weight: f64,
    #[serde(flatten)]
    pub stock: StockCounters,
}

/// Payload for creating a category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

impl GatewayClient {
    /// Fetch the whole product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, GatewayError> {
        let envelope: Envelope<Page<Product>> = self
            .get_json("/product", &[("Page", "1"), ("PageSize", "10000")])
            .await?;
        Ok(envelope.into_result().into_items("product"))
    }

    /// Fetch all categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self))]
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, GatewayError> {
        let envelope: Envelope<Option<Vec<Category>>> =
            self.get_json("/category/all", &[]).await?;
        Ok(envelope.into_result().unwrap_or_default())
    }

    /// Admit a new product to the catalog under a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self, product), fields(category_id = %category_id, sku = %product.sku))]
    pub async fn create_product(
        &self,
        category_id: CategoryId,
        product: &NewProduct,
    ) -> Result<Stale, GatewayError> {
        self.submit_json(
            Method::POST,
            &format!("/category/{category_id}/product"),
            product,
        )
        .await
    }

    /// Create a new category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self, category), fields(name = %category.name))]
    pub async fn create_category(&self, category: &NewCategory) -> Result<Stale, GatewayError> {
        self.submit_json(Method::POST, "/category", category).await
    }

    /// Replace a product's main-info section.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self, update), fields(product_id = %product_id))]
    pub async fn update_product_main_info(
        &self,
        category_id: CategoryId,
        product_id: ProductId,
        update: &MainInfoUpdate,
    ) -> Result<Stale, GatewayError> {
        self.submit_json(
            Method::PUT,
            &format!("/category/{category_id}/product/{product_id}/main-info"),
            update,
        )
        .await
    }

    /// Replace a product's dimensions section.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self, update), fields(product_id = %product_id))]
    pub async fn update_product_dimensions(
        &self,
        category_id: CategoryId,
        product_id: ProductId,
        update: &DimensionsUpdate,
    ) -> Result<Stale, GatewayError> {
        self.submit_json(
            Method::PUT,
            &format!("/category/{category_id}/product/{product_id}/dimensions"),
            update,
        )
        .await
    }

    /// Replace a product's prices section.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self, update), fields(product_id = %product_id))]
    pub async fn update_product_prices(
        &self,
        category_id: CategoryId,
        product_id: ProductId,
        update: &PriceUpdate,
    ) -> Result<Stale, GatewayError> {
        self.submit_json(
            Method::PUT,
            &format!("/category/{category_id}/product/{product_id}/prices"),
            update,
        )
        .await
    }

    /// Replace all three stock counters at once.
    ///
    /// The whole call fails if the remote rejects any field; there is no
    /// partial counter update. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn update_product_quantities(
        &self,
        category_id: CategoryId,
        product_id: ProductId,
        counters: &StockCounters,
    ) -> Result<Stale, GatewayError> {
        self.submit_json(
            Method::PUT,
            &format!("/category/{category_id}/product/{product_id}/quantity"),
            counters,
        )
        .await
    }

    /// Hard-delete a product. Irreversible; there is no soft-delete state.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn delete_product(
        &self,
        category_id: CategoryId,
        product_id: ProductId,
    ) -> Result<Stale, GatewayError> {
        self.delete(&format!("/category/{category_id}/product/{product_id}/hard"))
            .await
    }
}
