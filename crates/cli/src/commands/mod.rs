//! Console command implementations.

pub mod catalog;
pub mod customers;
pub mod orders;

use orderdesk_client::GatewayError;
use orderdesk_core::status::InvalidStatusCode;
use orderdesk_core::types::{OrderId, ProductId};
use thiserror::Error;

/// Errors that can occur while running a console command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The gateway call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// No product with this ID in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// No order with this ID.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// The numeric status code was outside 1..=6.
    #[error(transparent)]
    InvalidStatus(#[from] InvalidStatusCode),

    /// A `<product-id>=<quantity>` argument did not parse.
    #[error("Invalid line spec {0:?}: expected <product-id>=<quantity>")]
    InvalidLineSpec(String),

    /// An irreversible delete was requested without `--yes`.
    #[error("Refusing to hard-delete without --yes")]
    NotConfirmed,
}

/// Split a `<product-id>=<quantity>` argument.
///
/// The quantity side keeps the form-field semantics: blank or garbage
/// coerces to `0`, which the staging call then suppresses.
pub(crate) fn parse_line_spec(spec: &str) -> Result<(ProductId, i64), CommandError> {
    let (id, quantity) = spec
        .split_once('=')
        .ok_or_else(|| CommandError::InvalidLineSpec(spec.to_string()))?;
    let product_id = id
        .trim()
        .parse()
        .map_err(|_| CommandError::InvalidLineSpec(spec.to_string()))?;
    Ok((product_id, orderdesk_core::parse_quantity(quantity)))
}
