//! Order operations.
//!
//! Cart-line deltas, status+paid, and the delivery address are three
//! independent submissions against the same order; none of them returns the
//! updated order, so every success hands back [`Stale`] and the caller
//! re-fetches.

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use orderdesk_core::cart::CartLine;
use orderdesk_core::order::{Address, Order};
use orderdesk_core::order_edit::CartLineDeltas;
use orderdesk_core::status::OrderStatus;
use orderdesk_core::types::{CustomerId, OrderId};

use super::GatewayClient;
use super::types::{Envelope, Page};
use crate::{GatewayError, Stale};

/// Payload for creating an order: the initial cart, where it goes, and a
/// free-form comment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub cart_line_dtos: Vec<CartLine>,
    pub address: Address,
    pub comment: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusUpdate {
    status: u8,
    is_paid: bool,
}

#[derive(Debug, Serialize)]
struct AddressUpdate<'a> {
    address: &'a Address,
}

impl GatewayClient {
    /// Fetch all orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self))]
    pub async fn fetch_orders(&self) -> Result<Vec<Order>, GatewayError> {
        let envelope: Envelope<Page<Order>> = self
            .get_json("/orders", &[("Page", "1"), ("PageSize", "10000")])
            .await?;
        Ok(envelope.into_result().into_items("order"))
    }

    /// Create an order for a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self, order), fields(customer_id = %customer_id))]
    pub async fn create_order(
        &self,
        customer_id: CustomerId,
        order: &NewOrder,
    ) -> Result<Stale, GatewayError> {
        self.submit_json(Method::POST, &format!("/customer/{customer_id}/order"), order)
            .await
    }

    /// Submit staged cart-line deltas.
    ///
    /// Both delta sets are applied server-side; how the server resolves an
    /// add and a remove of the same product is its business, not ours.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self, deltas), fields(order_id = %order_id))]
    pub async fn update_order_cart_lines(
        &self,
        customer_id: CustomerId,
        order_id: OrderId,
        deltas: &CartLineDeltas,
    ) -> Result<Stale, GatewayError> {
        self.submit_json(
            Method::PUT,
            &format!("/customer/{customer_id}/order/{order_id}/cartlines"),
            deltas,
        )
        .await
    }

    /// Set an order's status and paid flag in one submission.
    ///
    /// Any status may replace any other; nothing is rejected client-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self), fields(order_id = %order_id, status = %status, is_paid))]
    pub async fn update_order_status(
        &self,
        customer_id: CustomerId,
        order_id: OrderId,
        status: OrderStatus,
        is_paid: bool,
    ) -> Result<Stale, GatewayError> {
        self.submit_json(
            Method::PUT,
            &format!("/customer/{customer_id}/order/{order_id}/status"),
            &StatusUpdate {
                status: status.wire_code(),
                is_paid,
            },
        )
        .await
    }

    /// Replace an order's delivery address.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self, address), fields(order_id = %order_id))]
    pub async fn update_order_address(
        &self,
        customer_id: CustomerId,
        order_id: OrderId,
        address: &Address,
    ) -> Result<Stale, GatewayError> {
        self.submit_json(
            Method::PUT,
            &format!("/customer/{customer_id}/order/{order_id}/address"),
            &AddressUpdate { address },
        )
        .await
    }

    /// Hard-delete an order. Irreversible.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn delete_order(
        &self,
        customer_id: CustomerId,
        order_id: OrderId,
    ) -> Result<Stale, GatewayError> {
        self.delete(&format!("/customer/{customer_id}/order/{order_id}/hard"))
            .await
    }
}
