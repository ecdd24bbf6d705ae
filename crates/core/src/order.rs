//! Orders, delivery addresses, and customers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::status::OrderStatus;
use crate::types::{CustomerId, HumanName, OrderId};

/// A delivery address.
///
/// Either the structured fields are filled in, or everything lives in
/// `special_address_string` (a pickup point, a freight terminal, and so on).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub zip_code: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub street_name: String,
    pub street_number: String,
    pub apartment: String,
    /// Fallback shown when no structured street-level field is filled in.
    pub special_address_string: String,
}

impl Address {
    /// Whether any street-level structured field is filled in.
    ///
    /// Zip/country/state alone don't count; the original form treats them
    /// as decoration around the street-level fields.
    #[must_use]
    pub fn has_structured_fields(&self) -> bool {
        !(self.city.is_empty()
            && self.street_name.is_empty()
            && self.street_number.is_empty()
            && self.apartment.is_empty())
    }

    /// Single-line rendering: the structured fields joined with commas when
    /// any street-level field is present, otherwise the special string.
    #[must_use]
    pub fn display_line(&self) -> String {
        if !self.has_structured_fields() {
            return self.special_address_string.clone();
        }
        let apartment = if self.apartment.is_empty() {
            String::new()
        } else {
            format!("apt. {}", self.apartment)
        };
        [
            self.zip_code.as_str(),
            self.country.as_str(),
            self.state.as_str(),
            self.city.as_str(),
            self.street_name.as_str(),
            self.street_number.as_str(),
            apartment.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// A customer order.
///
/// `cart_lines` is the authoritative, server-confirmed composition at load
/// time. It never changes locally: edits are staged in an
/// [`OrderEditSession`](crate::order_edit::OrderEditSession) and the order is
/// re-fetched after the deltas are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub order_number: u64,
    pub customer_id: CustomerId,
    pub address: Address,
    pub comment: String,
    pub status: OrderStatus,
    pub is_paid: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub cart_lines: Vec<CartLine>,
    pub create_date_time: DateTime<Utc>,
}

impl Order {
    /// Whether the order belongs to the archived list view.
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        self.status.is_archived()
    }
}

/// A customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: HumanName,
    pub phone_number: String,
}

/// Sort orders the way the back-office list shows them: highest order number
/// first.
pub fn sort_newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.order_number.cmp(&a.order_number));
}
