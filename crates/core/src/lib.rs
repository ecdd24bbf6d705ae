//! Orderdesk Core - Domain model for the back office.
//!
//! This crate provides the inventory and order model shared by all Orderdesk
//! components:
//! - `client` - REST gateway to the system of record
//! - `cli` - Operator console
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients. Everything that talks to the remote catalog/order service lives
//! in `orderdesk-client`; this crate is what that service's payloads are made
//! of and where the staging rules live:
//!
//! - [`quantity`] - Stock counters and the two stock-edit submission modes
//! - [`cart`] - Cart line sets (one line per product, merge on add)
//! - [`order_edit`] - Staged add/remove deltas for an order edit session
//! - [`status`] - Order fulfillment statuses and their wire codes
//! - [`catalog`] / [`order`] - Product, Category, Order, Customer entities
//! - [`types`] - Newtype IDs and person names

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod order;
pub mod order_edit;
pub mod quantity;
pub mod status;
pub mod types;

pub use cart::{CartLine, CartLineSet};
pub use catalog::{Category, Dimensions, Product};
pub use order::{Address, Customer, Order, sort_newest_first};
pub use order_edit::{CartLineDeltas, OrderEditSession};
pub use quantity::{StockCounterForm, StockCounters, StockEdit, parse_quantity};
pub use status::{InvalidStatusCode, OrderStatus};
pub use types::*;
