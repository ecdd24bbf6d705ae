//! Order commands.

use orderdesk_client::{GatewayClient, NewOrder};
use orderdesk_core::cart::CartLineSet;
use orderdesk_core::order::{Address, Order, sort_newest_first};
use orderdesk_core::order_edit::OrderEditSession;
use orderdesk_core::status::OrderStatus;
use orderdesk_core::types::{CustomerId, OrderId, ProductId};

use super::{CommandError, parse_line_spec};

async fn find_order(client: &GatewayClient, order_id: OrderId) -> Result<Order, CommandError> {
    client
        .fetch_orders()
        .await?
        .into_iter()
        .find(|o| o.id == order_id)
        .ok_or(CommandError::OrderNotFound(order_id))
}

/// Print the active or archived order list, newest first.
pub async fn list(client: &GatewayClient, archived: bool) -> Result<(), CommandError> {
    let mut orders = client.fetch_orders().await?;
    let customers = client.fetch_customers().await?;
    sort_newest_first(&mut orders);

    let mut count = 0usize;
    for order in orders.iter().filter(|o| o.is_archived() == archived) {
        let customer = customers
            .iter()
            .find(|c| c.id == order.customer_id)
            .map_or_else(|| "unknown customer".to_string(), |c| c.name.to_string());
        let paid = if order.is_paid { "paid" } else { "unpaid" };
        println!(
            "#{:<6} {:<16} {:<8} {:>10}  {}  {}",
            order.order_number,
            order.status.label(),
            paid,
            order.total_price,
            customer,
            order.address.display_line(),
        );
        count += 1;
    }
    let view = if archived { "archived" } else { "active" };
    println!("{count} {view} orders");
    Ok(())
}

/// Set an order's status and paid flag.
pub async fn set_status(
    client: &GatewayClient,
    customer_id: CustomerId,
    order_id: OrderId,
    code: u8,
    paid: bool,
) -> Result<(), CommandError> {
    let status = OrderStatus::from_wire_code(code)?;
    let _stale = client
        .update_order_status(customer_id, order_id, status, paid)
        .await?;
    println!("Status set to {status}");
    if status.is_archived() {
        println!("The order will appear in the archived list on the next fetch");
    }
    Ok(())
}

/// Stage deltas against the order's confirmed cart and submit them.
pub async fn edit(
    client: &GatewayClient,
    customer_id: CustomerId,
    order_id: OrderId,
    adds: &[String],
    removes: &[String],
    remove_all: &[ProductId],
) -> Result<(), CommandError> {
    let order = find_order(client, order_id).await?;
    let mut session = OrderEditSession::new(order.cart_lines);

    for spec in adds {
        let (product_id, quantity) = parse_line_spec(spec)?;
        if !session.stage_add(product_id, quantity) {
            tracing::warn!(%product_id, quantity, "addition suppressed");
        }
    }
    for spec in removes {
        let (product_id, quantity) = parse_line_spec(spec)?;
        if !session.stage_remove(product_id, quantity) {
            tracing::warn!(%product_id, quantity, "removal suppressed");
        }
    }
    for &product_id in remove_all {
        if !session.stage_remove_all(product_id) {
            tracing::warn!(%product_id, "not in the confirmed cart, nothing to remove");
        }
    }

    if !session.has_changes() {
        println!("Nothing staged; order unchanged");
        return Ok(());
    }

    let _stale = client
        .update_order_cart_lines(customer_id, order_id, &session.deltas())
        .await?;
    drop(session);

    // The confirmed composition is whatever the server made of the deltas.
    let refreshed = find_order(client, order_id).await?;
    println!("Confirmed cart of order #{}:", refreshed.order_number);
    for line in &refreshed.cart_lines {
        println!("  {} x{}", line.product_id, line.quantity);
    }
    Ok(())
}

/// Create an order with an initial cart and a free-form address.
pub async fn create(
    client: &GatewayClient,
    customer_id: CustomerId,
    lines: &[String],
    address: String,
    comment: String,
) -> Result<(), CommandError> {
    let mut cart = CartLineSet::new();
    for spec in lines {
        let (product_id, quantity) = parse_line_spec(spec)?;
        if !cart.add_or_merge(product_id, quantity) {
            tracing::warn!(%product_id, quantity, "line suppressed");
        }
    }

    let order = NewOrder {
        cart_line_dtos: cart.into_vec(),
        address: Address {
            special_address_string: address,
            ..Address::default()
        },
        comment,
    };
    let _stale = client.create_order(customer_id, &order).await?;
    println!("Order created; fetch the list to see its number");
    Ok(())
}

/// Hard-delete an order.
pub async fn delete(
    client: &GatewayClient,
    customer_id: CustomerId,
    order_id: OrderId,
    confirmed: bool,
) -> Result<(), CommandError> {
    if !confirmed {
        return Err(CommandError::NotConfirmed);
    }
    let _stale = client.delete_order(customer_id, order_id).await?;
    println!("Order deleted");
    Ok(())
}
