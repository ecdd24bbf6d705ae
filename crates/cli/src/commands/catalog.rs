//! Catalog commands.

use orderdesk_client::GatewayClient;
use orderdesk_core::catalog::Product;
use orderdesk_core::quantity::{StockCounters, StockEdit};
use orderdesk_core::types::ProductId;

use super::CommandError;

async fn find_product(
    client: &GatewayClient,
    product_id: ProductId,
) -> Result<Product, CommandError> {
    client
        .fetch_products()
        .await?
        .into_iter()
        .find(|p| p.id == product_id)
        .ok_or(CommandError::ProductNotFound(product_id))
}

/// Print the catalog with counters and available-for-sale.
pub async fn list(client: &GatewayClient) -> Result<(), CommandError> {
    let mut products = client.fetch_products().await?;
    products.sort_by(|a, b| a.title.cmp(&b.title));

    println!(
        "{:<14} {:<32} {:>8} {:>9} {:>9} {:>10}",
        "SKU", "TITLE", "ACTUAL", "RESERVED", "SHIPPING", "AVAILABLE"
    );
    for product in &products {
        println!(
            "{:<14} {:<32} {:>8} {:>9} {:>9} {:>10}",
            product.sku,
            product.title,
            product.stock.actual_quantity,
            product.stock.reserved_quantity,
            product.stock.quantity_for_shipping,
            product.available_for_sale(),
        );
    }
    println!("{} products", products.len());
    Ok(())
}

async fn submit_edit(
    client: &GatewayClient,
    product_id: ProductId,
    edit: StockEdit,
) -> Result<(), CommandError> {
    let product = find_product(client, product_id).await?;
    let counters = edit.apply(&product.stock);
    let _stale = client
        .update_product_quantities(product.category_id, product.id, &counters)
        .await?;

    // The local copy is stale now; show the authoritative state.
    let refreshed = find_product(client, product_id).await?;
    println!(
        "{}: actual {} / reserved {} / shipping {} (available {})",
        refreshed.title,
        refreshed.stock.actual_quantity,
        refreshed.stock.reserved_quantity,
        refreshed.stock.quantity_for_shipping,
        refreshed.available_for_sale(),
    );
    Ok(())
}

/// Book a stock receipt against a product's on-hand counter.
pub async fn receive(
    client: &GatewayClient,
    product_id: ProductId,
    quantity: i64,
) -> Result<(), CommandError> {
    submit_edit(client, product_id, StockEdit::Receive { delta: quantity }).await
}

/// Replace all three counters of a product.
pub async fn set_counters(
    client: &GatewayClient,
    product_id: ProductId,
    actual: i64,
    reserved: i64,
    shipping: i64,
) -> Result<(), CommandError> {
    submit_edit(
        client,
        product_id,
        StockEdit::Replace(StockCounters::new(actual, reserved, shipping)),
    )
    .await
}

/// Hard-delete a product.
pub async fn delete(
    client: &GatewayClient,
    product_id: ProductId,
    confirmed: bool,
) -> Result<(), CommandError> {
    if !confirmed {
        return Err(CommandError::NotConfirmed);
    }
    let product = find_product(client, product_id).await?;
    let _stale = client.delete_product(product.category_id, product.id).await?;
    println!("Deleted {} ({})", product.title, product.sku);
    Ok(())
}
