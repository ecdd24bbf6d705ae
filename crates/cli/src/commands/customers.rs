//! Customer commands.

use orderdesk_client::{CustomerProfile, GatewayClient};
use orderdesk_core::types::HumanName;

use super::CommandError;

/// Print the customer list.
pub async fn list(client: &GatewayClient) -> Result<(), CommandError> {
    let customers = client.fetch_customers().await?;
    for customer in &customers {
        println!("{}  {}  {}", customer.id, customer.name, customer.phone_number);
    }
    println!("{} customers", customers.len());
    Ok(())
}

/// Create a customer and print the assigned ID.
pub async fn create(
    client: &GatewayClient,
    first: String,
    patronymic: String,
    family: String,
    phone: String,
) -> Result<(), CommandError> {
    let profile = CustomerProfile {
        full_name: HumanName::new(first, patronymic, family),
        phone_number: phone,
    };
    let id = client.create_customer(&profile).await?;
    println!("Created customer {id}");
    Ok(())
}
