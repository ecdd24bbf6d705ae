//! Customer operations.

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use orderdesk_core::order::Customer;
use orderdesk_core::types::{CustomerId, HumanName};

use super::GatewayClient;
use super::types::Envelope;
use crate::{GatewayError, Stale};

/// Name and phone of a customer; used both to create one and to replace an
/// existing customer's settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub full_name: HumanName,
    pub phone_number: String,
}

impl GatewayClient {
    /// Fetch all customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self))]
    pub async fn fetch_customers(&self) -> Result<Vec<Customer>, GatewayError> {
        let envelope: Envelope<Option<Vec<Customer>>> =
            self.get_json("/customer/all", &[]).await?;
        Ok(envelope.into_result().unwrap_or_default())
    }

    /// Create a customer; the system of record assigns and returns the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self, profile), fields(name = %profile.full_name))]
    pub async fn create_customer(
        &self,
        profile: &CustomerProfile,
    ) -> Result<CustomerId, GatewayError> {
        let envelope: Envelope<CustomerId> =
            self.send_json(Method::POST, "/customer", profile).await?;
        Ok(envelope.into_result())
    }

    /// Replace a customer's name and phone.
    ///
    /// This mutates the Customer entity; orders referencing it pick the
    /// change up on their next fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self, profile), fields(customer_id = %customer_id))]
    pub async fn update_customer_settings(
        &self,
        customer_id: CustomerId,
        profile: &CustomerProfile,
    ) -> Result<Stale, GatewayError> {
        self.submit_json(
            Method::PUT,
            &format!("/customer/{customer_id}/settings"),
            profile,
        )
        .await
    }

    /// Hard-delete a customer. Irreversible.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is rejected.
    #[instrument(skip(self), fields(customer_id = %customer_id))]
    pub async fn delete_customer(&self, customer_id: CustomerId) -> Result<Stale, GatewayError> {
        self.delete(&format!("/customer/{customer_id}/hard")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_wire_shape() {
        let profile = CustomerProfile {
            full_name: HumanName::new("Anna", "", "Orlova"),
            phone_number: "+7 900 000-00-00".to_string(),
        };
        let json = serde_json::to_value(&profile).expect("serialize");
        assert_eq!(json["fullName"]["firstName"], "Anna");
        assert_eq!(json["fullName"]["familyName"], "Orlova");
        assert_eq!(json["phoneNumber"], "+7 900 000-00-00");
    }

    #[test]
    fn test_created_customer_id_unwraps_from_envelope() {
        let id = uuid::Uuid::new_v4();
        let body = format!(r#"{{"result":"{id}","errors":[]}}"#);
        let envelope: Envelope<CustomerId> = serde_json::from_str(&body).expect("deserialize");
        assert_eq!(envelope.into_result().as_uuid(), id);
    }
}
