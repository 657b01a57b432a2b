use std::collections::HashMap;

use async_trait::async_trait;
use stripe::{Client, CreateCustomer, Customer};

use crate::error::{AppError, Res};

/// Remote billing identity provider.
///
/// One operation: open a customer account for a local user and return the
/// provider-assigned identity string. The call is an opaque remote operation
/// with no local transactional guarantee; once it succeeds, a remote object
/// exists regardless of what the caller does next, so callers own the
/// compensation story.
#[async_trait]
pub trait BillingProvider: Send + Sync {
    async fn create_customer(
        &self,
        email: &str,
        user_id: i64,
        first_name: &str,
        last_name: &str,
    ) -> Res<String>;
}

pub struct StripeBilling {
    client: Client,
}

impl StripeBilling {
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }
}

#[async_trait]
impl BillingProvider for StripeBilling {
    async fn create_customer(
        &self,
        email: &str,
        user_id: i64,
        first_name: &str,
        last_name: &str,
    ) -> Res<String> {
        let name = format!("{} {}", first_name, last_name);
        let params = CreateCustomer {
            email: Some(email),
            name: Some(&name),
            metadata: Some(HashMap::from([(
                "user_id".to_string(),
                user_id.to_string(),
            )])),
            ..Default::default()
        };

        let customer = Customer::create(&self.client, params)
            .await
            .map_err(AppError::from)?;
        Ok(customer.id.to_string())
    }
}
