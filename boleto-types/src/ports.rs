//! Port traits that outbound adapters must implement.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::GatewayError;

/// Outbound port for the bank's boleto API.
///
/// The application core depends only on this trait; the concrete adapter
/// (mutual-TLS HTTP client, OAuth token caching) lives in its own crate and
/// is injected at compile time.
#[async_trait]
pub trait BoletoGateway: Send + Sync {
    /// Obtains a bearer token, reusing a cached one while still valid.
    async fn authenticate(&self) -> Result<String, GatewayError>;

    /// Submits an issuance payload and returns the raw reply.
    async fn submit_boleto(&self, payload: &Value) -> Result<Value, GatewayError>;

    /// Looks up a registered boleto by beneficiary id and our-number.
    async fn fetch_boleto(
        &self,
        beneficiary_id: &str,
        our_number: &str,
    ) -> Result<Value, GatewayError>;

    /// Registers a webhook subscription with the bank.
    async fn register_webhook(&self, config: &Value) -> Result<Value, GatewayError>;
}
