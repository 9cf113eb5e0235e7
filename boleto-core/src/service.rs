//! Boleto issuing service.
//!
//! Orchestrates the issuance flow through the gateway port. Contains no
//! transport logic - pure business orchestration.

use serde_json::Value;
use tracing::{error, info, instrument};

use crate::payload::build_payload;
use crate::response::parse_response;
use boleto_types::{Beneficiary, BoletoError, BoletoGateway, BoletoRequest, BoletoResponse};

/// Application service for boleto issuance.
///
/// Generic over `G: BoletoGateway` - the adapter is injected at compile
/// time, so tests run against an in-memory gateway and production wires in
/// the mutual-TLS HTTP client.
pub struct BoletoService<G: BoletoGateway> {
    gateway: G,
}

impl<G: BoletoGateway> BoletoService<G> {
    /// Creates a new service over the given gateway.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Returns a reference to the underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Issues a boleto: builds the payload, submits it, parses the reply.
    #[instrument(skip(self, request), fields(our_number = %request.our_number()))]
    pub async fn create_boleto(
        &self,
        request: &BoletoRequest,
    ) -> Result<BoletoResponse, BoletoError> {
        info!(payer = request.payer().name(), "Issuing boleto");

        let payload = build_payload(request)?;
        let payload =
            serde_json::to_value(&payload).map_err(|e| BoletoError::Payload(e.to_string()))?;

        let raw = match self.gateway.submit_boleto(&payload).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "Boleto submission failed");
                return Err(e.into());
            }
        };

        let response = parse_response(&raw, request)?;
        info!(id = %response.id, our_number = %response.our_number, "Boleto issued");
        Ok(response)
    }

    /// Looks up a registered boleto at the bank.
    pub async fn fetch_boleto(
        &self,
        beneficiary: &Beneficiary,
        our_number: &str,
    ) -> Result<Value, BoletoError> {
        self.gateway
            .fetch_boleto(&beneficiary.id(), our_number)
            .await
            .map_err(Into::into)
    }

    /// Registers a webhook subscription with the bank.
    pub async fn register_webhook(&self, config: &Value) -> Result<Value, BoletoError> {
        self.gateway
            .register_webhook(config)
            .await
            .map_err(Into::into)
    }
}
