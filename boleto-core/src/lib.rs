//! # Boleto Core
//!
//! Application services for issuing Itaú boletos with embedded PIX data.
//! Pure orchestration over the `boleto-types` domain layer: assembling the
//! bank's request payload, parsing replies, classifying and dispatching
//! inbound payment notifications, and running monthly batch issuance.
//!
//! All outbound IO goes through the [`boleto_types::BoletoGateway`] port;
//! no transport logic lives here.

pub mod billing;
pub mod dates;
pub mod payload;
pub mod response;
pub mod service;
pub mod webhook;

pub use billing::{BillingReport, MonthlyBilling, Subscriber};
pub use payload::{IssuePayload, build_payload};
pub use response::parse_response;
pub use service::BoletoService;
pub use webhook::WebhookDispatcher;
