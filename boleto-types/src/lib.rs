//! # Boleto Types
//!
//! Domain types and port traits for issuing Itaú boletos with embedded
//! PIX QR-code data. This crate has ZERO external IO dependencies - only
//! data structures, business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal layering:
//! - `domain/` - Validated, immutable value objects (Address, Person,
//!   Beneficiary, Charge, BoletoRequest)
//! - `document` - CPF/CNPJ check-digit validation
//! - `fields` - Fixed-width monetary and percentage field encodings
//! - `dto` - Data Transfer Objects crossing the API boundary
//! - `ports` - Trait the gateway adapter must implement
//! - `error` - Domain, gateway, and application error types

pub mod document;
pub mod domain;
pub mod dto;
pub mod error;
pub mod fields;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Address, Beneficiary, BoletoKind, BoletoRequest, Charge, ChargeInstrument, Discount,
    DiscountType, Fine, FineType, Interest, InterestType, Payer, Person, PersonType, ProcessStep,
    TitleSpecies, WalletCode,
};
pub use dto::{BoletoResponse, WebhookEvent};
pub use error::{BoletoError, DomainError, GatewayError};
pub use ports::BoletoGateway;
