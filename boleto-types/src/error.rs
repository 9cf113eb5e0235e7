//! Error types for the boleto issuance library.

/// Domain-level errors (entity construction and field encoding failures).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid CPF: {0}")]
    InvalidCpf(String),

    #[error("Invalid CNPJ: {0}")]
    InvalidCnpj(String),

    #[error("State code must have exactly 2 characters: {0}")]
    InvalidState(String),

    #[error("Zip code must have exactly 8 digits: {0}")]
    InvalidZipCode(String),

    #[error("Agency must have exactly 4 digits: {0}")]
    InvalidAgency(String),

    #[error("Account must have exactly 7 digits: {0}")]
    InvalidAccount(String),

    #[error("Account check digit must have exactly 1 character: {0}")]
    InvalidAccountDigit(String),

    #[error("Amount must be greater than zero: {0}")]
    NonPositiveAmount(f64),

    #[error("Due date {due} cannot precede issue date {issue}")]
    DueDateBeforeIssue {
        issue: chrono::NaiveDate,
        due: chrono::NaiveDate,
    },

    #[error("Our-number must be numeric with at most 8 digits: {0}")]
    InvalidOurNumber(String),

    #[error("Malformed monetary field: {0}")]
    MalformedMoneyField(String),
}

/// Gateway-level errors (transport and remote API failures).
///
/// Opaque to the core: the issuing service propagates these unchanged.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Client certificate error: {0}")]
    Certificate(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error: HTTP {status} - {message}")]
    Api { status: u16, message: String },
}

/// Application-level errors covering the full issuance and webhook flow.
#[derive(Debug, thiserror::Error)]
pub enum BoletoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Cannot build payload: {0}")]
    Payload(String),

    #[error("Unusable response: {0}")]
    Parse(String),

    #[error("Webhook error: {0}")]
    Webhook(String),

    #[error("Handler failed: {0}")]
    Handler(String),
}
