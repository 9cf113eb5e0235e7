//! Data Transfer Objects crossing the API boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Notification code for an effective settlement (the boleto was paid).
pub const SETTLEMENT_CODE: &str = "BAIXA_EFETIVA";

/// Notification code for an operational reversal (the boleto was cancelled).
pub const REVERSAL_CODE: &str = "BAIXA_OPERACIONAL";

/// Result of a successful boleto submission.
///
/// Produced once per submission and not mutated. The entire raw reply is
/// retained verbatim for audit and debugging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoletoResponse {
    /// Opaque identifier assigned by this library.
    pub id: String,
    /// Creditor-assigned identifier echoed by the bank, or carried over
    /// from the request when the reply omits it.
    pub our_number: String,
    pub barcode: String,
    pub digitable_line: String,
    /// PIX copy-paste (EMV) string.
    pub pix_copy_paste: String,
    /// Base64 QR-code image payload.
    pub pix_qr_code: String,
    /// PIX transaction id.
    pub pix_txid: String,
    /// Title amount as returned by the bank (fixed-width cents field).
    pub amount: String,
    pub due_date: String,
    /// Full raw reply, kept for traceability.
    pub raw_response: Value,
}

/// A classified inbound payment notification.
///
/// Produced once per notification, handed to registered handlers, then
/// discarded. Classification is derived from the type code, not stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub event_type: String,
    pub our_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,
    /// Paid amount in currency units, converted from the integer cents the
    /// bank sends. Absent when the notification carries no amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<f64>,
    /// Raw inbound payload, kept for traceability.
    pub raw: Value,
}

impl WebhookEvent {
    /// True iff the notification reports an effective settlement.
    pub fn is_paid(&self) -> bool {
        self.event_type == SETTLEMENT_CODE
    }

    /// True iff the notification reports an operational reversal.
    pub fn is_cancelled(&self) -> bool {
        self.event_type == REVERSAL_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classification_is_derived_from_type_code() {
        let event = WebhookEvent {
            event_type: SETTLEMENT_CODE.to_string(),
            our_number: "00000123".to_string(),
            payment_date: Some("2026-08-15".to_string()),
            paid_amount: Some(150.0),
            raw: json!({}),
        };
        assert!(event.is_paid());
        assert!(!event.is_cancelled());
    }

    #[test]
    fn test_unknown_code_is_neither_paid_nor_cancelled() {
        let event = WebhookEvent {
            event_type: "ALTERACAO_VENCIMENTO".to_string(),
            our_number: "00000123".to_string(),
            payment_date: None,
            paid_amount: None,
            raw: json!({}),
        };
        assert!(!event.is_paid());
        assert!(!event.is_cancelled());
    }
}
