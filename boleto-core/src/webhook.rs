//! Classification and dispatch of inbound payment notifications.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{error, info};

use boleto_types::{BoletoError, WebhookEvent};

/// Reserved registration name invoked for every event.
pub const ALL_EVENTS: &str = "all";

/// Reserved registration name invoked when the event is a settlement.
pub const PAID_EVENTS: &str = "paid";

/// Reserved registration name invoked when the event is a reversal.
pub const CANCELLED_EVENTS: &str = "cancelled";

type Handler = Box<dyn Fn(&WebhookEvent) -> Result<(), BoletoError> + Send + Sync>;

/// Registry of notification handlers, owned by the caller.
///
/// Each registered name keeps its handlers in insertion order, which is
/// also the invocation order. Dispatch is fail-fast: the first handler
/// error propagates and aborts the remaining handlers of that call.
/// Multiple independent dispatchers can coexist; there is no ambient state.
#[derive(Default)]
pub struct WebhookDispatcher {
    listeners: HashMap<String, Vec<Handler>>,
}

impl WebhookDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for an event-type name.
    ///
    /// Besides the bank's literal notification codes, the reserved names
    /// [`ALL_EVENTS`], [`PAID_EVENTS`] and [`CANCELLED_EVENTS`] are
    /// understood by [`dispatch`](Self::dispatch).
    pub fn on<F>(&mut self, event: impl Into<String>, handler: F)
    where
        F: Fn(&WebhookEvent) -> Result<(), BoletoError> + Send + Sync + 'static,
    {
        self.listeners
            .entry(event.into())
            .or_default()
            .push(Box::new(handler));
    }

    /// Classifies a raw inbound payload into a [`WebhookEvent`].
    ///
    /// `tipo_notificacao` and `nosso_numero` are required; everything else
    /// is optional. An unrecognized notification code passes through
    /// unchanged, and a non-string code classifies as `"UNKNOWN"`.
    pub fn classify(raw: &Value) -> Result<WebhookEvent, BoletoError> {
        let event_type = match required(raw, "tipo_notificacao")? {
            Value::String(code) => code.clone(),
            _ => "UNKNOWN".to_string(),
        };

        let our_number = match required(raw, "nosso_numero")? {
            Value::String(number) => number.clone(),
            other => other.to_string(),
        };

        let payment_date = raw
            .get("data_pagamento")
            .and_then(Value::as_str)
            .map(str::to_string);

        // Integer cents on the wire; absence stays absence, never zero
        let paid_amount = raw.get("valor_pago").and_then(cents).map(|c| c / 100.0);

        Ok(WebhookEvent {
            event_type,
            our_number,
            payment_date,
            paid_amount,
            raw: raw.clone(),
        })
    }

    /// Invokes the handlers for an event.
    ///
    /// Order: handlers under the literal type code, then `"all"`, then
    /// `"paid"` for settlements and `"cancelled"` for reversals.
    pub fn dispatch(&self, event: &WebhookEvent) -> Result<(), BoletoError> {
        self.invoke(&event.event_type, event)?;
        self.invoke(ALL_EVENTS, event)?;

        if event.is_paid() {
            self.invoke(PAID_EVENTS, event)?;
        }
        if event.is_cancelled() {
            self.invoke(CANCELLED_EVENTS, event)?;
        }

        Ok(())
    }

    /// Classifies and dispatches in one step.
    pub fn handle(&self, raw: &Value) -> Result<WebhookEvent, BoletoError> {
        let event = match Self::classify(raw) {
            Ok(event) => event,
            Err(e) => {
                error!(error = %e, "Rejected malformed webhook payload");
                return Err(e);
            }
        };

        info!(
            event_type = %event.event_type,
            our_number = %event.our_number,
            "Processing webhook notification"
        );

        self.dispatch(&event)?;
        Ok(event)
    }

    /// Signature verification stub.
    ///
    /// The bank's signature scheme is intentionally out of scope here;
    /// hosts that need it verify before feeding the payload in.
    pub fn validate_signature(&self, _payload: &Value, _signature: &str) -> bool {
        true
    }

    fn invoke(&self, name: &str, event: &WebhookEvent) -> Result<(), BoletoError> {
        if let Some(handlers) = self.listeners.get(name) {
            for handler in handlers {
                handler(event)?;
            }
        }
        Ok(())
    }
}

fn required<'a>(raw: &'a Value, key: &str) -> Result<&'a Value, BoletoError> {
    match raw.get(key) {
        Some(Value::Null) | None => Err(BoletoError::Webhook(format!(
            "required field missing: {key}"
        ))),
        Some(value) => Ok(value),
    }
}

fn cents(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
