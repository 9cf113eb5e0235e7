//! Defensive extraction of the bank's issuance reply.

use serde_json::Value;
use uuid::Uuid;

use boleto_types::{BoletoError, BoletoRequest, BoletoResponse};

/// Turns a raw reply into a [`BoletoResponse`].
///
/// Only a structurally unusable reply (not a JSON object) is an error.
/// Missing fields inside the first individual-boleto entry or the QR-code
/// block degrade to empty strings, and a missing our-number falls back to
/// the one from the original request. The raw reply is retained verbatim.
pub fn parse_response(raw: &Value, request: &BoletoRequest) -> Result<BoletoResponse, BoletoError> {
    if !raw.is_object() {
        return Err(BoletoError::Parse(format!(
            "expected a JSON object, got {raw}"
        )));
    }

    let entry = raw.pointer("/data/dado_boleto/dados_individuais_boleto/0");
    let pix = raw.pointer("/data/dados_qrcode");

    Ok(BoletoResponse {
        id: Uuid::new_v4().to_string(),
        our_number: field(entry, "numero_nosso_numero")
            .unwrap_or_else(|| request.our_number()),
        barcode: field(entry, "codigo_barras").unwrap_or_default(),
        digitable_line: field(entry, "numero_linha_digitavel").unwrap_or_default(),
        pix_copy_paste: field(pix, "emv").unwrap_or_default(),
        pix_qr_code: field(pix, "base64").unwrap_or_default(),
        pix_txid: field(pix, "txid").unwrap_or_default(),
        amount: field(entry, "valor_titulo").unwrap_or_default(),
        due_date: field(entry, "data_vencimento").unwrap_or_default(),
        raw_response: raw.clone(),
    })
}

fn field(value: Option<&Value>, key: &str) -> Option<String> {
    value
        .and_then(|v| v.get(key))
        .and_then(Value::as_str)
        .map(str::to_string)
}
