//! Fixed-width field encodings required by the Itaú boleto schema.
//!
//! Monetary amounts travel as 17 ASCII digits of integer cents,
//! left-zero-padded: R$ 100.00 becomes `00000000000010000`. Percentages
//! travel as 12 digits of integer thousandths: 2.5% becomes `000000002500`.

use crate::error::DomainError;

/// Width of a monetary field in the Itaú schema.
pub const MONEY_WIDTH: usize = 17;

/// Width of a percentage field in the Itaú schema.
pub const PERCENTAGE_WIDTH: usize = 12;

/// A monetary field of all zeros (used for `valor_abatimento`).
pub const ZERO_AMOUNT: &str = "00000000000000000";

/// Formats a decimal amount as integer cents, zero-padded to 17 digits.
///
/// Rounds half away from zero, matching the bank's reference behavior.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    format!("{:0width$}", cents, width = MONEY_WIDTH)
}

/// Parses a fixed-width monetary field back into a decimal amount.
pub fn parse_amount(formatted: &str) -> Result<f64, DomainError> {
    let cents: i64 = formatted
        .trim()
        .parse()
        .map_err(|_| DomainError::MalformedMoneyField(formatted.to_string()))?;
    Ok(cents as f64 / 100.0)
}

/// Formats a percentage as integer thousandths, zero-padded to 12 digits.
///
/// Truncates rather than rounds: 2.5678% encodes as `000000002567`.
pub fn format_percentage(percentage: f64) -> String {
    let thousandths = (percentage * 1000.0) as i64;
    format!("{:0width$}", thousandths, width = PERCENTAGE_WIDTH)
}
