//! Optional charge configuration: interest, fine, discount, messages.
//!
//! All three sub-configurations are independently optional. Absence means
//! the block is not applied and must be omitted from the emitted payload,
//! not sent as null or zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Late-payment interest kind (`codigo_tipo_juros`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestType {
    /// No interest applied.
    None,
    /// Fixed amount charged per day of delay.
    DailyAmount,
    /// Monthly percentage over the title amount.
    MonthlyPercentage,
}

impl InterestType {
    pub fn code(&self) -> &'static str {
        match self {
            InterestType::None => "00",
            InterestType::DailyAmount => "93",
            InterestType::MonthlyPercentage => "90",
        }
    }
}

/// Late-payment fine kind (`codigo_tipo_multa`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FineType {
    None,
    FixedAmount,
    Percentage,
}

impl FineType {
    pub fn code(&self) -> &'static str {
        match self {
            FineType::None => "00",
            FineType::FixedAmount => "01",
            FineType::Percentage => "02",
        }
    }
}

/// Early-payment discount kind (`codigo_tipo_desconto`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountType {
    None,
    FixedAmountUntilDate,
    PercentageUntilDate,
}

impl DiscountType {
    pub fn code(&self) -> &'static str {
        match self {
            DiscountType::None => "00",
            DiscountType::FixedAmountUntilDate => "01",
            DiscountType::PercentageUntilDate => "02",
        }
    }
}

/// Daily interest charged after the due date.
///
/// The per-day amount is monetary (encoded with the money format on the
/// wire), even though the type is carried as a code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    pub interest_type: InterestType,
    pub amount_per_day: f64,
}

impl Interest {
    pub fn new(interest_type: InterestType, amount_per_day: f64) -> Self {
        Self {
            interest_type,
            amount_per_day,
        }
    }
}

/// One-off fine charged after the due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fine {
    pub fine_type: FineType,
    pub percentage: f64,
}

impl Fine {
    pub fn new(fine_type: FineType, percentage: f64) -> Self {
        Self {
            fine_type,
            percentage,
        }
    }
}

/// Discount granted for payment up to a cutoff date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub discount_type: DiscountType,
    pub cutoff_date: NaiveDate,
    pub amount: f64,
    pub percentage: f64,
}

impl Discount {
    pub fn new(
        discount_type: DiscountType,
        cutoff_date: NaiveDate,
        amount: f64,
        percentage: f64,
    ) -> Self {
        Self {
            discount_type,
            cutoff_date,
            amount,
            percentage,
        }
    }
}

/// Charge configuration attached to a boleto request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    interest: Option<Interest>,
    fine: Option<Fine>,
    discount: Option<Discount>,
    messages: Vec<String>,
}

impl Charge {
    pub fn new(
        interest: Option<Interest>,
        fine: Option<Fine>,
        discount: Option<Discount>,
        messages: Vec<String>,
    ) -> Self {
        Self {
            interest,
            fine,
            discount,
            messages,
        }
    }

    pub fn interest(&self) -> Option<&Interest> {
        self.interest.as_ref()
    }

    pub fn fine(&self) -> Option<&Fine> {
        self.fine.as_ref()
    }

    pub fn discount(&self) -> Option<&Discount> {
        self.discount.as_ref()
    }

    /// Free-text instruction messages, in insertion order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn has_interest(&self) -> bool {
        self.interest.is_some()
    }

    pub fn has_fine(&self) -> bool {
        self.fine.is_some()
    }

    pub fn has_discount(&self) -> bool {
        self.discount.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        assert_eq!(InterestType::DailyAmount.code(), "93");
        assert_eq!(InterestType::MonthlyPercentage.code(), "90");
        assert_eq!(FineType::Percentage.code(), "02");
        assert_eq!(DiscountType::FixedAmountUntilDate.code(), "01");
    }

    #[test]
    fn test_empty_charge_has_nothing() {
        let charge = Charge::default();
        assert!(!charge.has_interest());
        assert!(!charge.has_fine());
        assert!(!charge.has_discount());
        assert!(charge.messages().is_empty());
    }

    #[test]
    fn test_sub_configs_are_independent() {
        let charge = Charge::new(
            None,
            Some(Fine::new(FineType::Percentage, 2.0)),
            None,
            vec!["Multa de 2% após vencimento".to_string()],
        );
        assert!(!charge.has_interest());
        assert!(charge.has_fine());
        assert!(!charge.has_discount());
        assert_eq!(charge.messages().len(), 1);
    }
}
