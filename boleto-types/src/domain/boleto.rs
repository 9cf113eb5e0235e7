//! Boleto issuance request and its wire-code enums.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::beneficiary::Beneficiary;
use super::charge::Charge;
use super::person::Payer;
use crate::error::DomainError;

/// Issuance process step (`etapa_processo_boleto`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessStep {
    /// Validates and simulates the boleto without bank registration.
    Simulation,
    /// Effectively registers the boleto at the bank.
    #[default]
    Registration,
}

impl ProcessStep {
    pub fn code(&self) -> &'static str {
        match self {
            ProcessStep::Simulation => "Simulacao",
            ProcessStep::Registration => "Efetivacao",
        }
    }
}

impl fmt::Display for ProcessStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Boleto maturity kind (`tipo_boleto`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoletoKind {
    #[default]
    AtSight,
}

impl BoletoKind {
    pub fn code(&self) -> &'static str {
        match self {
            BoletoKind::AtSight => "a vista",
        }
    }
}

/// Collection instrument (`descricao_instrumento_cobranca`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeInstrument {
    Boleto,
    /// Boleto with an embedded PIX QR code.
    #[default]
    BoletoPix,
}

impl ChargeInstrument {
    pub fn code(&self) -> &'static str {
        match self {
            ChargeInstrument::Boleto => "boleto",
            ChargeInstrument::BoletoPix => "boleto_pix",
        }
    }
}

/// Title species (`codigo_especie`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleSpecies {
    #[default]
    MerchantDuplicate,
    PromissoryNote,
    Receipt,
}

impl TitleSpecies {
    pub fn code(&self) -> &'static str {
        match self {
            TitleSpecies::MerchantDuplicate => "01",
            TitleSpecies::PromissoryNote => "02",
            TitleSpecies::Receipt => "05",
        }
    }
}

/// A fully validated request to issue one boleto.
///
/// Built fresh per issuance attempt and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoletoRequest {
    beneficiary: Beneficiary,
    payer: Payer,
    our_number: String,
    your_number: String,
    amount: f64,
    issue_date: NaiveDate,
    due_date: NaiveDate,
    charge: Option<Charge>,
    process_step: ProcessStep,
}

impl BoletoRequest {
    /// Creates a validated request.
    ///
    /// The amount must be positive, the due date must not precede the issue
    /// date, and the our-number must be numeric with at most 8 digits.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        beneficiary: Beneficiary,
        payer: Payer,
        our_number: impl Into<String>,
        your_number: impl Into<String>,
        amount: f64,
        issue_date: NaiveDate,
        due_date: NaiveDate,
        charge: Option<Charge>,
        process_step: ProcessStep,
    ) -> Result<Self, DomainError> {
        if amount <= 0.0 {
            return Err(DomainError::NonPositiveAmount(amount));
        }

        if due_date < issue_date {
            return Err(DomainError::DueDateBeforeIssue {
                issue: issue_date,
                due: due_date,
            });
        }

        let our_number = our_number.into();
        if our_number.is_empty()
            || our_number.len() > 8
            || !our_number.chars().all(|c| c.is_ascii_digit())
        {
            return Err(DomainError::InvalidOurNumber(our_number));
        }

        Ok(Self {
            beneficiary,
            payer,
            our_number,
            your_number: your_number.into(),
            amount,
            issue_date,
            due_date,
            charge,
            process_step,
        })
    }

    pub fn beneficiary(&self) -> &Beneficiary {
        &self.beneficiary
    }

    pub fn payer(&self) -> &Payer {
        &self.payer
    }

    /// Creditor-assigned identifier, zero-padded to 8 digits.
    pub fn our_number(&self) -> String {
        format!("{:0>8}", self.our_number)
    }

    /// Payer-assigned reference, as given.
    pub fn your_number(&self) -> &str {
        &self.your_number
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn issue_date(&self) -> NaiveDate {
        self.issue_date
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn charge(&self) -> Option<&Charge> {
        self.charge.as_ref()
    }

    pub fn process_step(&self) -> ProcessStep {
        self.process_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Person, WalletCode};

    fn beneficiary() -> Beneficiary {
        Beneficiary::new("1234", "1234567", "8", "pix@empresa.com", WalletCode::Registered109)
            .unwrap()
    }

    fn payer() -> Payer {
        let address = Address::new("Rua A", "Centro", "São Paulo", "SP", "01310-100").unwrap();
        Payer::new(Person::individual("Maria Silva", "111.444.777-35", address).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_our_number_zero_padded() {
        let req = BoletoRequest::new(
            beneficiary(),
            payer(),
            "123",
            "REF-1",
            150.0,
            date(2026, 8, 1),
            date(2026, 8, 31),
            None,
            ProcessStep::Registration,
        )
        .unwrap();
        assert_eq!(req.our_number(), "00000123");
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let result = BoletoRequest::new(
            beneficiary(),
            payer(),
            "123",
            "REF-1",
            0.0,
            date(2026, 8, 1),
            date(2026, 8, 31),
            None,
            ProcessStep::Registration,
        );
        assert!(matches!(result, Err(DomainError::NonPositiveAmount(_))));
    }

    #[test]
    fn test_due_before_issue_rejected() {
        let result = BoletoRequest::new(
            beneficiary(),
            payer(),
            "123",
            "REF-1",
            150.0,
            date(2026, 8, 31),
            date(2026, 8, 1),
            None,
            ProcessStep::Registration,
        );
        assert!(matches!(result, Err(DomainError::DueDateBeforeIssue { .. })));
    }

    #[test]
    fn test_due_equal_to_issue_allowed() {
        let result = BoletoRequest::new(
            beneficiary(),
            payer(),
            "123",
            "REF-1",
            150.0,
            date(2026, 8, 1),
            date(2026, 8, 1),
            None,
            ProcessStep::Registration,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_our_number_too_long_rejected() {
        let result = BoletoRequest::new(
            beneficiary(),
            payer(),
            "123456789",
            "REF-1",
            150.0,
            date(2026, 8, 1),
            date(2026, 8, 31),
            None,
            ProcessStep::Registration,
        );
        assert!(matches!(result, Err(DomainError::InvalidOurNumber(_))));
    }

    #[test]
    fn test_process_step_codes() {
        assert_eq!(ProcessStep::Simulation.code(), "Simulacao");
        assert_eq!(ProcessStep::Registration.code(), "Efetivacao");
    }
}
