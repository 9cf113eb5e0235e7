//! Beneficiary (the party that receives the payment).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Collection wallet code assigned by the bank (`codigo_carteira`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletCode {
    /// Itaú registered wallet.
    #[default]
    Registered109,
}

impl WalletCode {
    pub fn code(&self) -> &'static str {
        match self {
            WalletCode::Registered109 => "109",
        }
    }
}

impl fmt::Display for WalletCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Bank account identification of the creditor issuing the boletos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    agency: String,
    account: String,
    account_digit: String,
    pix_key: String,
    wallet_code: WalletCode,
}

impl Beneficiary {
    /// Creates a validated beneficiary: 4-digit agency, 7-digit account,
    /// 1-character account check digit.
    pub fn new(
        agency: impl Into<String>,
        account: impl Into<String>,
        account_digit: impl Into<String>,
        pix_key: impl Into<String>,
        wallet_code: WalletCode,
    ) -> Result<Self, DomainError> {
        let agency = agency.into();
        if agency.len() != 4 {
            return Err(DomainError::InvalidAgency(agency));
        }

        let account = account.into();
        if account.len() != 7 {
            return Err(DomainError::InvalidAccount(account));
        }

        let account_digit = account_digit.into();
        if account_digit.chars().count() != 1 {
            return Err(DomainError::InvalidAccountDigit(account_digit));
        }

        Ok(Self {
            agency,
            account,
            account_digit,
            pix_key: pix_key.into(),
            wallet_code,
        })
    }

    /// Beneficiary identifier for the API: agency + account + check digit.
    pub fn id(&self) -> String {
        format!("{}{}{}", self.agency, self.account, self.account_digit)
    }

    pub fn agency(&self) -> &str {
        &self.agency
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn account_digit(&self) -> &str {
        &self.account_digit
    }

    pub fn pix_key(&self) -> &str {
        &self.pix_key
    }

    pub fn wallet_code(&self) -> WalletCode {
        self.wallet_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beneficiary_id_concatenation() {
        let b = Beneficiary::new("1234", "1234567", "8", "pix@empresa.com", WalletCode::default())
            .unwrap();
        assert_eq!(b.id(), "123412345678");
        assert_eq!(b.wallet_code().code(), "109");
    }

    #[test]
    fn test_agency_length_enforced() {
        let result = Beneficiary::new("123", "1234567", "8", "key", WalletCode::Registered109);
        assert!(matches!(result, Err(DomainError::InvalidAgency(_))));
    }

    #[test]
    fn test_account_length_enforced() {
        let result = Beneficiary::new("1234", "123456", "8", "key", WalletCode::Registered109);
        assert!(matches!(result, Err(DomainError::InvalidAccount(_))));
    }

    #[test]
    fn test_account_digit_length_enforced() {
        let result = Beneficiary::new("1234", "1234567", "89", "key", WalletCode::Registered109);
        assert!(matches!(result, Err(DomainError::InvalidAccountDigit(_))));
    }
}
