//! Person (payer identity) as a tagged variant over individual/company.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::address::Address;
use crate::document;
use crate::error::DomainError;

/// Tax-identity kind of a person, with the bank's one-letter wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonType {
    /// Individual, identified by an 11-digit CPF.
    Individual,
    /// Company, identified by a 14-digit CNPJ.
    Company,
}

impl PersonType {
    /// Wire code for `codigo_tipo_pessoa`.
    pub fn code(&self) -> &'static str {
        match self {
            PersonType::Individual => "F",
            PersonType::Company => "J",
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An individual or company with a validated tax id and an address.
///
/// The same accessor surface applies to both variants; each variant owns
/// its own check-digit rule at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    person_type: PersonType,
    name: String,
    document: String,
    address: Address,
}

impl Person {
    /// Creates an individual; the document must be a valid CPF.
    pub fn individual(
        name: impl Into<String>,
        document: impl Into<String>,
        address: Address,
    ) -> Result<Self, DomainError> {
        let document = document.into();
        if !document::is_valid_cpf(&document) {
            return Err(DomainError::InvalidCpf(document));
        }
        Ok(Self {
            person_type: PersonType::Individual,
            name: name.into(),
            document,
            address,
        })
    }

    /// Creates a company; the document must be a valid CNPJ.
    pub fn company(
        name: impl Into<String>,
        document: impl Into<String>,
        address: Address,
    ) -> Result<Self, DomainError> {
        let document = document.into();
        if !document::is_valid_cnpj(&document) {
            return Err(DomainError::InvalidCnpj(document));
        }
        Ok(Self {
            person_type: PersonType::Company,
            name: name.into(),
            document,
            address,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Document as bare digits, the form the wire format expects.
    pub fn document(&self) -> String {
        document::clean(&self.document)
    }

    /// Document exactly as provided, formatting punctuation included.
    pub fn formatted_document(&self) -> &str {
        &self.document
    }

    pub fn person_type(&self) -> PersonType {
        self.person_type
    }

    /// One-letter document-type tag: `"F"` individual, `"J"` company.
    pub fn document_type(&self) -> &'static str {
        self.person_type.code()
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

/// The party charged by a boleto. Read-only passthrough over a [`Person`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payer {
    person: Person,
}

impl Payer {
    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn document(&self) -> String {
        self.person.document()
    }

    pub fn document_type(&self) -> &'static str {
        self.person.document_type()
    }

    pub fn address(&self) -> &Address {
        self.person.address()
    }
}

impl From<Person> for Payer {
    fn from(person: Person) -> Self {
        Self::new(person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::new("Rua A", "Centro", "São Paulo", "SP", "01310-100").unwrap()
    }

    #[test]
    fn test_individual_requires_valid_cpf() {
        let person = Person::individual("Maria Silva", "111.444.777-35", address()).unwrap();
        assert_eq!(person.document_type(), "F");
        assert_eq!(person.document(), "11144477735");
        assert_eq!(person.formatted_document(), "111.444.777-35");
    }

    #[test]
    fn test_individual_rejects_bad_cpf() {
        let result = Person::individual("Maria Silva", "123.456.789-00", address());
        assert!(matches!(result, Err(DomainError::InvalidCpf(_))));
    }

    #[test]
    fn test_company_requires_valid_cnpj() {
        let person = Person::company("Empresa Ltda", "11.222.333/0001-81", address()).unwrap();
        assert_eq!(person.document_type(), "J");
        assert_eq!(person.document(), "11222333000181");
    }

    #[test]
    fn test_company_rejects_cpf_length_document() {
        let result = Person::company("Empresa Ltda", "111.444.777-35", address());
        assert!(matches!(result, Err(DomainError::InvalidCnpj(_))));
    }

    #[test]
    fn test_payer_passthrough() {
        let person = Person::individual("Maria Silva", "111.444.777-35", address()).unwrap();
        let payer = Payer::new(person.clone());
        assert_eq!(payer.name(), person.name());
        assert_eq!(payer.document(), person.document());
        assert_eq!(payer.document_type(), "F");
        assert_eq!(payer.address(), person.address());
    }
}
