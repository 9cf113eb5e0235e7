//! Domain models for boleto issuance.

pub mod address;
pub mod beneficiary;
pub mod boleto;
pub mod charge;
pub mod person;

pub use address::Address;
pub use beneficiary::{Beneficiary, WalletCode};
pub use boleto::{BoletoKind, BoletoRequest, ChargeInstrument, ProcessStep, TitleSpecies};
pub use charge::{Charge, Discount, DiscountType, Fine, FineType, Interest, InterestType};
pub use person::{Payer, Person, PersonType};
