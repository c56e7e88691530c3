//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! Contains: Entities, Value Objects, the credential encoder gate and the
//! port it encodes through. Hashing itself stays behind the port; no
//! algorithm crate is touched here.

pub mod credential;
pub mod customer;
pub mod gate;

pub use credential::{is_hash_format, Credential, CredentialEncoder};
pub use customer::{CreateCustomer, Customer, CustomerResponse, UpdateCustomer};
pub use gate::CredentialGate;

#[cfg(any(test, feature = "test-utils"))]
pub use credential::MockCredentialEncoder;
