//! Infrastructure layer - concrete collaborators behind the domain's ports.
//!
//! Contains the bcrypt-backed hash encoder and the customer store. The
//! store is where the credential gate is applied, immediately before a row
//! is written and immediately after one is read.

pub mod encoder;
pub mod repositories;

pub use encoder::BcryptEncoder;
pub use repositories::{CustomerRepository, InMemoryCustomerStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockCustomerRepository;
