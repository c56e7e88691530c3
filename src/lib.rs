//! Customer Core - credential persistence core for a customer service
//!
//! This crate guarantees one thing above all: a credential value reaching
//! storage is hashed exactly once. The write path encodes plaintext and
//! passes already-hashed values through unchanged, so re-saving a loaded
//! entity can never double-encode; the read path is the identity, because
//! hashing is one-way and there is nothing to decode.
//!
//! # Architecture Layers
//!
//! - **config**: Application configuration and constants
//! - **domain**: Customer entity, credential value object and the encoder
//!   gate with its hash-encoding port
//! - **infra**: Bcrypt encoder and the customer store that applies the gate
//!   at its row read/write sites
//! - **services**: Customer use cases (register, update, change credential)
//! - **errors**: Centralized error handling
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use customer_core::{BcryptEncoder, CredentialGate};
//!
//! let gate = CredentialGate::new(Arc::new(BcryptEncoder::new(4)));
//!
//! let stored = gate.to_storage_form(Some("S3cret!")).unwrap().unwrap();
//! assert_ne!(stored, "S3cret!");
//!
//! // Writing the stored form again leaves it untouched
//! let again = gate.to_storage_form(Some(&stored)).unwrap().unwrap();
//! assert_eq!(stored, again);
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{is_hash_format, Credential, CredentialEncoder, CredentialGate, Customer};
pub use errors::{AppError, AppResult, OptionExt};
pub use infra::{BcryptEncoder, InMemoryCustomerStore};
pub use services::{CustomerManager, CustomerService};
