//! Bcrypt implementation of the hash-encoding collaborator.

use crate::domain::CredentialEncoder;
use crate::errors::AppResult;

/// Hash encoder backed by the bcrypt algorithm.
///
/// The cost factor comes from [`crate::Config`]; everything else about the
/// output shape is fixed by the algorithm (60 characters, version tag,
/// two-digit cost, 53-character salt-plus-digest payload).
#[derive(Debug, Clone)]
pub struct BcryptEncoder {
    cost: u32,
}

impl BcryptEncoder {
    /// Create an encoder with the given cost factor.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptEncoder {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_BCRYPT_COST)
    }
}

impl CredentialEncoder for BcryptEncoder {
    fn encode(&self, plaintext: &str) -> AppResult<String> {
        // A failure here (e.g. an out-of-range cost) is a setup defect; it
        // propagates and aborts the surrounding write.
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }
}
