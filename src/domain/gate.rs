//! Credential encoder gate - the write/read boundary for credential fields.
//!
//! SOLID (SRP): one job - a credential reaching storage is hashed exactly
//! once, no matter how often the write path runs for the same entity.
//! The hash-encoding collaborator is injected at construction; the gate
//! itself holds no other state and is freely shared across tasks.

use std::sync::Arc;

use crate::domain::credential::{is_hash_format, Credential, CredentialEncoder};
use crate::errors::AppResult;

/// Stateless transform applied at the storage boundary of a credential field.
///
/// Write path: plaintext is encoded; a value already in hash form (i.e. one
/// that was loaded from storage and is being saved back) passes through
/// unchanged. Read path: identity - hashing is one-way, the stored form is
/// the domain form.
#[derive(Clone)]
pub struct CredentialGate {
    encoder: Arc<dyn CredentialEncoder>,
}

impl CredentialGate {
    /// Create a gate around a hash-encoding collaborator.
    pub fn new(encoder: Arc<dyn CredentialEncoder>) -> Self {
        Self { encoder }
    }

    /// Transform a credential value for storage.
    ///
    /// `None` passes through untouched and the encoder is never invoked.
    /// A value already in hash form is returned as-is, which keeps a
    /// loaded-then-resaved entity from being double-encoded. Anything else,
    /// the empty string included, is treated as plaintext and encoded.
    ///
    /// # Errors
    /// Propagates the encoder's failure unchanged. Encoding is local,
    /// deterministic CPU work, so a failure is a configuration defect and
    /// the write is aborted rather than retried.
    pub fn to_storage_form(&self, value: Option<&str>) -> AppResult<Option<String>> {
        match value {
            None => Ok(None),
            Some(value) if is_hash_format(value) => {
                // Either a re-saved stored hash, or plaintext that happens
                // to be hash-shaped; the two are indistinguishable here, so
                // make the pass-through visible to operators.
                tracing::warn!("credential already in hash form, storing unchanged");
                Ok(Some(value.to_string()))
            }
            Some(plaintext) => Ok(Some(self.encoder.encode(plaintext)?)),
        }
    }

    /// Transform a stored credential back into its domain form.
    ///
    /// Identity on the string content; no decoding exists for a one-way
    /// hash and no re-hash happens on read.
    pub fn to_domain_form(&self, stored: Option<String>) -> Option<Credential> {
        stored.map(Credential::from_storage)
    }

    /// Write path returning the domain wrapper instead of the raw column
    /// value. This is what the service layer calls when it accepts a
    /// plaintext-or-hashed input and needs a [`Credential`] it can put on an
    /// entity.
    pub fn seal(&self, value: Option<&str>) -> AppResult<Option<Credential>> {
        Ok(self.to_storage_form(value)?.map(Credential::from_hash))
    }
}

impl std::fmt::Debug for CredentialGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialGate").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credential::MockCredentialEncoder;
    use crate::errors::AppError;

    const STORED: &str = "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

    fn gate_with(encoder: MockCredentialEncoder) -> CredentialGate {
        CredentialGate::new(Arc::new(encoder))
    }

    #[test]
    fn test_plaintext_is_encoded() {
        let mut encoder = MockCredentialEncoder::new();
        encoder
            .expect_encode()
            .times(1)
            .returning(|_| Ok(STORED.to_string()));

        let gate = gate_with(encoder);
        let stored = gate.to_storage_form(Some("my-password")).unwrap();
        assert_eq!(stored.as_deref(), Some(STORED));
    }

    #[test]
    fn test_hash_form_passes_through_without_encoding() {
        let mut encoder = MockCredentialEncoder::new();
        encoder.expect_encode().times(0);

        let gate = gate_with(encoder);
        let stored = gate.to_storage_form(Some(STORED)).unwrap();
        assert_eq!(stored.as_deref(), Some(STORED));
    }

    #[test]
    fn test_none_passes_through_and_encoder_is_never_invoked() {
        let mut encoder = MockCredentialEncoder::new();
        encoder.expect_encode().times(0);

        let gate = gate_with(encoder);
        assert_eq!(gate.to_storage_form(None).unwrap(), None);
        assert_eq!(gate.to_domain_form(None), None);
    }

    #[test]
    fn test_empty_string_is_treated_as_plaintext() {
        let mut encoder = MockCredentialEncoder::new();
        encoder
            .expect_encode()
            .times(1)
            .returning(|_| Ok(STORED.to_string()));

        let gate = gate_with(encoder);
        let stored = gate.to_storage_form(Some("")).unwrap();
        assert_eq!(stored.as_deref(), Some(STORED));
    }

    #[test]
    fn test_write_is_idempotent() {
        let mut encoder = MockCredentialEncoder::new();
        encoder
            .expect_encode()
            .times(1)
            .returning(|_| Ok(STORED.to_string()));

        let gate = gate_with(encoder);
        let first = gate.to_storage_form(Some("S3cret!")).unwrap().unwrap();
        let second = gate.to_storage_form(Some(&first)).unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_read_is_identity_on_the_stored_string() {
        let encoder = MockCredentialEncoder::new();
        let gate = gate_with(encoder);

        let credential = gate.to_domain_form(Some(STORED.to_string())).unwrap();
        assert_eq!(credential.as_str(), STORED);
    }

    #[test]
    fn test_encoder_failure_aborts_the_write() {
        let mut encoder = MockCredentialEncoder::new();
        encoder
            .expect_encode()
            .times(1)
            .returning(|_| Err(AppError::Encoder(bcrypt::BcryptError::CostNotAllowed(99))));

        let gate = gate_with(encoder);
        assert!(matches!(
            gate.to_storage_form(Some("plaintext")),
            Err(AppError::Encoder(_))
        ));
    }

    #[test]
    fn test_seal_wraps_the_storage_form() {
        let mut encoder = MockCredentialEncoder::new();
        encoder
            .expect_encode()
            .times(1)
            .returning(|_| Ok(STORED.to_string()));

        let gate = gate_with(encoder);
        let credential = gate.seal(Some("plaintext")).unwrap().unwrap();
        assert_eq!(credential.as_str(), STORED);
        assert_eq!(gate.seal(None).unwrap(), None);
    }
}
