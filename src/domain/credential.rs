//! Credential value object - Domain layer credential handling.
//!
//! DDD: Encapsulates the "stored credentials are always hashed" invariant
//! as a value object that only the write path can mint from plaintext.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Full-string shape of an encoded bcrypt hash: a version tag (`$2`, `$2a`,
/// `$2b` or `$2y`), a two-digit cost factor and a 53-character radix-64
/// salt-plus-digest payload, `$`-delimited.
static HASH_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\$2[aby]?\$\d{2}\$[./0-9A-Za-z]{53}$").expect("hash format pattern compiles")
});

/// Check whether a value is already in encoded hash form.
///
/// The match is anchored to the whole string: the empty string, a payload of
/// the wrong length, an unknown version tag or a single character outside
/// the radix-64 alphabet all fail, and the value is treated as plaintext.
pub fn is_hash_format(value: &str) -> bool {
    HASH_FORMAT.is_match(value)
}

/// Hash-encoding collaborator.
///
/// SOLID (ISP): one operation - turn plaintext into an encoded hash that
/// itself satisfies [`is_hash_format`]. Algorithm and cost selection are the
/// implementation's configuration, not part of this contract. Failures are
/// configuration defects and propagate to the caller unretried.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CredentialEncoder: Send + Sync {
    /// Encode plaintext into storage hash form
    fn encode(&self, plaintext: &str) -> AppResult<String>;
}

/// Credential value object holding a string in encoded hash form.
///
/// DDD: Value object - immutable, compared by value. Instances come from
/// exactly two places: the write path of [`crate::domain::CredentialGate`]
/// (plaintext gets encoded first) or [`Credential::from_storage`] (the value
/// was hashed before it was stored). Plaintext therefore cannot reach a
/// storage column through this type.
#[derive(Clone)]
pub struct Credential {
    hash: String,
}

// Don't expose the hash in debug output (security)
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Credential {
    /// Rebuild a credential from its stored representation.
    ///
    /// Read path: the identity function. Hashing is one-way, so there is
    /// nothing to decode and no re-hash happens on load.
    pub fn from_storage(stored: String) -> Self {
        Self { hash: stored }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    pub(crate) fn from_hash(hash: String) -> Self {
        Self { hash }
    }
}

impl From<Credential> for String {
    fn from(credential: Credential) -> Self {
        credential.hash
    }
}

impl PartialEq for Credential {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Credential {}
