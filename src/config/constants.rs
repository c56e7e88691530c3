//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Credential Hashing
// =============================================================================

/// Default bcrypt cost factor (work factor) for new hashes
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Minimum cost factor accepted by the bcrypt algorithm
pub const MIN_BCRYPT_COST: u32 = 4;

/// Maximum cost factor accepted by the bcrypt algorithm
pub const MAX_BCRYPT_COST: u32 = 31;

/// Total length of an encoded bcrypt hash
///
/// Any column that stores a gated credential must be a variable-length
/// string type holding at least this many characters.
pub const CREDENTIAL_COLUMN_LENGTH: usize = 60;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Minimum name length requirement
pub const MIN_NAME_LENGTH: u64 = 1;
