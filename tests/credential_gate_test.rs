//! Credential gate integration tests against the real bcrypt encoder.

use std::sync::Arc;

use customer_core::config::CREDENTIAL_COLUMN_LENGTH;
use customer_core::{is_hash_format, BcryptEncoder, CredentialGate};

// Cost 4 is the algorithm's minimum; keeps hashing fast in tests while
// producing exactly the same output shape as production costs.
fn gate() -> CredentialGate {
    CredentialGate::new(Arc::new(BcryptEncoder::new(4)))
}

#[test]
fn test_plaintext_is_hashed_into_a_sixty_char_pattern_match() {
    let stored = gate().to_storage_form(Some("S3cret!")).unwrap().unwrap();

    assert_ne!(stored, "S3cret!");
    assert_eq!(stored.len(), CREDENTIAL_COLUMN_LENGTH);
    assert!(stored.starts_with("$2"));
    assert!(is_hash_format(&stored));
}

#[test]
fn test_second_write_returns_the_identical_string() {
    let gate = gate();
    let first = gate.to_storage_form(Some("S3cret!")).unwrap().unwrap();
    let second = gate.to_storage_form(Some(&first)).unwrap().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_hash_shaped_literal_is_stored_verbatim() {
    // Accepted limitation: a literal password that happens to match the
    // hash shape is indistinguishable from a stored hash and passes through.
    let shaped = "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";
    let stored = gate().to_storage_form(Some(shaped)).unwrap().unwrap();
    assert_eq!(stored, shaped);
}

#[test]
fn test_not_a_real_hash_is_treated_as_plaintext() {
    let stored = gate()
        .to_storage_form(Some("not-a-real-hash"))
        .unwrap()
        .unwrap();
    assert_ne!(stored, "not-a-real-hash");
    assert!(is_hash_format(&stored));
}

#[test]
fn test_single_character_damage_turns_a_hash_back_into_plaintext() {
    let gate = gate();
    let shaped = "$2b$12$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";
    assert_eq!(
        gate.to_storage_form(Some(shaped)).unwrap().unwrap(),
        shaped
    );

    // One character short
    let truncated = &shaped[..shaped.len() - 1];
    let stored = gate.to_storage_form(Some(truncated)).unwrap().unwrap();
    assert_ne!(stored, truncated);
    assert!(is_hash_format(&stored));

    // One character outside the radix-64 alphabet
    let tainted = shaped.replacen('N', "!", 1);
    let stored = gate.to_storage_form(Some(&tainted)).unwrap().unwrap();
    assert_ne!(stored, tainted);
    assert!(is_hash_format(&stored));
}

#[test]
fn test_null_passes_through_on_both_paths() {
    let gate = gate();
    assert_eq!(gate.to_storage_form(None).unwrap(), None);
    assert!(gate.to_domain_form(None).is_none());
}

#[test]
fn test_read_round_trips_the_stored_value() {
    let gate = gate();
    let stored = gate.to_storage_form(Some("S3cret!")).unwrap().unwrap();
    let credential = gate.to_domain_form(Some(stored.clone())).unwrap();
    assert_eq!(credential.as_str(), stored);
}

#[test]
fn test_empty_string_gets_hashed() {
    let stored = gate().to_storage_form(Some("")).unwrap().unwrap();
    assert!(is_hash_format(&stored));
}

#[test]
fn test_gate_is_shareable_across_concurrent_writers() {
    let gate = Arc::new(gate());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let gate = Arc::clone(&gate);
            std::thread::spawn(move || {
                let stored = gate
                    .to_storage_form(Some(&format!("password-{i}")))
                    .unwrap()
                    .unwrap();
                assert!(is_hash_format(&stored));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
