use cloudpad::cloudpad_core::{ErrorKind, hash_password, verify_password};

#[test]
fn test_hash_password_success() {
    let password = "testpassword123";
    let hash = hash_password(password).unwrap();

    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_hash_password_is_salted() {
    let first = hash_password("secret").unwrap();
    let second = hash_password("secret").unwrap();

    assert_ne!(first, second);
    assert!(verify_password("secret", &first).unwrap());
    assert!(verify_password("secret", &second).unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let hash = hash_password("correctpassword").unwrap();

    assert!(!verify_password("wrongpassword", &hash).unwrap());
}

#[test]
fn test_verify_password_is_case_sensitive() {
    let hash = hash_password("Secret").unwrap();

    assert!(!verify_password("secret", &hash).unwrap());
}

#[test]
fn test_verify_password_malformed_hash() {
    let err = verify_password("secret", "plaintext-not-a-hash").unwrap_err();

    assert_eq!(err.kind, ErrorKind::Internal);
}
