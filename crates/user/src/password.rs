use std::sync::LazyLock;

use argon2::{
    Argon2, Params,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a password using Argon2id with OWASP-recommended parameters
/// - Memory: 19456 KB (19 MB)
/// - Iterations: 2
/// - Parallelism: 1
pub fn hash_password(password: &str) -> hutbook_shared::Result<String> {
    let params = Params::new(19456, 2, 1, None)
        .map_err(|e| hutbook_shared::Error::Server(e.to_string()))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

    let salt = SaltString::generate(&mut OsRng);

    Ok(argon2.hash_password(password.as_bytes(), &salt)?.to_string())
}

/// Verify a password against a stored PHC string. A malformed hash is an
/// error, a wrong password is `Ok(false)`.
pub fn verify_password(password: &str, hash: &str) -> hutbook_shared::Result<bool> {
    let parsed_hash = PasswordHash::new(hash)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("hutbook-unknown-account").ok());

/// Runs a full verification against a throwaway hash so a login for an unknown
/// username costs as much as one with a wrong password.
pub fn verify_dummy(password: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
}
