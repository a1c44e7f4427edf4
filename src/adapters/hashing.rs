use crate::ports::password_hasher::PasswordHasher as PasswordHasherTrait;
use crate::ports::Result;
use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};

/// Argon2id implementation of PasswordHasher
///
/// Every call draws a fresh random salt, so the same password never hashes
/// to the same string twice. The output is a PHC string.
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasherTrait for Argon2PasswordHasher {
    fn encode(&self, plaintext: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| format!("Failed to hash password: {e}"))?;
        Ok(hash.to_string())
    }
}
