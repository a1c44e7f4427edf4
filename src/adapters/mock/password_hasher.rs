use crate::ports::password_hasher::PasswordHasher as PasswordHasherTrait;
use crate::ports::Result;

/// Mock implementation of PasswordHasher
///
/// Produces a deterministic, non-plaintext marker so tests stay fast.
/// Never use outside of tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasherTrait for PasswordHasher {
    fn encode(&self, plaintext: &str) -> Result<String> {
        let reversed: String = plaintext.chars().rev().collect();
        Ok(format!("{{mock}}{reversed}"))
    }
}
