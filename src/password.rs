use crate::error::{AppError, AppResult};

/// One-way bcrypt hashing for account passwords.
///
/// The cost factor is fixed per instance; production uses
/// [`bcrypt::DEFAULT_COST`], tests drop to bcrypt's minimum cost (4) to stay fast.
/// Hashes produced with any cost verify with any instance.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: bcrypt::DEFAULT_COST }
    }
}

impl PasswordHasher {
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn hash(&self, plaintext: &str) -> AppResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| AppError::PasswordHash(e.to_string()))
    }

    /// Fails with [`AppError::CredentialMismatch`] on a wrong or empty
    /// plaintext and on a hash that cannot be parsed; the cases are not told apart.
    pub fn verify(&self, hash: &str, plaintext: &str) -> AppResult<()> {
        if plaintext.is_empty() {
            return Err(AppError::CredentialMismatch);
        }
        match bcrypt::verify(plaintext, hash) {
            Ok(true) => Ok(()),
            Ok(false) | Err(_) => Err(AppError::CredentialMismatch),
        }
    }
}
