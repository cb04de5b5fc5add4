use anyhow::{anyhow, bail};
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use serde_derive::{Deserialize, Serialize};

/// Represents stored user credentials. The password is only ever kept in hashed form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoredCredentials {
    pub password_hash: String,
}

impl StoredCredentials {
    /// Tries to create `StoredCredentials` with `password_hash` generated from the provided password.
    pub fn try_from_password(password: &str) -> anyhow::Result<Self> {
        if password.is_empty() {
            bail!("Password cannot be empty.");
        }

        Ok(Self {
            password_hash: Argon2::default()
                .hash_password(password.as_bytes(), &SaltString::generate(&mut OsRng))
                .map(|hash| hash.to_string())
                .map_err(|err| anyhow!("Failed to generate a password hash: {}", err))?,
        })
    }

    /// Checks whether the provided password matches the stored hash.
    pub fn verify_password(&self, password: &str) -> anyhow::Result<bool> {
        let parsed_hash = PasswordHash::new(&self.password_hash)
            .map_err(|err| anyhow!("Failed to parse a password hash: {}", err))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
