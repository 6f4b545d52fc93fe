use crate::{AuthError, Result as AuthErrorResult};

use circle_core::{CoreError, CoreResult, CredentialHasher};

use std::panic::Location;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use error_location::ErrorLocation;

/// Argon2id password hashing, stored as PHC strings (`$argon2id$v=19$m=..`).
///
/// Both operations are CPU and memory bound and run on tokio's blocking
/// pool. Verification reads the cost parameters from the stored hash, so
/// hashes created under older settings keep verifying.
#[derive(Debug, Clone)]
pub struct Argon2CredentialHasher {
    params: Params,
}

impl Argon2CredentialHasher {
    /// argon2 crate defaults: 19 MiB, 2 passes, 1 lane
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    #[track_caller]
    pub fn with_params(
        memory_kib: u32,
        time_cost: u32,
        parallelism: u32,
    ) -> AuthErrorResult<Self> {
        let params = Params::new(memory_kib, time_cost, parallelism, None).map_err(|e| {
            AuthError::HashParams {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Self { params })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    fn hash_blocking(&self, password: &str) -> CoreResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| CoreError::store(format!("Password hashing failed: {e}")))
    }

    fn verify_blocking(&self, password: &str, encoded_hash: &str) -> bool {
        let parsed = match PasswordHash::new(encoded_hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("Stored password hash is malformed: {}", e);
                return false;
            }
        };

        self.argon2()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

impl Default for Argon2CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    async fn hash(&self, password: &str) -> CoreResult<String> {
        let hasher = self.clone();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash_blocking(&password))
            .await
            .map_err(|e| CoreError::store(format!("Password hashing task failed: {e}")))?
    }

    async fn verify(&self, password: &str, encoded_hash: &str) -> bool {
        let hasher = self.clone();
        let password = password.to_owned();
        let encoded_hash = encoded_hash.to_owned();

        match tokio::task::spawn_blocking(move || hasher.verify_blocking(&password, &encoded_hash))
            .await
        {
            Ok(verified) => verified,
            Err(e) => {
                log::error!("Password verification task failed: {}", e);
                false
            }
        }
    }
}
