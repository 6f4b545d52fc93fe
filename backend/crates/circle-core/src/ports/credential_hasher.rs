use crate::CoreResult;

use async_trait::async_trait;

/// One-way password hashing, supplied by the auth layer.
///
/// Implementations are expected to be slow on purpose and must not block
/// the calling task while they work.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &str) -> CoreResult<String>;

    /// Malformed hashes verify as false
    async fn verify(&self, password: &str, encoded_hash: &str) -> bool;
}
