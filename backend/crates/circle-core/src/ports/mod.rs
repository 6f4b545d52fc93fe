//! Seams between the domain services and their collaborators.
//!
//! Stores are expected to make their guarded writes atomic: a pending
//! request insert must fail as [`InsertOutcome::Duplicate`] rather than race,
//! and a status update must only apply while the row is still pending.

pub mod credential_hasher;
pub mod friend_request_store;
pub mod insert_outcome;
pub mod user_store;
