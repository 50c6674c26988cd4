//! Admin credential record.

use serde::{Deserialize, Serialize};

/// An admin login credential. Only the seed record exists; the store
/// exposes no user CRUD beyond the login check.
///
/// The password is plaintext: a demo-grade single-admin setup with no
/// security model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password: String,
}
