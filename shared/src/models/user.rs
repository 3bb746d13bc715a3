//! User Model

use super::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account record. The email doubles as the login identity and
/// is unique across the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Argon2 PHC-string hash. Never leaves the server.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub username: String,
    pub mobile_number: String,
    pub role: Role,
}
