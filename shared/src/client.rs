//! Client-related types shared between server and client
//!
//! Request/response types used in API communication.

use crate::models::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Registration request. Creates the user account and its customer
/// profile in one call.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub mobile_number: String,
    pub role: Role,
    #[validate(length(min = 1))]
    pub customer_name: String,
    #[serde(default)]
    pub information: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
    pub token: String,
}

/// Current user information, as observed by authenticated handlers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub authorities: Vec<String>,
}
