//! Review Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Course review left by a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub subject: String,
    pub body: String,
    pub rating: i32,
    pub date_created: DateTime<Utc>,
    pub customer_id: Uuid,
}

/// Create review payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub subject: String,
    pub body: String,
    pub rating: i32,
    pub customer_id: Uuid,
}
