//! Cart Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shopping cart. One per customer; the total is recomputed by the
/// store whenever the course list changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub course_ids: Vec<Uuid>,
    pub total_amount: f64,
}

/// Create cart payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartCreate {
    pub customer_id: Uuid,
    #[serde(default)]
    pub course_ids: Vec<Uuid>,
}

/// Update cart payload (replaces the course list)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartUpdate {
    pub course_ids: Vec<Uuid>,
}
