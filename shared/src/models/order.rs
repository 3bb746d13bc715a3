//! Order Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placed order. The price is fixed from the course catalog at
/// creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub order_price: f64,
    pub course_ids: Vec<Uuid>,
    pub customer_id: Uuid,
    pub status: String,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_id: Uuid,
    pub course_ids: Vec<Uuid>,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "PLACED".to_string()
}
