//! Customer Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customer profile, one per registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub customer_name: String,
    pub information: String,
    pub user_id: Uuid,
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub customer_name: String,
    pub information: String,
    pub user_id: Uuid,
}
