//! Course Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Course catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub course_type: String,
    pub course_image_url: String,
    pub course_details: String,
    pub course_price: f64,
}

/// Create course payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCreate {
    pub course_type: String,
    pub course_image_url: String,
    pub course_details: String,
    pub course_price: f64,
}

/// Update course payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_price: Option<f64>,
}
