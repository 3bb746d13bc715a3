//! Shared types for the Sprout e-learning platform
//!
//! Domain models and API request/response types used by the server
//! and its integration tests.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Cart, Course, Customer, Order, Review, Role, User};
