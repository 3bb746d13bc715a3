//! Domain models
//!
//! Plain data structs for the catalog and commerce entities. IDs are
//! UUIDs generated by the store; relations are held by value (no ORM
//! mapping).

pub mod cart;
pub mod course;
pub mod customer;
pub mod order;
pub mod review;
pub mod role;
pub mod user;

pub use cart::{Cart, CartCreate, CartUpdate};
pub use course::{Course, CourseCreate, CourseUpdate};
pub use customer::{Customer, CustomerCreate};
pub use order::{Order, OrderCreate};
pub use review::{Review, ReviewCreate};
pub use role::Role;
pub use user::User;
