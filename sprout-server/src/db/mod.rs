//! Store Module
//!
//! Repository layer over in-memory concurrent maps. Persistence
//! engines are out of scope; the repositories keep the same seam the
//! HTTP handlers would use against a durable store, including the
//! `find_by_email` contract the principal resolver depends on.

pub mod cart;
pub mod course;
pub mod customer;
pub mod order;
pub mod review;
pub mod user;

pub use cart::CartRepository;
pub use course::CourseRepository;
pub use customer::CustomerRepository;
pub use order::OrderRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;

use std::sync::Arc;

use dashmap::DashMap;
use shared::models::{Cart, Course, Customer, Order, Review, User};
use thiserror::Error;
use uuid::Uuid;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type RepoResult<T> = Result<T, RepoError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Concurrent entity tables shared across requests
///
/// Cloning shares the underlying maps (everything is behind `Arc`).
///
/// The `*_by_*` maps are unique secondary indexes. Creation goes
/// through their `entry` API so the uniqueness check and the insert
/// are one atomic step; a plain contains-then-insert over the primary
/// map would let two concurrent creations both pass the check.
#[derive(Clone, Default)]
pub struct Store {
    pub(crate) users: Arc<DashMap<Uuid, User>>,
    pub(crate) customers: Arc<DashMap<Uuid, Customer>>,
    pub(crate) courses: Arc<DashMap<Uuid, Course>>,
    pub(crate) carts: Arc<DashMap<Uuid, Cart>>,
    pub(crate) orders: Arc<DashMap<Uuid, Order>>,
    pub(crate) reviews: Arc<DashMap<Uuid, Review>>,
    /// login identity -> user id
    pub(crate) users_by_email: Arc<DashMap<String, Uuid>>,
    /// owning user id -> customer id (one profile per user)
    pub(crate) customers_by_user: Arc<DashMap<Uuid, Uuid>>,
    /// customer id -> cart id (one cart per customer)
    pub(crate) carts_by_customer: Arc<DashMap<Uuid, Uuid>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.clone())
    }

    pub fn customers(&self) -> CustomerRepository {
        CustomerRepository::new(self.clone())
    }

    pub fn courses(&self) -> CourseRepository {
        CourseRepository::new(self.clone())
    }

    pub fn carts(&self) -> CartRepository {
        CartRepository::new(self.clone())
    }

    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(self.clone())
    }

    pub fn reviews(&self) -> ReviewRepository {
        ReviewRepository::new(self.clone())
    }
}
