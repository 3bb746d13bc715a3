//! Authentication and authorization
//!
//! - [`jwt`] - token codec (issue, decode, expiry checks)
//! - [`password`] - Argon2 credential hashing and verification
//! - [`principal`] - identity-to-principal resolution against the store
//! - [`middleware`] - per-request authentication filter
//! - [`policy`] - declarative route authorization rules

pub mod jwt;
pub mod middleware;
pub mod password;
pub mod policy;
pub mod principal;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use middleware::{CurrentUserExt, authenticate, enforce_policy};
pub use policy::{Access, AuthorizationPolicy, Rule};
pub use principal::{CurrentUser, Principal, PrincipalResolver, ResolveError};
