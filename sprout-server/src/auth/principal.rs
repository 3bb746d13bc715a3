//! Principal resolution
//!
//! The seam between the stateless token world and the durable store:
//! maps an identity string to the authoritative user record and the
//! authorities derived from its stored role. Invoked at login and on
//! every authenticated request, so a deleted account stops resolving
//! immediately even while its tokens are still signature-valid.

use shared::models::{Role, User};
use thiserror::Error;
use uuid::Uuid;

use crate::db::UserRepository;

/// Resolution errors
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No user record for identity: {0}")]
    IdentityNotFound(String),
}

/// Fully resolved authorization principal
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: Uuid,
    /// Login identity (email)
    pub identity: String,
    /// Stored credential for verification at login
    pub password_hash: String,
    pub role: Role,
    /// Authority strings derived from the stored role
    pub authorities: Vec<String>,
}

impl From<User> for Principal {
    fn from(user: User) -> Self {
        let authorities = vec![user.role.authority().to_string()];
        Self {
            user_id: user.id,
            identity: user.email,
            password_hash: user.password_hash,
            role: user.role,
            authorities,
        }
    }
}

/// Resolves identity strings against the user store
#[derive(Clone)]
pub struct PrincipalResolver {
    users: UserRepository,
}

impl PrincipalResolver {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Load the durable record for `identity`
    pub fn resolve(&self, identity: &str) -> Result<Principal, ResolveError> {
        self.users
            .find_by_email(identity)
            .map(Principal::from)
            .ok_or_else(|| ResolveError::IdentityNotFound(identity.to_string()))
    }
}

/// Request-scoped authenticated context
///
/// Installed into the request extensions by the authentication
/// middleware and discarded when the request completes. Carries the
/// role re-derived from the stored record, never the token's embedded
/// role claim.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    /// Login identity (email)
    pub identity: String,
    pub role: Role,
    pub authorities: Vec<String>,
}

impl From<Principal> for CurrentUser {
    fn from(p: Principal) -> Self {
        Self {
            id: p.user_id,
            identity: p.identity,
            role: p.role,
            authorities: p.authorities,
        }
    }
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}
