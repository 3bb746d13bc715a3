//! User Repository

use dashmap::mapref::entry::Entry;
use shared::models::{Role, User};
use uuid::Uuid;

use super::{RepoError, RepoResult, Store};

#[derive(Clone)]
pub struct UserRepository {
    store: Store,
}

impl UserRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Create a user. The email is the login identity and must be
    /// unique.
    pub fn create(
        &self,
        email: &str,
        password_hash: &str,
        username: &str,
        mobile_number: &str,
        role: Role,
    ) -> RepoResult<User> {
        // Claiming the email slot and inserting are a single atomic
        // step; concurrent registrations race for the entry and only
        // one wins.
        match self.store.users_by_email.entry(email.to_string()) {
            Entry::Occupied(_) => Err(RepoError::Duplicate(format!(
                "User With Email: {} already exists.",
                email
            ))),
            Entry::Vacant(slot) => {
                let user = User {
                    id: Uuid::new_v4(),
                    email: email.to_string(),
                    password_hash: password_hash.to_string(),
                    username: username.to_string(),
                    mobile_number: mobile_number.to_string(),
                    role,
                };
                self.store.users.insert(user.id, user.clone());
                slot.insert(user.id);
                Ok(user)
            }
        }
    }

    /// The collaborator contract the auth core depends on
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let id = *self.store.users_by_email.get(email)?;
        self.find_by_id(&id)
    }

    pub fn find_by_id(&self, id: &Uuid) -> Option<User> {
        self.store.users.get(id).map(|entry| entry.value().clone())
    }
}
