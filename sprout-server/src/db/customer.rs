//! Customer Repository

use dashmap::mapref::entry::Entry;
use shared::models::{Customer, CustomerCreate};
use uuid::Uuid;

use super::{RepoError, RepoResult, Store};

#[derive(Clone)]
pub struct CustomerRepository {
    store: Store,
}

impl CustomerRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Create a customer profile for an existing user
    pub fn create(&self, data: CustomerCreate) -> RepoResult<Customer> {
        if !self.store.users.contains_key(&data.user_id) {
            return Err(RepoError::NotFound(format!(
                "User with ID: {} not found.",
                data.user_id
            )));
        }
        // One profile per user, enforced atomically through the index
        match self.store.customers_by_user.entry(data.user_id) {
            Entry::Occupied(_) => Err(RepoError::Duplicate(format!(
                "Customer for user {} already exists.",
                data.user_id
            ))),
            Entry::Vacant(slot) => {
                let customer = Customer {
                    id: Uuid::new_v4(),
                    customer_name: data.customer_name,
                    information: data.information,
                    user_id: data.user_id,
                };
                self.store.customers.insert(customer.id, customer.clone());
                slot.insert(customer.id);
                Ok(customer)
            }
        }
    }

    pub fn find_by_id(&self, id: &Uuid) -> RepoResult<Customer> {
        self.store
            .customers
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RepoError::NotFound(format!("Customer with ID: {} not found.", id)))
    }

    pub fn find_by_user_id(&self, user_id: &Uuid) -> Option<Customer> {
        let id = *self.store.customers_by_user.get(user_id)?;
        self.store.customers.get(&id).map(|entry| entry.value().clone())
    }
}
