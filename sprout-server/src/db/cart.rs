//! Cart Repository

use dashmap::mapref::entry::Entry;
use shared::models::{Cart, CartCreate, CartUpdate};
use uuid::Uuid;

use super::{RepoError, RepoResult, Store};

const CART_NOT_FOUND: &str = "Cart not found with ID: ";

#[derive(Clone)]
pub struct CartRepository {
    store: Store,
}

impl CartRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Sum the catalog prices for the referenced courses. Fails if
    /// any course id does not resolve.
    fn total_for(&self, course_ids: &[Uuid]) -> RepoResult<f64> {
        let mut total = 0.0;
        for id in course_ids {
            let course = self.store.courses.get(id).ok_or_else(|| {
                RepoError::NotFound(format!("Course with ID: {} not found.", id))
            })?;
            total += course.value().course_price;
        }
        Ok(total)
    }

    /// Create a cart for a customer (one cart per customer)
    pub fn create(&self, data: CartCreate) -> RepoResult<Cart> {
        if !self.store.customers.contains_key(&data.customer_id) {
            return Err(RepoError::NotFound(format!(
                "Customer with ID: {} not found.",
                data.customer_id
            )));
        }
        let total_amount = self.total_for(&data.course_ids)?;

        // One cart per customer, enforced atomically through the index
        match self.store.carts_by_customer.entry(data.customer_id) {
            Entry::Occupied(_) => Err(RepoError::Duplicate(format!(
                "Cart for customer {} already exists.",
                data.customer_id
            ))),
            Entry::Vacant(slot) => {
                let cart = Cart {
                    id: Uuid::new_v4(),
                    customer_id: data.customer_id,
                    course_ids: data.course_ids,
                    total_amount,
                };
                self.store.carts.insert(cart.id, cart.clone());
                slot.insert(cart.id);
                Ok(cart)
            }
        }
    }

    /// Replace the course list and recompute the total
    pub fn update(&self, id: &Uuid, data: CartUpdate) -> RepoResult<Cart> {
        let total_amount = self.total_for(&data.course_ids)?;
        let mut entry = self
            .store
            .carts
            .get_mut(id)
            .ok_or_else(|| RepoError::NotFound(format!("{}{}", CART_NOT_FOUND, id)))?;

        let cart = entry.value_mut();
        cart.course_ids = data.course_ids;
        cart.total_amount = total_amount;
        Ok(cart.clone())
    }

    /// Remove one course from the cart
    pub fn remove_course(&self, cart_id: &Uuid, course_id: &Uuid) -> RepoResult<Cart> {
        let mut entry = self
            .store
            .carts
            .get_mut(cart_id)
            .ok_or_else(|| RepoError::NotFound(format!("{}{}", CART_NOT_FOUND, cart_id)))?;

        let cart = entry.value_mut();
        let before = cart.course_ids.len();
        cart.course_ids.retain(|id| id != course_id);
        if cart.course_ids.len() == before {
            return Err(RepoError::NotFound(format!(
                "Course with ID: {} not found in cart.",
                course_id
            )));
        }

        // Recompute from what remains; missing catalog entries are
        // simply no longer priced.
        cart.total_amount = cart
            .course_ids
            .iter()
            .filter_map(|id| self.store.courses.get(id).map(|c| c.value().course_price))
            .sum();
        Ok(cart.clone())
    }

    pub fn find_all(&self) -> Vec<Cart> {
        self.store
            .carts
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn find_by_customer_id(&self, customer_id: &Uuid) -> Option<Cart> {
        let id = *self.store.carts_by_customer.get(customer_id)?;
        self.store.carts.get(&id).map(|entry| entry.value().clone())
    }

    /// Cart lookup through the customer's owning user
    pub fn find_by_user_id(&self, user_id: &Uuid) -> Option<Cart> {
        let customer = self.store.customers().find_by_user_id(user_id)?;
        self.find_by_customer_id(&customer.id)
    }

    /// Empty the cart for a user, keeping the cart record
    pub fn clear_by_user_id(&self, user_id: &Uuid) -> RepoResult<()> {
        let cart = self
            .find_by_user_id(user_id)
            .ok_or_else(|| RepoError::NotFound(format!("Cart of user not found: {}", user_id)))?;

        if let Some(mut entry) = self.store.carts.get_mut(&cart.id) {
            let cart = entry.value_mut();
            cart.course_ids.clear();
            cart.total_amount = 0.0;
        }
        Ok(())
    }
}
