//! Review Repository

use super::{RepoError, RepoResult, Store};
use chrono::Utc;
use shared::models::{Review, ReviewCreate};
use uuid::Uuid;

#[derive(Clone)]
pub struct ReviewRepository {
    store: Store,
}

impl ReviewRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn create(&self, data: ReviewCreate) -> RepoResult<Review> {
        if !self.store.customers.contains_key(&data.customer_id) {
            return Err(RepoError::NotFound(format!(
                "Customer with ID: {} not found.",
                data.customer_id
            )));
        }
        if !(1..=5).contains(&data.rating) {
            return Err(RepoError::Validation(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        let review = Review {
            id: Uuid::new_v4(),
            subject: data.subject,
            body: data.body,
            rating: data.rating,
            date_created: Utc::now(),
            customer_id: data.customer_id,
        };
        self.store.reviews.insert(review.id, review.clone());
        Ok(review)
    }

    pub fn find_all(&self) -> Vec<Review> {
        self.store
            .reviews
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn find_by_id(&self, id: &Uuid) -> RepoResult<Review> {
        self.store
            .reviews
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RepoError::NotFound(format!("Review not found with ID: {}", id)))
    }

    /// Reviews written by the customer tied to the given user account.
    pub fn find_by_user_id(&self, user_id: &Uuid) -> RepoResult<Vec<Review>> {
        let customer = self
            .store
            .customers()
            .find_by_user_id(user_id)
            .ok_or_else(|| {
                RepoError::NotFound(format!("Customer not found for user ID: {}", user_id))
            })?;
        Ok(self
            .store
            .reviews
            .iter()
            .filter(|entry| entry.value().customer_id == customer.id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    pub fn delete(&self, id: &Uuid) -> RepoResult<bool> {
        self.store
            .reviews
            .remove(id)
            .map(|_| true)
            .ok_or_else(|| RepoError::NotFound(format!("Review not found with ID: {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CustomerCreate, Role};

    fn seeded() -> (Store, Uuid, Uuid) {
        let store = Store::new();
        let user = store
            .users()
            .create("r@d.com", "hash", "r", "123", Role::User)
            .unwrap();
        let customer = store
            .customers()
            .create(CustomerCreate {
                customer_name: "R".to_string(),
                information: "".to_string(),
                user_id: user.id,
            })
            .unwrap();
        (store, user.id, customer.id)
    }

    #[test]
    fn review_gets_a_creation_date() {
        let (store, _, customer_id) = seeded();
        let review = store
            .reviews()
            .create(ReviewCreate {
                subject: "Great".to_string(),
                body: "Learned a lot".to_string(),
                rating: 5,
                customer_id,
            })
            .unwrap();
        assert!(review.date_created <= Utc::now());
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let (store, _, customer_id) = seeded();
        let result = store.reviews().create(ReviewCreate {
            subject: "Bad".to_string(),
            body: "".to_string(),
            rating: 9,
            customer_id,
        });
        assert!(matches!(result, Err(RepoError::Validation(_))));
    }

    #[test]
    fn reviews_resolve_through_the_customer_link() {
        let (store, user_id, customer_id) = seeded();
        store
            .reviews()
            .create(ReviewCreate {
                subject: "Ok".to_string(),
                body: "body".to_string(),
                rating: 3,
                customer_id,
            })
            .unwrap();
        let reviews = store.reviews().find_by_user_id(&user_id).unwrap();
        assert_eq!(reviews.len(), 1);
    }
}
