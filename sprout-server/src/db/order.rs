//! Order Repository

use super::{RepoError, RepoResult, Store};
use shared::models::{Order, OrderCreate};
use uuid::Uuid;

const ORDER_NOT_FOUND: &str = "Order not found with ID: ";

#[derive(Clone)]
pub struct OrderRepository {
    store: Store,
}

impl OrderRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Place an order; the price is fixed from the catalog at
    /// creation time.
    pub fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        if !self.store.customers.contains_key(&data.customer_id) {
            return Err(RepoError::NotFound(format!(
                "Customer with ID: {} not found.",
                data.customer_id
            )));
        }
        if data.course_ids.is_empty() {
            return Err(RepoError::Validation(
                "Order must contain at least one course".to_string(),
            ));
        }

        let mut order_price = 0.0;
        for id in &data.course_ids {
            let course = self.store.courses.get(id).ok_or_else(|| {
                RepoError::NotFound(format!("Course with ID: {} not found.", id))
            })?;
            order_price += course.value().course_price;
        }

        let order = Order {
            id: Uuid::new_v4(),
            order_price,
            course_ids: data.course_ids,
            customer_id: data.customer_id,
            status: data.status,
        };
        self.store.orders.insert(order.id, order.clone());
        Ok(order)
    }

    pub fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .store
            .orders
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        if orders.is_empty() {
            return Err(RepoError::NotFound("No Orders Found".to_string()));
        }
        Ok(orders)
    }

    pub fn find_by_id(&self, id: &Uuid) -> RepoResult<Order> {
        self.store
            .orders
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RepoError::NotFound(format!("{}{}", ORDER_NOT_FOUND, id)))
    }

    pub fn find_by_customer_id(&self, customer_id: &Uuid) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .store
            .orders
            .iter()
            .filter(|entry| entry.value().customer_id == *customer_id)
            .map(|entry| entry.value().clone())
            .collect();
        if orders.is_empty() {
            return Err(RepoError::NotFound(format!(
                "No orders for customer with ID: {}",
                customer_id
            )));
        }
        Ok(orders)
    }

    pub fn update_status(&self, id: &Uuid, status: &str) -> RepoResult<Order> {
        let mut entry = self
            .store
            .orders
            .get_mut(id)
            .ok_or_else(|| RepoError::NotFound(format!("{}{}", ORDER_NOT_FOUND, id)))?;
        let order = entry.value_mut();
        order.status = status.to_string();
        Ok(order.clone())
    }

    pub fn delete(&self, id: &Uuid) -> RepoResult<bool> {
        self.store
            .orders
            .remove(id)
            .map(|_| true)
            .ok_or_else(|| RepoError::NotFound(format!("{}{}", ORDER_NOT_FOUND, id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CourseCreate, CustomerCreate, Role};

    fn seeded() -> (Store, Uuid, Uuid) {
        let store = Store::new();
        let user = store
            .users()
            .create("o@d.com", "hash", "o", "123", Role::User)
            .unwrap();
        let customer = store
            .customers()
            .create(CustomerCreate {
                customer_name: "O".to_string(),
                information: "".to_string(),
                user_id: user.id,
            })
            .unwrap();
        let course = store
            .courses()
            .create(CourseCreate {
                course_type: "Go".to_string(),
                course_image_url: "u".to_string(),
                course_details: "d".to_string(),
                course_price: 25.0,
            })
            .unwrap();
        (store, customer.id, course.id)
    }

    #[test]
    fn order_price_comes_from_catalog() {
        let (store, customer_id, course_id) = seeded();
        let order = store
            .orders()
            .create(OrderCreate {
                customer_id,
                course_ids: vec![course_id, course_id],
                status: "PLACED".to_string(),
            })
            .unwrap();
        assert_eq!(order.order_price, 50.0);
    }

    #[test]
    fn status_updates_in_place() {
        let (store, customer_id, course_id) = seeded();
        let orders = store.orders();
        let order = orders
            .create(OrderCreate {
                customer_id,
                course_ids: vec![course_id],
                status: "PLACED".to_string(),
            })
            .unwrap();
        let updated = orders.update_status(&order.id, "SHIPPED").unwrap();
        assert_eq!(updated.status, "SHIPPED");
    }

    #[test]
    fn empty_store_reports_no_orders() {
        let store = Store::new();
        assert!(matches!(
            store.orders().find_all(),
            Err(RepoError::NotFound(_))
        ));
    }
}
