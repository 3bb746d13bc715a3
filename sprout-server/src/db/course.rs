//! Course Repository

use super::{RepoError, RepoResult, Store};
use shared::models::{Course, CourseCreate, CourseUpdate};
use uuid::Uuid;

const COURSE_NOT_FOUND: &str = "Course with ID: ";

#[derive(Clone)]
pub struct CourseRepository {
    store: Store,
}

impl CourseRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn create(&self, data: CourseCreate) -> RepoResult<Course> {
        if data.course_price < 0.0 {
            return Err(RepoError::Validation(
                "Course price cannot be negative".to_string(),
            ));
        }

        let course = Course {
            id: Uuid::new_v4(),
            course_type: data.course_type,
            course_image_url: data.course_image_url,
            course_details: data.course_details,
            course_price: data.course_price,
        };
        self.store.courses.insert(course.id, course.clone());
        Ok(course)
    }

    pub fn find_all(&self) -> Vec<Course> {
        self.store
            .courses
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn find_by_id(&self, id: &Uuid) -> RepoResult<Course> {
        self.store
            .courses
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RepoError::NotFound(format!("{}{} not found.", COURSE_NOT_FOUND, id)))
    }

    pub fn update(&self, id: &Uuid, data: CourseUpdate) -> RepoResult<Course> {
        let mut entry = self
            .store
            .courses
            .get_mut(id)
            .ok_or_else(|| RepoError::NotFound(format!("{}{} not found.", COURSE_NOT_FOUND, id)))?;

        let course = entry.value_mut();
        if let Some(course_type) = data.course_type {
            course.course_type = course_type;
        }
        if let Some(url) = data.course_image_url {
            course.course_image_url = url;
        }
        if let Some(details) = data.course_details {
            course.course_details = details;
        }
        if let Some(price) = data.course_price {
            if price < 0.0 {
                return Err(RepoError::Validation(
                    "Course price cannot be negative".to_string(),
                ));
            }
            course.course_price = price;
        }
        Ok(course.clone())
    }

    pub fn delete(&self, id: &Uuid) -> RepoResult<bool> {
        self.store
            .courses
            .remove(id)
            .map(|_| true)
            .ok_or_else(|| RepoError::NotFound(format!("{}{} not found.", COURSE_NOT_FOUND, id)))
    }
}
