use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    application::dto::CourseRequest,
    domain::{course::Course, errors::DomainError},
    infrastructure::CourseRepository,
};

#[derive(Clone)]
pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>, DomainError> {
        let courses = self.repository.list().await?;
        debug!(count = courses.len(), "listed courses");
        Ok(courses)
    }

    /// Stores the payload under a freshly generated id; any id it carries is
    /// discarded.
    pub async fn create_course(&self, request: CourseRequest) -> Result<Course, DomainError> {
        let course = request.into_fields().with_id(Uuid::new_v4().to_string());
        let created = self.repository.insert(course).await?;
        info!(course_id = %created.id, "course created");
        Ok(created)
    }

    pub async fn get_course(&self, id: &str) -> Result<Course, DomainError> {
        debug!(course_id = %id, "fetching course");
        self.repository.get_by_id(id).await
    }

    /// Replaces the whole record. The path id wins over the body id.
    pub async fn update_course(
        &self,
        id: &str,
        request: CourseRequest,
    ) -> Result<Course, DomainError> {
        let replacement = request.into_fields().with_id(id);
        let updated = self.repository.replace(id, replacement).await?;
        info!(course_id = %updated.id, "course replaced");
        Ok(updated)
    }

    /// Removes the record and hands back its last stored value.
    pub async fn delete_course(&self, id: &str) -> Result<Course, DomainError> {
        let removed = self.repository.remove(id).await?;
        info!(course_id = %removed.id, "course deleted");
        Ok(removed)
    }
}
