use async_trait::async_trait;

use crate::domain::{course::Course, errors::DomainError};

pub mod in_memory_course_repository;

/// Storage seam for course records.
///
/// Implementations keep insertion order and resolve ids to the first
/// matching record.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Course>, DomainError>;
    async fn insert(&self, course: Course) -> Result<Course, DomainError>;
    async fn get_by_id(&self, id: &str) -> Result<Course, DomainError>;
    async fn replace(&self, id: &str, course: Course) -> Result<Course, DomainError>;
    async fn remove(&self, id: &str) -> Result<Course, DomainError>;
}
