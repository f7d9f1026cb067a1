use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{
        course::{COURSE_RESOURCE, Course},
        errors::DomainError,
    },
    infrastructure::CourseRepository,
};

/// Process-lifetime course registry backed by an insertion-ordered `Vec`.
///
/// The lock is held across the lookup and the mutation of every write, so a
/// located position is never stale when it is used.
#[derive(Default)]
pub struct InMemoryCourseRepository {
    courses: RwLock<Vec<Course>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Position of the first course carrying `id`.
fn locate(courses: &[Course], id: &str) -> Result<usize, DomainError> {
    courses
        .iter()
        .position(|course| course.id == id)
        .ok_or_else(|| DomainError::not_found(COURSE_RESOURCE))
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn list(&self) -> Result<Vec<Course>, DomainError> {
        Ok(self.courses.read().await.clone())
    }

    async fn insert(&self, course: Course) -> Result<Course, DomainError> {
        self.courses.write().await.push(course.clone());
        Ok(course)
    }

    async fn get_by_id(&self, id: &str) -> Result<Course, DomainError> {
        let courses = self.courses.read().await;
        let index = locate(&courses, id)?;
        Ok(courses[index].clone())
    }

    async fn replace(&self, id: &str, course: Course) -> Result<Course, DomainError> {
        let mut courses = self.courses.write().await;
        let index = locate(&courses, id)?;
        courses[index] = course.clone();
        Ok(course)
    }

    async fn remove(&self, id: &str) -> Result<Course, DomainError> {
        let mut courses = self.courses.write().await;
        let index = locate(&courses, id)?;
        Ok(courses.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, name: &str) -> Course {
        Course {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            level: "Beginner".to_string(),
            duration: 30,
        }
    }

    async fn seeded(courses: &[Course]) -> InMemoryCourseRepository {
        let repo = InMemoryCourseRepository::new();
        for course in courses {
            repo.insert(course.clone())
                .await
                .expect("insert should succeed");
        }
        repo
    }

    #[test]
    fn locate_returns_first_match() {
        let courses = vec![course("a", "first"), course("b", "other"), course("a", "dup")];
        assert_eq!(locate(&courses, "a").unwrap(), 0);
        assert_eq!(locate(&courses, "b").unwrap(), 1);
        assert_eq!(
            locate(&courses, "zzz").unwrap_err(),
            DomainError::NotFound("Course")
        );
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let repo = seeded(&[course("c", "C"), course("a", "A"), course("b", "B")]).await;

        let ids = repo
            .list()
            .await
            .expect("list should succeed")
            .into_iter()
            .map(|course| course.id)
            .collect::<Vec<_>>();

        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn replace_keeps_position() {
        let repo = seeded(&[course("a", "A"), course("b", "B"), course("c", "C")]).await;

        let replaced = repo
            .replace("b", course("b", "B2"))
            .await
            .expect("replace should succeed");
        assert_eq!(replaced.name, "B2");

        let names = repo
            .list()
            .await
            .expect("list should succeed")
            .into_iter()
            .map(|course| course.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["A", "B2", "C"]);
    }

    #[tokio::test]
    async fn remove_returns_record_and_closes_gap() {
        let repo = seeded(&[course("a", "A"), course("b", "B"), course("c", "C")]).await;

        let removed = repo.remove("b").await.expect("remove should succeed");
        assert_eq!(removed, course("b", "B"));

        let ids = repo
            .list()
            .await
            .expect("list should succeed")
            .into_iter()
            .map(|course| course.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn duplicate_ids_resolve_to_first_match() {
        let repo = seeded(&[course("dup", "first"), course("dup", "second")]).await;

        let found = repo.get_by_id("dup").await.expect("get should succeed");
        assert_eq!(found.name, "first");

        repo.replace("dup", course("dup", "first-replaced"))
            .await
            .expect("replace should succeed");
        let removed = repo.remove("dup").await.expect("remove should succeed");
        assert_eq!(removed.name, "first-replaced");

        let remaining = repo.list().await.expect("list should succeed");
        assert_eq!(remaining, vec![course("dup", "second")]);
    }

    #[tokio::test]
    async fn missing_id_leaves_collection_unchanged() {
        let repo = seeded(&[course("a", "A")]).await;
        let before = repo.list().await.expect("list should succeed");

        assert!(repo.get_by_id("missing").await.is_err());
        assert!(repo.replace("missing", course("missing", "X")).await.is_err());
        assert!(repo.remove("missing").await.is_err());

        assert_eq!(repo.list().await.expect("list should succeed"), before);
    }
}
