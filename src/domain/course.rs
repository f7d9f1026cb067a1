use serde::{Deserialize, Serialize};

pub const COURSE_RESOURCE: &str = "Course";

/// A stored course record. The `id` is always server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub level: String,
    pub duration: i64,
}

/// Every field of a course except its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseFields {
    pub name: String,
    pub description: Option<String>,
    pub level: String,
    pub duration: i64,
}

impl CourseFields {
    pub fn with_id(self, id: impl Into<String>) -> Course {
        Course {
            id: id.into(),
            name: self.name,
            description: self.description,
            level: self.level,
            duration: self.duration,
        }
    }
}

impl From<Course> for CourseFields {
    fn from(value: Course) -> Self {
        Self {
            name: value.name,
            description: value.description,
            level: value.level,
            duration: value.duration,
        }
    }
}
