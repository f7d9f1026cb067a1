use serde::{Deserialize, Serialize};

use crate::domain::course::CourseFields;

/// Body accepted by both create and update.
///
/// `id` is part of the wire shape so clients may echo a record back, but it
/// never reaches storage: create assigns a fresh one and update takes the
/// path id.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub level: String,
    pub duration: i64,
}

impl CourseRequest {
    pub fn into_fields(self) -> CourseFields {
        CourseFields {
            name: self.name,
            description: self.description,
            level: self.level,
            duration: self.duration,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
