use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Carries the resource name, e.g. `"Course"`.
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl DomainError {
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound(resource)
    }
}
