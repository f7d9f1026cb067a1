// ============================================================================
// Course Registry
// ============================================================================

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod state;

pub use app::{build_router, in_memory_state};
pub use domain::course::Course;
pub use domain::errors::DomainError;
