pub mod course;
pub mod errors;
