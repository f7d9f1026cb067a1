pub mod courses_handler;
pub mod extract;
pub mod problem;
