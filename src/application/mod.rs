pub mod course_service;
pub mod dto;
