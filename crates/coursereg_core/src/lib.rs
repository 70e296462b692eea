//! Core domain logic for the course registry.
//! This crate is the single source of truth for course invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, DatabaseConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::course::{
    is_valid_code, Course, CourseId, CourseValidationError, MAX_CREDITS, MIN_CREDITS,
};
pub use repo::course_repo::{CourseRepository, RepoError, RepoResult, SqliteCourseRepository};
pub use repo::memory_repo::InMemoryCourseRepository;
pub use service::course_service::{CourseService, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
