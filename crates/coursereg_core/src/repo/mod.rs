//! Persistence gateway abstractions and implementations.
//!
//! # Responsibility
//! - Define the course gateway contract used by the service.
//! - Isolate SQLite query details from validation and orchestration.
//!
//! # Invariants
//! - Gateways never validate course fields; the service does that first.
//! - Alternative stores plug in through `CourseRepository` only.

pub mod course_repo;
pub mod memory_repo;
