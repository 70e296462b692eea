//! Domain model for the course registry.
//!
//! # Responsibility
//! - Define the canonical `Course` record used by service and repositories.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Every persisted course is identified by a positive store-assigned id.

pub mod course;
