//! Core use-case services.
//!
//! # Responsibility
//! - Validate input and orchestrate gateway calls into use-case APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod course_service;
