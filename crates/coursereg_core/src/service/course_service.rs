//! Course use-case service.
//!
//! # Responsibility
//! - Enforce field-level invariants before any store access.
//! - Delegate persistence to the gateway it owns.
//!
//! # Invariants
//! - Validation failures never reach the gateway.
//! - The service is the only caller of its gateway.
//! - Each operation is one synchronous validate-then-delegate step.

use crate::model::course::{Course, CourseId, CourseValidationError};
use crate::repo::course_repo::{CourseRepository, RepoError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error split into the two kinds the presentation layer renders.
#[derive(Debug)]
pub enum ServiceError {
    /// Input rejected before any store access.
    Validation(CourseValidationError),
    /// Store operation failed and did not take effect.
    Persistence(RepoError),
}

impl ServiceError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<CourseValidationError> for ServiceError {
    fn from(value: CourseValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Persistence(value)
    }
}

/// Validation and orchestration facade over a course gateway.
pub struct CourseService<R: CourseRepository> {
    repo: R,
}

impl<R: CourseRepository> CourseService<R> {
    /// Creates a service owning the provided gateway.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read access to the gateway, for inspection in tests and tooling.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validates and inserts a new course.
    ///
    /// The store assigns the id; `course.id` is ignored. Duplicate codes are
    /// accepted. Returns the affected row count reported by the store.
    pub fn add(&self, course: &Course) -> ServiceResult<usize> {
        course.validate()?;
        let inserted = self.repo.insert_course(course)?;
        info!("event=course_add module=service status=ok rows={inserted}");
        Ok(inserted)
    }

    /// Returns every course ordered by ascending id.
    pub fn list(&self) -> ServiceResult<Vec<Course>> {
        Ok(self.repo.list_courses()?)
    }

    /// Validates and overwrites the row identified by `course.id`.
    ///
    /// Field checks run first, then the identity check. An id matching no
    /// row returns `Ok(0)`.
    pub fn update(&self, course: &Course) -> ServiceResult<usize> {
        course.validate()?;
        if !course.is_persisted() {
            return Err(CourseValidationError::MissingId.into());
        }
        let updated = self.repo.update_course(course)?;
        info!(
            "event=course_update module=service status=ok course_id={} rows={updated}",
            course.id
        );
        Ok(updated)
    }

    /// Deletes the row with `id`; a missing row returns `Ok(0)`.
    pub fn delete(&self, id: CourseId) -> ServiceResult<usize> {
        if id <= 0 {
            return Err(CourseValidationError::InvalidDeleteId(id).into());
        }
        let deleted = self.repo.delete_course(id)?;
        info!("event=course_delete module=service status=ok course_id={id} rows={deleted}");
        Ok(deleted)
    }

    /// Lookup by id is part of the contract but not wired up: this always
    /// returns `Ok(None)` without touching the store.
    ///
    /// `CourseRepository::fetch_course` is implemented; whether the service
    /// should expose it is an open product decision.
    pub fn get_by_id(&self, id: CourseId) -> ServiceResult<Option<Course>> {
        warn!("event=course_get_by_id module=service status=unimplemented course_id={id}");
        Ok(None)
    }
}
