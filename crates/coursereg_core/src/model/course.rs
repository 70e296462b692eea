//! Course domain model.
//!
//! # Responsibility
//! - Define the single persisted record of the registry.
//! - Own the field-level validation rules shared by every write path.
//!
//! # Invariants
//! - `id == 0` marks a course that has not been persisted yet.
//! - `id` is assigned by the store and never changes afterwards.
//! - Validation reports only the first failing check, in the order
//!   code -> name -> credits -> instructor.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned surrogate key. `0` means "not persisted yet".
pub type CourseId = i64;

/// Lowest accepted credit count (inclusive).
pub const MIN_CREDITS: i64 = 1;
/// Highest accepted credit count (inclusive).
pub const MAX_CREDITS: i64 = 35;

static COURSE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{4,6}[0-9]{3}$").expect("valid course code regex"));

/// Field-level rejection raised before any store access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseValidationError {
    /// Code does not match 4-6 letters followed by exactly 3 digits.
    InvalidCode(String),
    /// Name is empty after trimming.
    EmptyName,
    /// Credits outside `MIN_CREDITS..=MAX_CREDITS`.
    CreditsOutOfRange(i64),
    /// Instructor is empty after trimming.
    EmptyInstructor,
    /// Update requested for a course that has no identity.
    MissingId,
    /// Delete requested with a non-positive id.
    InvalidDeleteId(CourseId),
}

impl Display for CourseValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCode(_) => write!(
                f,
                "Invalid Course Code. Must be 4-6 letters + 3 digits (e.g., ITLDA601)."
            ),
            Self::EmptyName => write!(f, "Course Name cannot be empty."),
            Self::CreditsOutOfRange(_) => write!(
                f,
                "Course Credits must be between {MIN_CREDITS} and {MAX_CREDITS}."
            ),
            Self::EmptyInstructor => write!(f, "Instructor name cannot be empty."),
            Self::MissingId => write!(f, "Cannot update a course without a valid ID."),
            Self::InvalidDeleteId(_) => write!(f, "Invalid Course ID for deletion."),
        }
    }
}

impl Error for CourseValidationError {}

/// One academic course as stored in the `courses` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Store-assigned id; `0` until the course is inserted.
    pub id: CourseId,
    /// Catalogue code such as `ITLDA601`.
    pub code: String,
    pub name: String,
    pub credits: i64,
    pub instructor: String,
}

impl Course {
    /// Creates a course that has not been persisted yet (`id == 0`).
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        credits: i64,
        instructor: impl Into<String>,
    ) -> Self {
        Self::with_id(0, code, name, credits, instructor)
    }

    /// Creates a course carrying an existing store id.
    ///
    /// Used by read paths and by callers that target a known row.
    pub fn with_id(
        id: CourseId,
        code: impl Into<String>,
        name: impl Into<String>,
        credits: i64,
        instructor: impl Into<String>,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            credits,
            instructor: instructor.into(),
        }
    }

    /// Returns whether the store has assigned an id to this course.
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    /// Compares every field except `id`.
    pub fn same_fields(&self, other: &Course) -> bool {
        self.code == other.code
            && self.name == other.name
            && self.credits == other.credits
            && self.instructor == other.instructor
    }

    /// Checks field invariants and returns the first violation.
    ///
    /// # Errors
    /// - `InvalidCode` when `code` is not 4-6 ASCII letters + 3 digits.
    /// - `EmptyName` / `EmptyInstructor` when the trimmed value is empty.
    /// - `CreditsOutOfRange` when `credits` is outside `1..=35`.
    pub fn validate(&self) -> Result<(), CourseValidationError> {
        if !is_valid_code(&self.code) {
            return Err(CourseValidationError::InvalidCode(self.code.clone()));
        }
        if self.name.trim().is_empty() {
            return Err(CourseValidationError::EmptyName);
        }
        if !(MIN_CREDITS..=MAX_CREDITS).contains(&self.credits) {
            return Err(CourseValidationError::CreditsOutOfRange(self.credits));
        }
        if self.instructor.trim().is_empty() {
            return Err(CourseValidationError::EmptyInstructor);
        }
        Ok(())
    }
}

/// Returns whether `code` matches the catalogue code pattern.
pub fn is_valid_code(code: &str) -> bool {
    COURSE_CODE_RE.is_match(code)
}
