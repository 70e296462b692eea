//! Course gateway contract and SQLite implementation.
//!
//! # Responsibility
//! - Map each gateway operation onto exactly one parameterized statement.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every call opens its own connection and drops it on all exit paths.
//! - No pooling, no multi-statement transaction, no retry.
//! - Store failures are logged and returned unclassified as `RepoError::Db`.
//! - Field validation is the service's job; the gateway stores what it gets.

use crate::config::{ConfigError, DatabaseConfig};
use crate::db::{open_db, DbError};
use crate::model::course::{Course, CourseId};
use log::{debug, error};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const COURSE_SELECT_SQL: &str = "SELECT
    id,
    code,
    name,
    credits,
    instructor
FROM courses";

pub type RepoResult<T> = Result<T, RepoError>;

/// Store-level failure surfaced to the service as-is.
#[derive(Debug)]
pub enum RepoError {
    /// Connection settings could not be resolved to a store location.
    Config(ConfigError),
    /// Connection, schema or statement failure reported by SQLite.
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<ConfigError> for RepoError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence gateway for courses.
///
/// Mutating calls return the number of rows the store reports as affected.
pub trait CourseRepository {
    /// Writes a new row; the store assigns the id and it is not returned.
    fn insert_course(&self, course: &Course) -> RepoResult<usize>;
    /// Reads every row ordered by ascending id.
    fn list_courses(&self) -> RepoResult<Vec<Course>>;
    fn fetch_course(&self, id: CourseId) -> RepoResult<Option<Course>>;
    /// Overwrites code, name, credits and instructor of the row with
    /// `course.id`. Zero affected rows is not an error.
    fn update_course(&self, course: &Course) -> RepoResult<usize>;
    /// Removes the row with `id`. Zero affected rows is not an error.
    fn delete_course(&self, id: CourseId) -> RepoResult<usize>;
}

/// SQLite-backed course gateway, one connection per call.
#[derive(Debug, Clone)]
pub struct SqliteCourseRepository {
    config: DatabaseConfig,
}

impl SqliteCourseRepository {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Opens a connection, runs `statement` once, and drops the connection.
    fn with_connection<T>(
        &self,
        event: &'static str,
        statement: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> RepoResult<T> {
        let started_at = Instant::now();
        let result = self
            .connect()
            .and_then(|conn| statement(&conn).map_err(RepoError::from));

        match &result {
            Ok(_) => debug!(
                "event={} module=repo status=ok duration_ms={}",
                event,
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event={} module=repo status=error duration_ms={} error={}",
                event,
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    fn connect(&self) -> RepoResult<Connection> {
        let path = self.config.sqlite_path()?;
        Ok(open_db(path)?)
    }
}

impl CourseRepository for SqliteCourseRepository {
    fn insert_course(&self, course: &Course) -> RepoResult<usize> {
        self.with_connection("course_insert", |conn| {
            conn.execute(
                "INSERT INTO courses (code, name, credits, instructor)
                 VALUES (?1, ?2, ?3, ?4);",
                params![
                    course.code.as_str(),
                    course.name.as_str(),
                    course.credits,
                    course.instructor.as_str(),
                ],
            )
        })
    }

    fn list_courses(&self) -> RepoResult<Vec<Course>> {
        self.with_connection("course_list", |conn| {
            let mut stmt = conn.prepare(&format!("{COURSE_SELECT_SQL} ORDER BY id ASC;"))?;
            let rows = stmt.query_map([], parse_course_row)?;
            rows.collect()
        })
    }

    fn fetch_course(&self, id: CourseId) -> RepoResult<Option<Course>> {
        self.with_connection("course_fetch", |conn| {
            conn.query_row(
                &format!("{COURSE_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_course_row,
            )
            .optional()
        })
    }

    fn update_course(&self, course: &Course) -> RepoResult<usize> {
        self.with_connection("course_update", |conn| {
            conn.execute(
                "UPDATE courses
                 SET
                    code = ?1,
                    name = ?2,
                    credits = ?3,
                    instructor = ?4
                 WHERE id = ?5;",
                params![
                    course.code.as_str(),
                    course.name.as_str(),
                    course.credits,
                    course.instructor.as_str(),
                    course.id,
                ],
            )
        })
    }

    fn delete_course(&self, id: CourseId) -> RepoResult<usize> {
        self.with_connection("course_delete", |conn| {
            conn.execute("DELETE FROM courses WHERE id = ?1;", [id])
        })
    }
}

fn parse_course_row(row: &Row<'_>) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get("id")?,
        code: row.get("code")?,
        name: row.get("name")?,
        credits: row.get("credits")?,
        instructor: row.get("instructor")?,
    })
}
