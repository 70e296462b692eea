//! Command execution and message rendering.
//!
//! # Responsibility
//! - Turn parsed commands into service calls.
//! - Render validation and persistence failures as distinct messages.
//! - Re-read the full table after every successful mutation.
//!
//! # Invariants
//! - No service error escapes as a panic or an early process exit.

use crate::cli::{format_course_json, format_course_table, Cli, Commands, CourseFields};
use coursereg_core::{
    Course, CourseId, CourseRepository, CourseService, DatabaseConfig, ServiceError,
};
use std::io::Write;
use std::process::ExitCode;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_VALIDATION: u8 = 3;
pub const EXIT_PERSISTENCE: u8 = 4;

/// Buffered result of one command: what to print and how to exit.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: u8,
}

impl Outcome {
    fn say(&mut self, line: impl AsRef<str>) {
        push_line(&mut self.stdout, line.as_ref());
    }

    fn fail(&mut self, exit_code: u8, line: impl AsRef<str>) {
        push_line(&mut self.stderr, line.as_ref());
        if self.exit_code == 0 {
            self.exit_code = exit_code;
        }
    }

    fn service_failure(&mut self, action: &str, err: &ServiceError) {
        match err {
            ServiceError::Validation(reason) => {
                self.fail(EXIT_VALIDATION, format!("Validation Error: {reason}"));
            }
            ServiceError::Persistence(cause) => {
                self.fail(
                    EXIT_PERSISTENCE,
                    format!("Database Error: Could not {action}. {cause}"),
                );
            }
        }
    }

    /// Writes buffered output and returns the process exit code.
    pub fn emit(self) -> ExitCode {
        // Nothing sensible to report if the terminal itself is gone.
        let _ = std::io::stdout().write_all(self.stdout.as_bytes());
        let _ = std::io::stderr().write_all(self.stderr.as_bytes());
        ExitCode::from(self.exit_code)
    }
}

fn push_line(buffer: &mut String, line: &str) {
    buffer.push_str(line);
    if !line.ends_with('\n') {
        buffer.push('\n');
    }
}

/// Environment configuration with command-line overrides applied.
pub fn resolve_config(cli: &Cli) -> DatabaseConfig {
    let mut config = DatabaseConfig::from_env();
    if let Some(url) = &cli.db_url {
        config.url = url.clone();
    }
    if let Some(user) = &cli.db_user {
        config.user = user.clone();
    }
    if let Some(password) = &cli.db_password {
        config.password = password.clone();
    }
    config
}

/// Builds a course from form input, trimming every text field.
pub fn course_from_fields(id: CourseId, fields: &CourseFields) -> Course {
    Course::with_id(
        id,
        fields.code.trim(),
        fields.name.trim(),
        fields.credits,
        fields.instructor.trim(),
    )
}

/// Runs one command against `service`.
pub fn execute<R: CourseRepository>(service: &CourseService<R>, command: Commands) -> Outcome {
    let mut outcome = Outcome::default();

    match command {
        Commands::Add { fields } => {
            let course = course_from_fields(0, &fields);
            match service.add(&course) {
                Ok(_) => {
                    outcome.say("Course added successfully.");
                    refresh(service, &mut outcome);
                }
                Err(err) => outcome.service_failure("add course", &err),
            }
        }
        Commands::List { json } => match service.list() {
            Ok(courses) if json => match format_course_json(&courses) {
                Ok(rendered) => outcome.say(rendered),
                Err(err) => outcome.fail(EXIT_FAILURE, format!("Error: {err}")),
            },
            Ok(courses) => outcome.say(format_course_table(&courses)),
            Err(err) => outcome.service_failure("load courses", &err),
        },
        Commands::Update { id, fields } => {
            let course = course_from_fields(id, &fields);
            match service.update(&course) {
                Ok(0) => {
                    outcome.say(format!("No course with ID {id}."));
                    refresh(service, &mut outcome);
                }
                Ok(_) => {
                    outcome.say("Course updated successfully.");
                    refresh(service, &mut outcome);
                }
                Err(err) => outcome.service_failure("update course", &err),
            }
        }
        Commands::Delete { id } => match service.delete(id) {
            Ok(0) => {
                outcome.say(format!("No course with ID {id}."));
                refresh(service, &mut outcome);
            }
            Ok(_) => {
                outcome.say("Course deleted successfully.");
                refresh(service, &mut outcome);
            }
            Err(err) => outcome.service_failure("delete course", &err),
        },
        Commands::Show { id } => match service.get_by_id(id) {
            Ok(Some(course)) => outcome.say(format_course_table(&[course])),
            Ok(None) => outcome.say("Course lookup by id is not available."),
            Err(err) => outcome.service_failure("look up course", &err),
        },
    }

    outcome
}

fn refresh<R: CourseRepository>(service: &CourseService<R>, outcome: &mut Outcome) {
    match service.list() {
        Ok(courses) => outcome.say(format_course_table(&courses)),
        Err(err) => outcome.service_failure("load courses", &err),
    }
}
