//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, CourseFields};
pub use output::{format_course_json, format_course_table};
