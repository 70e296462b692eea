//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coursereg")]
#[command(about = "Course registration records backed by SQLite", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database location (path, `sqlite:<path>` or `sqlite://<path>`);
    /// overrides COURSEREG_DB_URL
    #[arg(long, global = true, value_name = "URL")]
    pub db_url: Option<String>,

    /// Database user; overrides COURSEREG_DB_USER
    #[arg(long, global = true)]
    pub db_user: Option<String>,

    /// Database password; overrides COURSEREG_DB_PASSWORD
    #[arg(long, global = true)]
    pub db_password: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Form fields shared by `add` and `update`.
#[derive(Args, Debug, Clone)]
pub struct CourseFields {
    /// Course code, 4-6 letters followed by 3 digits (e.g. ITLDA601)
    #[arg(long)]
    pub code: String,

    /// Course name
    #[arg(long)]
    pub name: String,

    /// Credit count (1-35)
    #[arg(long, allow_hyphen_values = true)]
    pub credits: i64,

    /// Instructor name
    #[arg(long)]
    pub instructor: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new course
    Add {
        #[command(flatten)]
        fields: CourseFields,
    },

    /// List all courses ordered by id
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Overwrite every field of an existing course
    Update {
        /// Id of the course to update
        #[arg(long, allow_hyphen_values = true)]
        id: i64,

        #[command(flatten)]
        fields: CourseFields,
    },

    /// Delete a course by id
    Delete {
        /// Id of the course to delete
        #[arg(long, allow_hyphen_values = true)]
        id: i64,
    },

    /// Look up a single course by id
    Show {
        #[arg(long, allow_hyphen_values = true)]
        id: i64,
    },
}
