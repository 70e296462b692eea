//! `coursereg` command-line entry point.
//!
//! # Responsibility
//! - Parse arguments, start logging, and wire config -> gateway -> service.
//! - Hand each command to `app::execute` and exit with its code.

mod app;
mod cli;

use clap::Parser;
use cli::Cli;
use coursereg_core::{
    core_version, default_log_level, init_logging, CourseService, SqliteCourseRepository,
};
use log::info;
use std::process::ExitCode;

const DEFAULT_LOG_DIR_NAME: &str = "coursereg-logs";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    let log_dir = cli
        .log_dir
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME));
    if let Err(err) = init_logging(&level, &log_dir.to_string_lossy()) {
        eprintln!("warning: logging disabled: {err}");
    }
    info!("event=cli_start module=cli status=ok core_version={}", core_version());

    let config = app::resolve_config(&cli);
    let service = CourseService::new(SqliteCourseRepository::new(config));

    app::execute(&service, cli.command).emit()
}
