use assert_cmd::Command;
use std::path::Path;

/// `coursereg` bound to a database and log directory under `dir`.
pub fn coursereg_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("coursereg").unwrap();
    cmd.env_remove("COURSEREG_DB_URL");
    cmd.env_remove("COURSEREG_DB_USER");
    cmd.env_remove("COURSEREG_DB_PASSWORD");
    cmd.arg("--db-url").arg(dir.join("courses.db"));
    cmd.arg("--log-dir").arg(dir.join("logs"));
    cmd
}

pub fn add_args(code: &str, name: &str, credits: &str, instructor: &str) -> Vec<String> {
    [
        "add",
        "--code",
        code,
        "--name",
        name,
        "--credits",
        credits,
        "--instructor",
        instructor,
    ]
    .iter()
    .map(|arg| arg.to_string())
    .collect()
}
