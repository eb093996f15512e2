//! Test driver for the anyopt demo binary.
//!
//! Spawns `demo` with a given argument list and an optional config file,
//! captures its output, and offers small helpers for picking resolved
//! fields out of the stable `key=value` report the demo prints.

use std::path::Path;
use std::process::{Command, ExitStatus, Output};

/// Captured result of one demo run.
pub struct DemoRun {
    pub stdout: String,
    pub stderr: String,
    pub status: ExitStatus,
}

/// Run the demo binary with `args`, optionally pointing it at a config
/// file via ANYOPT_DEMO_CONFIG. RUST_LOG is pinned so verbose engine
/// diagnostics land on stderr.
pub fn run_demo(binary: &str, args: &[&str], config: Option<&Path>) -> DemoRun {
    let mut cmd = Command::new(binary);
    cmd.args(args);
    cmd.env("RUST_LOG", "warn");
    match config {
        Some(path) => {
            cmd.env("ANYOPT_DEMO_CONFIG", path);
        }
        None => {
            cmd.env_remove("ANYOPT_DEMO_CONFIG");
        }
    }
    let Output {
        stdout,
        stderr,
        status,
    } = cmd.output().expect("failed to spawn demo");
    DemoRun {
        stdout: String::from_utf8_lossy(&stdout).to_string(),
        stderr: String::from_utf8_lossy(&stderr).to_string(),
        status,
    }
}

/// The value of a `key=value` line in demo output.
pub fn field<'a>(output: &'a str, key: &str) -> Option<&'a str> {
    output
        .lines()
        .find_map(|line| line.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')))
}
