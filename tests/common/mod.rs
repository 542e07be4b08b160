//! Shared helpers for CLI tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Command for the built binary with no engine configured from the environment.
pub fn build_images() -> Command {
    let mut cmd = Command::cargo_bin("build_images").unwrap();
    cmd.env_remove("BUILD_IMAGES_ENGINE").env_remove("RUST_LOG");
    cmd
}

/// A stand-in for the container engine that appends each invocation's
/// arguments, space separated, as one line of a log file.
pub struct StubEngine {
    _dir: TempDir,
    path: PathBuf,
    log: PathBuf,
}

impl StubEngine {
    pub fn new() -> Self {
        Self::with_body("")
    }

    /// Stub that prints to stderr and exits 1 when invoked with exactly `args`.
    pub fn failing_on(args: &str) -> Self {
        Self::with_body(&format!(
            "if [ \"$*\" = \"{args}\" ]; then\n  echo \"stub refused: $*\" >&2\n  exit 1\nfi\n"
        ))
    }

    #[cfg(unix)]
    fn with_body(body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine");
        let log = dir.path().join("calls.log");

        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\n{}exit 0\n",
            log.display(),
            body
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        Self {
            _dir: dir,
            path,
            log,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Recorded invocations, oldest first.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// Temporary build context directory.
pub fn context_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

pub fn display(path: &Path) -> String {
    path.display().to_string()
}
