//! Integration Test Utilities and Common Code

#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use assert_fs::prelude::*;
pub use assert_fs::{fixture::ChildPath, TempDir};
pub use indoc::indoc;
pub use insta::assert_snapshot;
pub use predicates::str::{contains, is_empty, RegexPredicate};
pub use std::path::Path;
pub use std::process::Command;

/// Build a `Command` for the `textsink` crate binary with variadic command-line arguments.
///
/// The arguments can be anything that is allowed by `Command::arg`.
#[macro_export]
macro_rules! textsink {
    ( $( $arg:expr ),* ) => {
        {
            let mut cmd = textsink_cmd();
            $(
                cmd.arg($arg);
            )*
            cmd
        }
    }
}

/// Build an `assert_cmd::assert::Assert` by calling `textsink!(args).assert().success()`.
#[macro_export]
macro_rules! textsink_success {
    ( $( $arg:expr ),* ) => { textsink!($( $arg ),*).assert().success() }
}

/// Build an `assert_cmd::assert::Assert` by calling `textsink!(args).assert().failure()`.
#[macro_export]
macro_rules! textsink_failure {
    ( $( $arg:expr ),* ) => { textsink!($( $arg ),*).assert().failure() }
}

/// Get the command for the `textsink` binary under test.
///
/// By default, this is the binary defined in this crate.
/// However, if the `TEXTSINK_TEST_PROGRAM` environment variable is set, its value is used instead.
/// Its value should be an absolute path to the desired `textsink` program to test.
///
/// Any `TEXTSINK_LOG` or `NO_COLOR` setting from the calling environment is removed so that log
/// output is predictable.
pub fn textsink_cmd() -> Command {
    let mut cmd = if let Ok(program) = std::env::var("TEXTSINK_TEST_PROGRAM") {
        Command::new(program)
    } else {
        Command::cargo_bin("textsink").expect("textsink should be executable")
    };
    cmd.env_remove("TEXTSINK_LOG").env_remove("NO_COLOR");
    cmd
}

/// Create a `RegexPredicate` from the given pattern.
pub fn is_match(pat: &str) -> RegexPredicate {
    predicates::str::is_match(pat).expect("pattern should compile")
}

/// Get the captured stdout of a finished command as a string.
pub fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("stdout should be UTF-8")
}

/// Get the captured stderr of a finished command as a string.
pub fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stderr.clone()).expect("stderr should be UTF-8")
}

/// A scratch directory for tests that write to `--output` files.
pub struct OutputEnv {
    pub root: TempDir,
}

impl OutputEnv {
    /// Create a new scratch directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("should be able to create tempdir");
        assert!(root.is_dir());
        Self { root }
    }

    /// Get a path within the scratch directory that does not exist yet.
    pub fn output(&self, name: &str) -> ChildPath {
        let output = self.root.child(name);
        assert!(!output.exists());
        output
    }

    /// Read back a file written within the scratch directory.
    pub fn contents(&self, output: &ChildPath) -> String {
        std::fs::read_to_string(output.path()).expect("output file should be readable")
    }
}

/// Open a destination that refuses every write, when the platform has one.
#[cfg(target_os = "linux")]
pub fn full_device() -> std::process::Stdio {
    std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("/dev/full should be writable")
        .into()
}
