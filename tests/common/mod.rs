//! Shared helpers for spawned-binary integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Handle for spawning the `wikiforge` binary built by cargo.
pub struct WikiforgeProcess;

impl WikiforgeProcess {
    /// Run the binary with the given arguments and capture its output.
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_wikiforge"))
            .args(args)
            .output()
            .expect("failed to spawn wikiforge binary")
    }

    /// Run the binary with the given working directory.
    pub fn spawn_in(dir: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_wikiforge"))
            .current_dir(dir)
            .args(args)
            .output()
            .expect("failed to spawn wikiforge binary")
    }
}
