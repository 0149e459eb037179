// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`,
//! so `main()` owns process termination.

use std::fmt;

/// Any other failure (agent unreachable, bad input).
pub const EXIT_FAILURE: u8 = 1;

/// The agent answered but reported a state other than `Ok`.
pub const EXIT_UNHEALTHY: u8 = 3;

#[derive(Debug)]
pub struct ExitError {
    pub code: u8,
    pub message: String,
}

impl ExitError {
    pub fn new(code: u8, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn unhealthy() -> Self {
        Self::new(EXIT_UNHEALTHY, "agent status not OK, aborting")
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Exit code for an error returned by a command.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ExitError>().map_or(EXIT_FAILURE, |e| e.code)
}
