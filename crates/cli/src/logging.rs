// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostics go to stderr so stdout stays parseable.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_new(crate::env::log_filter()).unwrap_or_else(|e| {
        eprintln!("warning: ignoring invalid log filter: {}", e);
        EnvFilter::new("warn")
    });
    // Already installed when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
