// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;
use std::time::Duration;

use lbl_client::{DEFAULT_SOCKET_PATH, DEFAULT_TIMEOUT};

/// Agent control socket: LBL_AGENT_SOCK > /var/run/cilium/cilium.sock
pub fn socket_path() -> PathBuf {
    std::env::var("LBL_AGENT_SOCK")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOCKET_PATH))
}

/// Per-request timeout (default 5s, configurable via `LBL_IPC_TIMEOUT_MS`).
pub fn ipc_timeout() -> Duration {
    std::env::var("LBL_IPC_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TIMEOUT)
}

/// Log filter directives: LBL_LOG > RUST_LOG > `warn`
pub fn log_filter() -> String {
    ["LBL_LOG", "RUST_LOG"]
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| "warn".to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
