// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors talking to the agent's control socket.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("cannot connect to agent at {}: {source}", path.display())]
    Connect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("agent request failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("agent request timed out after {0:?}")]
    Timeout(Duration),

    #[error("malformed agent response: {0}")]
    Malformed(String),

    #[error("agent returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("cannot decode response of {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
