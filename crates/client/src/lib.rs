// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! lbl-client: read-only client for the agent's control socket.
//!
//! The agent serves a JSON API over HTTP on a Unix socket. This crate covers
//! the configuration, health and endpoint listing calls.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod client;
mod error;
mod http;
pub mod models;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use client::{AgentApi, AgentClient, DEFAULT_SOCKET_PATH, DEFAULT_TIMEOUT};
pub use error::ClientError;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeAgent;
pub use models::{
    AddressPair, DaemonConfiguration, Endpoint, EndpointNetworking, EndpointStatus,
    ExternalIdentifiers, Identity, Status, StatusResponse, StatusState,
};
