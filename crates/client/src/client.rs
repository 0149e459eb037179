// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only access to a running agent.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::http;
use crate::models::{DaemonConfiguration, Endpoint, StatusResponse};

/// Default location of the agent's control socket.
pub const DEFAULT_SOCKET_PATH: &str = "/var/run/cilium/cilium.sock";

/// Default timeout for one request (connect, write and read).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// The agent operations the query tool uses.
#[async_trait]
pub trait AgentApi: Send + Sync {
    /// `GET /v1/config`
    async fn config(&self) -> Result<DaemonConfiguration, ClientError>;

    /// `GET /v1/healthz`
    async fn healthz(&self) -> Result<StatusResponse, ClientError>;

    /// `GET /v1/endpoint`
    async fn endpoints(&self) -> Result<Vec<Endpoint>, ClientError>;
}

/// Agent API client over the control socket.
#[derive(Debug, Clone)]
pub struct AgentClient {
    socket_path: PathBuf,
    timeout: Duration,
}

impl AgentClient {
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self { socket_path: socket_path.into(), timeout: DEFAULT_TIMEOUT }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        tracing::debug!(socket = %self.socket_path.display(), path, "agent request");
        let body = http::get(&self.socket_path, path, self.timeout).await?;
        serde_json::from_str(&body)
            .map_err(|source| ClientError::Decode { path: path.to_string(), source })
    }
}

impl Default for AgentClient {
    fn default() -> Self {
        Self::new(DEFAULT_SOCKET_PATH)
    }
}

#[async_trait]
impl AgentApi for AgentClient {
    async fn config(&self) -> Result<DaemonConfiguration, ClientError> {
        self.get_json("/v1/config").await
    }

    async fn healthz(&self) -> Result<StatusResponse, ClientError> {
        self.get_json("/v1/healthz").await
    }

    async fn endpoints(&self) -> Result<Vec<Endpoint>, ClientError> {
        self.get_json("/v1/endpoint").await
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
