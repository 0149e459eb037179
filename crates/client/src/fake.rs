// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory [`AgentApi`] for tests.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::client::AgentApi;
use crate::error::ClientError;
use crate::models::{DaemonConfiguration, Endpoint, Status, StatusResponse, StatusState};

/// Canned agent state. A `None` field makes the matching call fail as if the
/// agent were unreachable.
#[derive(Debug, Default)]
pub struct FakeAgent {
    pub config: Option<DaemonConfiguration>,
    pub health: Option<StatusResponse>,
    pub endpoints: Option<Vec<Endpoint>>,
    calls: Mutex<Vec<&'static str>>,
}

impl FakeAgent {
    /// A healthy agent with the given endpoints and an empty configuration.
    pub fn healthy(endpoints: Vec<Endpoint>) -> Self {
        Self {
            config: Some(DaemonConfiguration(serde_json::json!({"spec": {}, "status": {}}))),
            health: Some(StatusResponse {
                agent: Some(Status { state: StatusState::Ok, msg: String::new() }),
                ..Default::default()
            }),
            endpoints: Some(endpoints),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_state(mut self, state: StatusState) -> Self {
        self.health = Some(StatusResponse {
            agent: Some(Status { state, msg: String::new() }),
            ..Default::default()
        });
        self
    }

    /// Names of the operations called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    fn record(&self, op: &'static str) {
        self.calls.lock().push(op);
    }
}

fn unreachable() -> ClientError {
    ClientError::Io(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "fake agent down"))
}

#[async_trait]
impl AgentApi for FakeAgent {
    async fn config(&self) -> Result<DaemonConfiguration, ClientError> {
        self.record("config");
        self.config.clone().ok_or_else(unreachable)
    }

    async fn healthz(&self) -> Result<StatusResponse, ClientError> {
        self.record("healthz");
        self.health.clone().ok_or_else(unreachable)
    }

    async fn endpoints(&self) -> Result<Vec<Endpoint>, ClientError> {
        self.record("endpoints");
        self.endpoints.clone().ok_or_else(unreachable)
    }
}
