// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Response models for the agent API.
//!
//! Only the fields the query tool reads are modelled; unknown fields are
//! ignored so newer agents keep decoding.

use std::fmt;

use lbl_core::LabelSet;
use serde::{Deserialize, Serialize};

/// Agent configuration, kept as raw JSON for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaemonConfiguration(pub serde_json::Value);

/// Health of a single agent subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusState {
    Ok,
    Warning,
    Failure,
    Disabled,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for StatusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatusState::Ok => "Ok",
            StatusState::Warning => "Warning",
            StatusState::Failure => "Failure",
            StatusState::Disabled => "Disabled",
            StatusState::Unknown => "Unknown",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub state: StatusState,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub msg: String,
}

/// `GET /v1/healthz` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StatusResponse {
    /// Overall agent state
    #[serde(default, rename = "cilium", skip_serializing_if = "Option::is_none")]
    pub agent: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kvstore: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_runtime: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes: Option<Status>,
}

impl StatusResponse {
    /// True unless the agent reports a state other than `Ok`.
    ///
    /// A response without an agent section counts as healthy.
    pub fn is_ok(&self) -> bool {
        self.agent.as_ref().map_or(true, |s| s.state == StatusState::Ok)
    }
}

/// One entry of `GET /v1/endpoint`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EndpointStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EndpointStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_identifiers: Option<ExternalIdentifiers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networking: Option<EndpointNetworking>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExternalIdentifiers {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub container_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pod_name: String,
}

/// Security identity of an endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    #[serde(default)]
    pub labels: Vec<String>,
    /// Digest of the identity's canonical label list
    #[serde(default, rename = "labelsSHA256", skip_serializing_if = "String::is_empty")]
    pub labels_sha256: String,
}

impl Identity {
    pub fn label_set(&self) -> LabelSet {
        LabelSet::from_model(&self.labels)
    }

    /// Whether `labels_sha256` matches the digest of `labels`.
    ///
    /// Identities that carry no digest are not checked.
    pub fn digest_matches(&self) -> bool {
        self.labels_sha256.is_empty() || self.labels_sha256 == self.label_set().sha256_sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointNetworking {
    #[serde(default)]
    pub addressing: Vec<AddressPair>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressPair {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ipv4: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ipv6: String,
}

impl Endpoint {
    pub fn container_name(&self) -> &str {
        self.status
            .as_ref()
            .and_then(|s| s.external_identifiers.as_ref())
            .map_or("", |e| e.container_name.as_str())
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.status.as_ref().and_then(|s| s.identity.as_ref())
    }

    /// Identity labels, empty when the endpoint has no identity yet.
    pub fn labels(&self) -> LabelSet {
        self.identity().map(Identity::label_set).unwrap_or_default()
    }

    fn addressing(&self) -> &[AddressPair] {
        self.status
            .as_ref()
            .and_then(|s| s.networking.as_ref())
            .map(|n| n.addressing.as_slice())
            .unwrap_or_default()
    }

    /// Non-empty IPv4 addresses.
    pub fn ipv4_addrs(&self) -> Vec<&str> {
        self.addressing().iter().map(|a| a.ipv4.as_str()).filter(|s| !s.is_empty()).collect()
    }

    /// Non-empty IPv6 addresses.
    pub fn ipv6_addrs(&self) -> Vec<&str> {
        self.addressing().iter().map(|a| a.ipv6.as_str()).filter(|s| !s.is_empty()).collect()
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
