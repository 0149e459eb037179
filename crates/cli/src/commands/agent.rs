// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent query commands
//!
//! Read-only views of a running agent: its configuration, health, and the
//! endpoints it manages.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use lbl_client::{AgentApi, Endpoint, Identity, Status, StatusResponse};
use serde::Serialize;
use serde_json::json;

use crate::exit_error::ExitError;
use crate::output::{endpoint_row, handle_list, header, ip_summary, print_json, OutputFormat};

#[derive(Args)]
pub struct AgentArgs {
    #[command(subcommand)]
    pub command: AgentCommand,
}

#[derive(Subcommand)]
pub enum AgentCommand {
    /// Print the agent configuration
    Config,
    /// Show agent health (exits 3 when not OK)
    Health,
    /// List running endpoints
    Endpoints,
    /// List the IPv4 addresses of each endpoint, by endpoint ID
    Ips,
    /// Configuration, health check and endpoint table in one report
    Overview,
    /// Show each endpoint's identity and verify its label digest
    Identities,
}

pub async fn handle(
    command: AgentCommand,
    api: &dyn AgentApi,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        AgentCommand::Config => {
            let config = api.config().await.context("cannot get agent configuration")?;
            print_json(out, &config)?;
        }
        AgentCommand::Health => {
            let health = api.healthz().await.context("cannot get agent status")?;
            match format {
                OutputFormat::Text => print_health(out, &health)?,
                OutputFormat::Json => print_json(out, &health)?,
            }
            if !health.is_ok() {
                return Err(ExitError::unhealthy().into());
            }
        }
        AgentCommand::Endpoints => {
            require_healthy(api).await?;
            let endpoints = list_endpoints(api).await?;
            match format {
                OutputFormat::Text => print_endpoint_table(out, &endpoints)?,
                OutputFormat::Json => print_json(out, &endpoints)?,
            }
        }
        AgentCommand::Ips => {
            require_healthy(api).await?;
            let mut endpoints = list_endpoints(api).await?;
            endpoints.sort_by_key(|ep| ep.id);
            let entries: Vec<EndpointIps> = endpoints.iter().map(EndpointIps::from).collect();
            handle_list(out, format, &entries, "No endpoints", |e| e.summary.clone())?;
        }
        AgentCommand::Overview => {
            let config = api.config().await.context("cannot get agent configuration")?;
            if format == OutputFormat::Text {
                header(out, "Agent configuration:")?;
                print_json(out, &config)?;
            }
            let health = require_healthy(api).await?;
            let endpoints = list_endpoints(api).await?;
            match format {
                OutputFormat::Text => print_endpoint_table(out, &endpoints)?,
                OutputFormat::Json => print_json(
                    out,
                    &json!({ "config": config, "health": health, "endpoints": endpoints }),
                )?,
            }
        }
        AgentCommand::Identities => {
            require_healthy(api).await?;
            let mut endpoints = list_endpoints(api).await?;
            endpoints.sort_by_key(|ep| ep.id);
            let entries: Vec<EndpointIdentity> =
                endpoints.iter().map(EndpointIdentity::from).collect();
            for e in entries.iter().filter(|e| e.digest_matches == Some(false)) {
                tracing::warn!(
                    endpoint = e.endpoint,
                    identity = ?e.identity,
                    "identity label digest does not match the agent's"
                );
            }
            handle_list(out, format, &entries, "No endpoints", EndpointIdentity::line)?;
        }
    }
    Ok(())
}

/// Fetch health and abort with the unhealthy exit code unless it is OK.
async fn require_healthy(api: &dyn AgentApi) -> Result<StatusResponse> {
    let health = api.healthz().await.context("cannot get agent status")?;
    if !health.is_ok() {
        let state = health.agent.as_ref().map(|s| s.state.to_string()).unwrap_or_default();
        tracing::info!(%state, "agent not healthy");
        return Err(ExitError::unhealthy().into());
    }
    Ok(health)
}

async fn list_endpoints(api: &dyn AgentApi) -> Result<Vec<Endpoint>> {
    let endpoints = api.endpoints().await.context("cannot list endpoints")?;
    tracing::debug!(count = endpoints.len(), "listed endpoints");
    Ok(endpoints)
}

fn print_endpoint_table(out: &mut impl Write, endpoints: &[Endpoint]) -> Result<()> {
    header(out, "List of running endpoints:")?;
    for ep in endpoints {
        writeln!(out, "{}", endpoint_row(ep))?;
    }
    Ok(())
}

fn print_health(out: &mut impl Write, health: &StatusResponse) -> Result<()> {
    let sections: [(&str, &Option<Status>); 4] = [
        ("agent", &health.agent),
        ("kvstore", &health.kvstore),
        ("container-runtime", &health.container_runtime),
        ("kubernetes", &health.kubernetes),
    ];
    for (name, status) in sections {
        let Some(status) = status else { continue };
        if status.msg.is_empty() {
            writeln!(out, "{}: {}", name, status.state)?;
        } else {
            writeln!(out, "{}: {} ({})", name, status.state, status.msg)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct EndpointIps {
    id: i64,
    ipv4: Vec<String>,
    #[serde(skip)]
    summary: String,
}

impl From<&Endpoint> for EndpointIps {
    fn from(ep: &Endpoint) -> Self {
        Self {
            id: ep.id,
            ipv4: ep.ipv4_addrs().into_iter().map(String::from).collect(),
            summary: ip_summary(ep),
        }
    }
}

#[derive(Serialize)]
struct EndpointIdentity {
    endpoint: i64,
    identity: Option<i64>,
    labels: Vec<String>,
    sha256: String,
    /// `None` when the agent reported no digest to compare against
    digest_matches: Option<bool>,
}

impl From<&Endpoint> for EndpointIdentity {
    fn from(ep: &Endpoint) -> Self {
        let identity = ep.identity();
        let labels = ep.labels();
        Self {
            endpoint: ep.id,
            identity: identity.map(|i| i.id),
            labels: labels.printable_model(),
            sha256: labels.sha256_sum(),
            digest_matches: identity
                .filter(|i| !i.labels_sha256.is_empty())
                .map(Identity::digest_matches),
        }
    }
}

impl EndpointIdentity {
    fn line(&self) -> String {
        let Some(id) = self.identity else {
            return format!("EP ID {} has no identity", self.endpoint);
        };
        let check = match self.digest_matches {
            Some(true) => "digest ok",
            Some(false) => "digest MISMATCH",
            None => "no digest",
        };
        format!("EP ID {} identity {} [{}] {}", self.endpoint, id, self.labels.join(","), check)
    }
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
