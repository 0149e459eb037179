//! `lbl agent` specs
//!
//! Queries against a fake agent: health gate, endpoint table, IP listing,
//! identity digests, and failure exit codes.

use serde_json::json;

use crate::prelude::*;

fn endpoints() -> serde_json::Value {
    json!([
        {
            "id": 3012,
            "status": {
                "external-identifiers": { "container-name": "web" },
                "identity": {
                    "id": 51234,
                    "labels": ["k8s:app=web", "k8s:io.kubernetes.pod.namespace=default"],
                },
                "networking": { "addressing": [{ "ipv4": "10.0.1.5", "ipv6": "f00d::a0f:0:0:5" }] },
                "state": "ready"
            }
        },
        {
            "id": 291,
            "status": {
                "external-identifiers": { "container-name": "db" },
                "networking": { "addressing": [{ "ipv6": "f00d::a0f:0:0:9" }] },
                "state": "ready"
            }
        }
    ])
}

#[test]
fn health_ok() {
    let agent = FakeAgentServer::with_state("Ok", json!([]));
    cli().args(&["agent", "health"]).agent(agent.socket()).passes().stdout_eq("agent: Ok\n");
}

#[test]
fn health_warning_exits_three() {
    let agent = FakeAgentServer::with_state("Warning", json!([]));
    cli()
        .args(&["agent", "health"])
        .agent(agent.socket())
        .exits(3)
        .stdout_has("agent: Warning")
        .stderr_has("agent status not OK, aborting");
}

#[test]
fn config_is_pretty_json() {
    let agent = FakeAgentServer::with_state("Ok", json!([]));
    let out = cli().args(&["agent", "config"]).agent(agent.socket()).passes();
    assert_eq!(out.json()["spec"]["options"]["Debug"], "Disabled");
}

#[test]
fn socket_flag_overrides_env() {
    let agent = FakeAgentServer::with_state("Ok", json!([]));
    let socket = agent.socket().display().to_string();
    cli()
        .args(&["agent", "health", "--socket", &socket])
        .env("LBL_AGENT_SOCK", "/nonexistent/agent.sock")
        .passes();
}

#[test]
fn overview_prints_config_and_endpoint_table() {
    let agent = FakeAgentServer::with_state("Ok", endpoints());
    let out = cli()
        .args(&["agent", "overview"])
        .agent(agent.socket())
        .passes()
        .stdout_has(&"-".repeat(78))
        .stdout_has("Agent configuration:")
        .stdout_has("List of running endpoints:");
    let rows: Vec<&str> = out.stdout.lines().rev().take(2).collect();
    assert!(rows[1].starts_with("    3012            web         10.0.1.5"), "got: {:?}", rows[1]);
    assert!(rows[0].starts_with("     291             db"), "got: {:?}", rows[0]);
}

#[test]
fn overview_aborts_when_unhealthy() {
    let agent = FakeAgentServer::with_state("Failure", endpoints());
    cli()
        .args(&["agent", "overview"])
        .agent(agent.socket())
        .exits(3)
        .stdout_has("Agent configuration:")
        .stdout_lacks("List of running endpoints:");
}

#[test]
fn ips_sorted_by_endpoint_id() {
    let agent = FakeAgentServer::with_state("Ok", endpoints());
    cli().args(&["agent", "ips"]).agent(agent.socket()).passes().stdout_eq(
        "EP ID 291 does not have an IP address\n\
         EP ID 3012 has IP addresses: 10.0.1.5\n",
    );
}

#[test]
fn identities_show_labels() {
    let agent = FakeAgentServer::with_state("Ok", endpoints());
    cli()
        .args(&["agent", "identities"])
        .agent(agent.socket())
        .passes()
        .stdout_has("EP ID 291 has no identity")
        .stdout_has(
            "EP ID 3012 identity 51234 [k8s:app=web,k8s:io.kubernetes.pod.namespace=default] no digest",
        );
}

#[test]
fn missing_socket_fails_with_exit_one() {
    let dir = tempfile::TempDir::new().unwrap();
    cli()
        .args(&["agent", "endpoints"])
        .agent(&dir.path().join("absent.sock"))
        .exits(1)
        .stderr_has("cannot get agent status");
}

#[test]
fn missing_route_reports_http_status() {
    let agent = FakeAgentServer::start(&[("/v1/healthz", json!({ "cilium": { "state": "Ok" } }))]);
    cli().args(&["agent", "endpoints"]).agent(agent.socket()).exits(1).stderr_has("404");
}
