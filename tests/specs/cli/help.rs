//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn lbl_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn lbl_help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("label").stdout_has("agent");
}

#[test]
fn lbl_label_help_shows_subcommands() {
    cli()
        .args(&["label", "--help"])
        .passes()
        .stdout_has("parse")
        .stdout_has("list")
        .stdout_has("sum")
        .stdout_has("merge");
}

#[test]
fn lbl_agent_help_shows_subcommands() {
    cli()
        .args(&["agent", "--help"])
        .passes()
        .stdout_has("config")
        .stdout_has("health")
        .stdout_has("endpoints")
        .stdout_has("ips")
        .stdout_has("overview")
        .stdout_has("identities");
}

#[test]
fn lbl_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn unknown_subcommand_fails() {
    cli().args(&["relabel"]).exits(2).stderr_has("Usage:");
}
