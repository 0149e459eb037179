//! `lbl label parse` specs
//!
//! Textual label forms and their canonical rendering.

use crate::prelude::*;

#[test]
fn parses_source_key_value() {
    cli().args(&["label", "parse", "k8s:role=backend"]).passes().stdout_eq("k8s:role=backend\n");
}

#[test]
fn dollar_prefix_is_reserved() {
    cli().args(&["label", "parse", "$host"]).passes().stdout_eq("reserved:host\n");
}

#[test]
fn reserved_dollar_equals_moves_value_to_key() {
    cli().args(&["label", "parse", "$=world"]).passes().stdout_eq("reserved:world\n");
}

#[test]
fn missing_source_defaults_to_unspec() {
    cli().args(&["label", "parse", "role=backend"]).passes().stdout_eq("unspec:role=backend\n");
}

#[test]
fn select_labels_default_to_any() {
    cli()
        .args(&["label", "parse", "--select", "role=backend"])
        .passes()
        .stdout_eq("any:role=backend\n");
}

#[test]
fn k8s_flag_splits_on_dot() {
    cli()
        .args(&["label", "parse", "--k8s", "k8s.io/app=web"])
        .passes()
        .stdout_eq("k8s:io/app=web\n");
}

#[test]
fn empty_label_is_reported_not_rejected() {
    cli().args(&["label", "parse", ""]).passes().stdout_eq("unspec: (invalid: empty key)\n");
}

#[test]
fn json_output_has_label_fields() {
    let out = cli().args(&["-o", "json", "label", "parse", "container:id"]).passes();
    assert_eq!(out.json(), serde_json::json!([{ "key": "id", "source": "container" }]));
}
