//! `lbl label list|sum|merge` specs
//!
//! Canonical sorted list, its digest, and set merging.

use crate::prelude::*;

#[test]
fn list_is_sorted_by_key() {
    cli()
        .args(&["label", "list", "k8s:zone=a", "$host", "k8s:app=web"])
        .passes()
        .stdout_eq("k8s:app=web;reserved:host=;k8s:zone=a;\n");
}

#[test]
fn list_rejects_keyless_label() {
    cli()
        .args(&["label", "list", "k8s:app=web", "k8s:"])
        .exits(1)
        .stderr_has("invalid label 'k8s:'");
}

#[test]
fn sum_ignores_argument_order() {
    let a = cli().args(&["label", "sum", "k8s:a=1", "k8s:b=2"]).passes();
    let b = cli().args(&["label", "sum", "k8s:b=2", "k8s:a=1"]).passes();
    assert_eq!(a.stdout, b.stdout);
    assert_eq!(a.stdout.trim().len(), 64);
    assert!(a.stdout.trim().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn sum_differs_for_different_values() {
    let a = cli().args(&["label", "sum", "k8s:a=1"]).passes();
    let b = cli().args(&["label", "sum", "k8s:a=2"]).passes();
    assert_ne!(a.stdout, b.stdout);
}

#[test]
fn merge_overwrites_and_keeps() {
    cli()
        .args(&["label", "merge", "--into", "container:x=1", "k8s:y=3", "--from", "k8s:x=2"])
        .passes()
        .stdout_eq("k8s:x=2\nk8s:y=3\n");
}

#[test]
fn merge_json_is_keyed_by_label_key() {
    let out = cli()
        .args(&["-o", "json", "label", "merge", "--into", "k8s:y=3", "--from", "$host"])
        .passes();
    let value = out.json();
    assert_eq!(value["host"]["source"], "reserved");
    assert_eq!(value["y"]["value"], "3");
}
