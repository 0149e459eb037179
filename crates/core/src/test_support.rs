// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Label, LabelSet};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for labels.
///
/// Generated fields never contain `:`, `=`, `;` or a leading `$`, so every
/// label survives the textual and sorted-list encodings unchanged.
pub mod strategies {
    use crate::Label;
    use proptest::prelude::*;

    pub fn arb_source() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("k8s".to_string()),
            Just("container".to_string()),
            Just("reserved".to_string()),
            Just("cidr".to_string()),
            Just("mesos".to_string()),
            Just("any".to_string()),
            Just("unspec".to_string()),
            "[a-z][a-z-]{0,8}",
        ]
    }

    pub fn arb_label() -> impl Strategy<Value = Label> {
        (arb_source(), "[a-zA-Z][a-zA-Z0-9./_-]{0,15}", "[a-zA-Z0-9._-]{0,12}")
            .prop_map(|(source, key, value)| Label { key, value, source })
    }

    /// Up to 8 labels with distinct keys.
    pub fn arb_labels() -> impl Strategy<Value = Vec<Label>> {
        proptest::collection::btree_map("[a-zA-Z][a-zA-Z0-9./_-]{0,15}", arb_label(), 0..8)
            .prop_map(|m| {
                m.into_iter().map(|(key, label)| Label { key, ..label }).collect::<Vec<_>>()
            })
    }
}

// ── Fixtures ────────────────────────────────────────────────────────────

/// `source:key=value` shorthand.
pub fn label(key: &str, value: &str, source: &str) -> Label {
    Label { key: key.to_string(), value: value.to_string(), source: source.to_string() }
}

/// A typical pod identity: `k8s:app`, `k8s:io.kubernetes.pod.namespace` and
/// a container name.
pub fn pod_labels(app: &str, namespace: &str) -> LabelSet {
    [
        label("app", app, "k8s"),
        label("io.kubernetes.pod.namespace", namespace, "k8s"),
        label("name", app, "container"),
    ]
    .into_iter()
    .collect()
}
