// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Label source namespaces and well-known reserved identity names.
//!
//! Sources are plain strings on the wire so callers may use tags outside this
//! list; the constants cover every namespace the agent itself assigns.

/// Label with an unspecified source.
pub const UNSPEC: &str = "unspec";

/// Selector source that matches labels from any source.
pub const ANY: &str = "any";

/// Prefix of an extended key with source `any`.
pub const ANY_KEY_PREFIX: &str = "any.";

/// Label imported from Kubernetes.
pub const K8S: &str = "k8s";

/// Prefix of an extended key with source `k8s`.
pub const K8S_KEY_PREFIX: &str = "k8s.";

/// Label imported from Mesos.
pub const MESOS: &str = "mesos";

/// Label imported from the container runtime.
pub const CONTAINER: &str = "container";

/// Source for system-defined identities.
pub const RESERVED: &str = "reserved";

/// Prefix of an extended key with source `reserved`.
pub const RESERVED_KEY_PREFIX: &str = "reserved.";

/// Source for labels generated from CIDR prefixes.
pub const CIDR: &str = "cidr";

/// Labels generated by the agent without user input.
pub const GENERATED: &str = "cilium-generated";

/// Label key that requests a fixed identity.
pub const KEY_FIXED_IDENTITY: &str = "io.cilium.fixed-identity";

/// Reserved identity names (keys of labels with source `reserved`).
pub mod id {
    /// The local host.
    pub const HOST: &str = "host";
    /// Any remote cluster node.
    pub const REMOTE_NODE: &str = "remote-node";
    /// Everything outside the cluster.
    pub const WORLD: &str = "world";
    /// An unspecified endpoint inside the cluster.
    pub const CLUSTER: &str = "cluster";
    /// The local health-check endpoint.
    pub const HEALTH: &str = "health";
    /// An endpoint that has not received labels yet.
    pub const INIT: &str = "init";
    /// No endpoint; never assigned.
    pub const NONE: &str = "none";
    /// Endpoints not managed by the agent.
    pub const UNMANAGED: &str = "unmanaged";
    /// An endpoint whose identity is unknown.
    pub const UNKNOWN: &str = "unknown";
}
