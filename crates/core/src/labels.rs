// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Label sets and their canonical serialization.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha512_256};

use crate::array::LabelArray;
use crate::error::LabelError;
use crate::label::Label;
use crate::parse::parse_label;
use crate::source;

/// `{host: reserved:host}`, the identity of the local host.
pub static LABEL_HOST: LazyLock<LabelSet> =
    LazyLock::new(|| LabelSet::reserved_identity(source::id::HOST));

/// `{health: reserved:health}`, the identity of the local health endpoint.
pub static LABEL_HEALTH: LazyLock<LabelSet> =
    LazyLock::new(|| LabelSet::reserved_identity(source::id::HEALTH));

/// A set of labels keyed by label key.
///
/// Each stored label's `key` equals the key it is stored under, and no label
/// with an empty key is ever stored. Iteration is in key order, which is the
/// canonical order used by [`LabelSet::sorted_list`].
///
/// Only [`LabelSet::merge`] mutates an existing set in place; every other
/// transformation returns a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: BTreeMap<String, Label>,
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn reserved_identity(name: &str) -> Self {
        Self::from_iter([Label::new(name, "", source::RESERVED)])
    }

    /// Parse each string with [`parse_label`], skipping invalid labels.
    pub fn from_model<S: AsRef<str>>(model: &[S]) -> Self {
        model.iter().map(|s| parse_label(s.as_ref())).collect()
    }

    /// Rebuild a set from the output of [`LabelSet::sorted_list`].
    ///
    /// Only exact for labels without `:`, `=` or `;` inside their fields.
    pub fn from_sorted_list(list: &str) -> Self {
        let model: Vec<&str> = list.split(';').collect();
        Self::from_model(&model)
    }

    /// Build a set from raw `key -> value` pairs, each through
    /// [`Label::new`]. A non-empty `source` overrides any source written in
    /// the keys.
    pub fn from_map<'a, I>(map: I, source: &str) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        map.into_iter().map(|(k, v)| Label::new(k, v.as_str(), source)).collect()
    }

    /// Store `label` under its key, returning the label it replaced.
    pub fn insert(&mut self, label: Label) -> Result<Option<Label>, LabelError> {
        if !label.is_valid() {
            return Err(LabelError::EmptyKey(label.to_string()));
        }
        Ok(self.labels.insert(label.key.clone(), label))
    }

    pub fn remove(&mut self, key: &str) -> Option<Label> {
        self.labels.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Label> {
        self.labels.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.labels.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in key order.
    pub fn iter(&self) -> btree_map::Values<'_, String, Label> {
        self.labels.values()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, Label> {
        self.labels.keys()
    }

    /// Labels whose source is `source`.
    pub fn from_source(&self, source: &str) -> LabelSet {
        self.iter().filter(|l| l.source == source).cloned().collect()
    }

    /// Overwrite this set's labels with every label of `from`.
    ///
    /// Labels whose key only exists here are kept. See [`LabelSet::merged`]
    /// for a version that leaves `self` untouched.
    pub fn merge(&mut self, from: &LabelSet) {
        for (k, v) in &from.labels {
            self.labels.insert(k.clone(), v.clone());
        }
    }

    /// A copy of this set with `from` merged in.
    pub fn merged(&self, from: &LabelSet) -> LabelSet {
        let mut out = self.clone();
        out.merge(from);
        out
    }

    /// A copy with `prefix` prepended to every key.
    pub fn with_key_prefix(&self, prefix: &str) -> LabelSet {
        let labels = self
            .labels
            .iter()
            .map(|(k, v)| {
                let label = Label {
                    key: format!("{}{}", prefix, v.key),
                    value: v.value.clone(),
                    source: v.source.clone(),
                };
                (format!("{}{}", prefix, k), label)
            })
            .collect();
        LabelSet { labels }
    }

    /// The reserved labels of this set, or `None` when there are none.
    pub fn find_reserved(&self) -> Option<LabelSet> {
        let reserved = self.from_source(source::RESERVED);
        if reserved.is_empty() {
            None
        } else {
            Some(reserved)
        }
    }

    /// Whether any label has the reserved source.
    pub fn is_reserved(&self) -> bool {
        self.iter().any(Label::is_reserved_source)
    }

    /// Canonical encoding: `source:key=value;` per label in key order.
    ///
    /// The result is used as a key in the key-value store, where identity
    /// lookups rely on one encoding being a byte prefix of another exactly
    /// when the first set is an ordered subset of the second. Do not change
    /// the separators, the ordering, or the trailing `;`. Separator
    /// characters inside fields are not escaped.
    pub fn sorted_list(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for label in self.labels.values() {
            out.extend_from_slice(label.format_for_kv_store().as_bytes());
        }
        out
    }

    /// Hex digest of [`LabelSet::sorted_list`].
    ///
    /// Uses SHA-512/256, matching the agent's `labelsSHA256` identity field.
    pub fn sha256_sum(&self) -> String {
        format!("{:x}", Sha512_256::digest(self.sorted_list()))
    }

    /// Labels as an array sorted by key.
    pub fn to_array(&self) -> LabelArray {
        LabelArray::from_sorted(self.labels.values().cloned().collect())
    }

    /// `source:key` -> value.
    pub fn string_map(&self) -> BTreeMap<String, String> {
        self.iter().map(|l| (format!("{}:{}", l.source, l.key), l.value.clone())).collect()
    }

    /// Kubernetes-style map: bare keys for `k8s`, `any` and `unspec` labels,
    /// `source.key` for everything else.
    pub fn k8s_string_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|l| {
                let key = match l.source.as_str() {
                    source::K8S | source::ANY | source::UNSPEC => l.key.clone(),
                    _ => l.extended_key(),
                };
                (key, l.value.clone())
            })
            .collect()
    }

    /// Display strings of every label, in key order.
    pub fn model(&self) -> Vec<String> {
        self.iter().map(Label::to_string).collect()
    }

    /// Sorted display strings, with CIDR labels reduced to the most specific
    /// prefix.
    pub fn printable_model(&self) -> Vec<String> {
        let mut res = Vec::with_capacity(self.len());
        let mut best_cidr: Option<(u8, String)> = None;

        for label in self.iter() {
            if label.source == source::CIDR {
                if let Some(ones) = cidr_prefix_len(&label.key) {
                    if best_cidr.as_ref().map_or(true, |(best, _)| ones > *best) {
                        best_cidr = Some((ones, label.to_string().replace('-', ":")));
                    }
                    continue;
                }
            }
            res.push(label.to_string());
        }
        if let Some((_, cidr)) = best_cidr {
            res.push(cidr);
        }

        res.sort();
        res
    }
}

/// Prefix length of a CIDR label key (`10.0.0.0/8`, `f00d--/64`).
fn cidr_prefix_len(key: &str) -> Option<u8> {
    let key = key.replace('-', ":");
    let (addr, len) = key.split_once('/')?;
    let addr: std::net::IpAddr = addr.parse().ok()?;
    let len: u8 = len.parse().ok()?;
    let max = if addr.is_ipv4() { 32 } else { 128 };
    (len <= max).then_some(len)
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.printable_model().join(","))
    }
}

/// Collects valid labels; labels with an empty key are dropped.
impl FromIterator<Label> for LabelSet {
    fn from_iter<T: IntoIterator<Item = Label>>(iter: T) -> Self {
        let mut set = LabelSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Label> for LabelSet {
    fn extend<T: IntoIterator<Item = Label>>(&mut self, iter: T) {
        for label in iter {
            if label.is_valid() {
                self.labels.insert(label.key.clone(), label);
            }
        }
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a Label;
    type IntoIter = btree_map::Values<'a, String, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serializes as an object keyed by label key.
impl Serialize for LabelSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.labels.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LabelSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let labels = BTreeMap::<String, Label>::deserialize(deserializer)?;
        for (k, label) in &labels {
            if !label.is_valid() {
                return Err(serde::de::Error::custom(LabelError::EmptyKey(label.to_string())));
            }
            if *k != label.key {
                return Err(serde::de::Error::custom(format!(
                    "label set key '{}' does not match label key '{}'",
                    k, label.key
                )));
            }
        }
        Ok(LabelSet { labels })
    }
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
