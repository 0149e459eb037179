// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The key/value/source label.

use std::fmt;
use std::str::FromStr;

use crate::parse::{parse_label, split_native_source};
use crate::source;

/// Separator between source and key in an extended key.
pub const PATH_DELIMITER: char = '.';

/// A security-relevant label: `source:key=value`.
///
/// An absent value is the empty string. A label with an empty key is invalid
/// and is never stored in a [`LabelSet`](crate::LabelSet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label {
    pub key: String,
    pub value: String,
    pub source: String,
}

impl Label {
    /// Build a label from a raw key/value pair.
    ///
    /// `key` may carry a native source prefix (`k8s:app`, `$host`,
    /// `reserved.host`). An empty `source` takes the prefix's source, or
    /// `unspec` when there is none; a non-empty `source` wins and the prefix
    /// is dropped. `Label::new("$", "world", "")` names the reserved identity
    /// `world`.
    pub fn new(key: impl AsRef<str>, value: impl Into<String>, source: impl Into<String>) -> Self {
        let (prefix, key) = split_native_source(key.as_ref());
        let mut value = value.into();
        let mut source = source.into();

        if source.is_empty() {
            source = if prefix.is_empty() { source::UNSPEC } else { prefix }.to_string();
        }

        let key = if prefix == source::RESERVED && key.is_empty() {
            std::mem::take(&mut value)
        } else {
            key.to_string()
        };

        Self { key, value, source }
    }

    /// True when the key is non-empty.
    pub fn is_valid(&self) -> bool {
        !self.key.is_empty()
    }

    pub fn is_any_source(&self) -> bool {
        self.source == source::ANY
    }

    pub fn is_reserved_source(&self) -> bool {
        self.source == source::RESERVED
    }

    /// Whether this label, used as a selector, matches `target`.
    ///
    /// Key and value must be equal. Sources must be equal unless this label's
    /// source is `any`.
    pub fn matches(&self, target: &Label) -> bool {
        if !self.is_any_source() && self.source != target.source {
            return false;
        }
        self.key == target.key && self.value == target.value
    }

    /// The `source:key=value;` record used in key-value store keys.
    ///
    /// The format is load-bearing: identity lookups prefix-match on it, and
    /// the trailing `;` is always present. Separator characters inside the
    /// fields are not escaped.
    pub fn format_for_kv_store(&self) -> String {
        format!("{}:{}={};", self.source, self.key, self.value)
    }

    /// The key with its source encoded: `source.key`.
    pub fn extended_key(&self) -> String {
        format!("{}{}{}", self.source, PATH_DELIMITER, self.key)
    }

    /// Decode a label from JSON bytes.
    ///
    /// Tries the object form first, then the `[source:]key[=value]` string
    /// form. The error names both stages when neither decodes.
    pub fn from_json(data: &[u8]) -> Result<Self, crate::LabelError> {
        crate::codec::decode_label(data)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}:{}", self.source, self.key)
        } else {
            write!(f, "{}:{}={}", self.source, self.key, self.value)
        }
    }
}

impl FromStr for Label {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_label(s))
    }
}

/// Extended key (`source.key`) of a label string.
///
/// `k8s:foo=bar` gives `k8s.foo`; a string without a source gives `any.foo`.
pub fn extended_key_from(text: &str) -> String {
    let (src, rest) = split_native_source(text);
    let src = if src.is_empty() { source::ANY } else { src };
    let key = match rest.find('=') {
        Some(i) => &rest[..i],
        None => rest,
    };
    format!("{}{}{}", src, PATH_DELIMITER, key)
}

/// Native `source:key` form of an extended key.
///
/// The first `.` becomes `:`; a key without one is given the `any` source.
pub fn native_key_from(extended_key: &str) -> String {
    match extended_key.split_once(PATH_DELIMITER) {
        Some((src, key)) => format!("{}:{}", src, key),
        None => format!("{}:{}", source::ANY, extended_key),
    }
}

/// `k8s:key=value` label string.
pub fn k8s_label_string(key: &str, value: &str) -> String {
    format!("{}:{}={}", source::K8S, key, value)
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
