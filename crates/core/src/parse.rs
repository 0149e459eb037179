// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Textual label parsing.
//!
//! Accepted forms (`<d>` is `:` for the native form, `.` for the
//! Kubernetes-style form):
//!
//! - `source<d>key=value`, `source<d>key`
//! - `key=value`, `key` (source left to the caller's default)
//! - `$key`, `$=key` (reserved shorthand)
//! - `reserved.key` (native form only)
//!
//! Parsing never fails. An empty key in the result marks the input invalid.

use crate::label::Label;
use crate::source;

/// Separator between source and key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Native,
    K8s,
}

impl Delimiter {
    fn as_char(self) -> char {
        match self {
            Delimiter::Native => ':',
            Delimiter::K8s => '.',
        }
    }
}

/// Parse `[source:]key[=value]`. A missing source becomes `unspec`.
///
/// `"$host"` parses to `reserved:host`, `"k8s:role=backend"` to
/// `k8s:role=backend`, `"role=backend"` to `unspec:role=backend`.
pub fn parse_label(text: &str) -> Label {
    parse(text, Delimiter::Native)
}

/// Parse `[source.]key[=value]`, the dotted form used by Kubernetes-derived
/// label keys. A missing source becomes `unspec`.
pub fn parse_k8s_label(text: &str) -> Label {
    parse(text, Delimiter::K8s)
}

/// Parse a selecting label. Same as [`parse_label`] except that a missing
/// source becomes `any`, so the label matches regardless of source.
pub fn parse_select_label(text: &str) -> Label {
    select(parse(text, Delimiter::Native))
}

/// Dotted-form variant of [`parse_select_label`].
pub fn parse_k8s_select_label(text: &str) -> Label {
    select(parse(text, Delimiter::K8s))
}

fn select(mut label: Label) -> Label {
    if label.source == source::UNSPEC {
        label.source = source::ANY.to_string();
    }
    label
}

fn parse(text: &str, delim: Delimiter) -> Label {
    let (src, rest) = split_source(text, delim);

    let (key, value) = match rest.find('=') {
        None => (rest, ""),
        // `$=key`: the text after `=` names the reserved identity
        Some(0) if src == source::RESERVED => (&rest[1..], ""),
        Some(i) => (&rest[..i], &rest[i + 1..]),
    };

    Label {
        key: key.to_string(),
        value: value.to_string(),
        source: if src.is_empty() { source::UNSPEC.to_string() } else { src.to_string() },
    }
}

/// Split the source off `text`, returning `(source, remainder)`.
///
/// The source is empty when `text` carries none.
fn split_source(text: &str, delim: Delimiter) -> (&str, &str) {
    if let Some(rest) = text.strip_prefix('$') {
        return (source::RESERVED, rest);
    }
    match text.find(delim.as_char()) {
        Some(i) => (&text[..i], &text[i + 1..]),
        None => {
            if delim == Delimiter::Native {
                if let Some(rest) = text.strip_prefix(source::RESERVED_KEY_PREFIX) {
                    return (source::RESERVED, rest);
                }
            }
            ("", text)
        }
    }
}

/// Split the source off `text` using the native `:` delimiter.
pub(crate) fn split_native_source(text: &str) -> (&str, &str) {
    split_source(text, Delimiter::Native)
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
