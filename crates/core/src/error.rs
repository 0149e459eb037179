// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors from label construction and decoding.
///
/// Text parsing itself is total; these cover the checked entry points.
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("invalid label: empty data")]
    EmptyData,

    #[error("invalid label '{0}': empty key")]
    EmptyKey(String),

    #[error("invalid label: '{0}' does not contain label key")]
    MissingKey(String),

    #[error("invalid label: failed to parse '{0}' as a string")]
    EmptyShortForm(String),

    /// Neither the object form nor the short string form decoded.
    #[error("decode of label failed: as object: {object}; as string: {string}")]
    Decode { object: serde_json::Error, string: serde_json::Error },
}
