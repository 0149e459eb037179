// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lbl-core: label model and canonical label-set encoding
//!
//! A [`Label`] is a `source:key=value` triple. A [`LabelSet`] holds labels by
//! key and produces the canonical sorted encoding used as a key-value store
//! key and as digest input.

pub mod array;
mod codec;
pub mod error;
pub mod label;
pub mod labels;
pub mod parse;
pub mod source;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use array::LabelArray;
pub use error::LabelError;
pub use label::{extended_key_from, k8s_label_string, native_key_from, Label, PATH_DELIMITER};
pub use labels::{LabelSet, LABEL_HEALTH, LABEL_HOST};
pub use parse::{parse_k8s_label, parse_k8s_select_label, parse_label, parse_select_label};
