// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Key-sorted label arrays used for matching and display.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::label::Label;
use crate::parse::parse_select_label;

/// Labels sorted by key.
///
/// Built from a [`LabelSet`](crate::LabelSet) or from selector strings; the
/// order is fixed at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Label>", into = "Vec<Label>")]
pub struct LabelArray(Vec<Label>);

impl LabelArray {
    /// Sort `labels` by key. Equal keys keep their input order.
    pub fn new(mut labels: Vec<Label>) -> Self {
        labels.sort_by(|a, b| a.key.cmp(&b.key));
        Self(labels)
    }

    pub(crate) fn from_sorted(labels: Vec<Label>) -> Self {
        Self(labels)
    }

    /// Parse selector strings with [`parse_select_label`] and sort them.
    pub fn from_select_model<S: AsRef<str>>(model: &[S]) -> Self {
        Self::new(model.iter().map(|s| parse_select_label(s.as_ref())).collect())
    }

    /// Whether every label in `needed` is matched by some label here.
    ///
    /// Each needed label acts as the selector, so a needed label with source
    /// `any` matches regardless of source.
    pub fn contains(&self, needed: &LabelArray) -> bool {
        needed.iter().all(|n| self.iter().any(|l| n.matches(l)))
    }

    pub fn get(&self, key: &str) -> Option<&Label> {
        self.0.iter().find(|l| l.key == key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Label] {
        &self.0
    }

    /// Display strings in array order.
    pub fn model(&self) -> Vec<String> {
        self.iter().map(Label::to_string).collect()
    }
}

impl fmt::Display for LabelArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.model().join(", "))
    }
}

impl From<Vec<Label>> for LabelArray {
    fn from(labels: Vec<Label>) -> Self {
        Self::new(labels)
    }
}

impl From<LabelArray> for Vec<Label> {
    fn from(array: LabelArray) -> Self {
        array.0
    }
}

impl<'a> IntoIterator for &'a LabelArray {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "array_tests.rs"]
mod tests;
