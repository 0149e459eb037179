// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Label command handlers

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use lbl_core::{
    parse_k8s_label, parse_k8s_select_label, parse_label, parse_select_label, Label, LabelSet,
};
use serde_json::json;

use crate::output::{handle_list, print_json, OutputFormat};

#[derive(Args)]
pub struct LabelArgs {
    #[command(subcommand)]
    pub command: LabelCommand,
}

#[derive(Subcommand)]
pub enum LabelCommand {
    /// Parse labels and print their canonical form
    Parse {
        /// Use `.` as the source delimiter (`k8s.app=web`)
        #[arg(long)]
        k8s: bool,
        /// Parse as selector labels (missing source means `any`)
        #[arg(long)]
        select: bool,
        /// Labels in `[source:]key[=value]` form
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Print the canonical sorted list of a label set
    List {
        /// Labels in `[source:]key[=value]` form
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Print the digest of a label set's sorted list
    Sum {
        /// Labels in `[source:]key[=value]` form
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Merge one label set into another (same keys are overwritten)
    Merge {
        /// Destination labels
        #[arg(long, num_args = 1.., required = true)]
        into: Vec<String>,
        /// Labels that overwrite the destination
        #[arg(long, num_args = 1..)]
        from: Vec<String>,
    },
}

pub fn handle(command: LabelCommand, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match command {
        LabelCommand::Parse { k8s, select, labels } => {
            let parse: fn(&str) -> Label = match (k8s, select) {
                (false, false) => parse_label,
                (false, true) => parse_select_label,
                (true, false) => parse_k8s_label,
                (true, true) => parse_k8s_select_label,
            };
            let parsed: Vec<Label> = labels.iter().map(|text| parse(text)).collect();
            handle_list(out, format, &parsed, "No labels", |l| {
                if l.is_valid() {
                    l.to_string()
                } else {
                    format!("{} (invalid: empty key)", l)
                }
            })?;
        }
        LabelCommand::List { labels } => {
            let set = label_set(&labels)?;
            let list = String::from_utf8_lossy(&set.sorted_list()).into_owned();
            match format {
                OutputFormat::Text => writeln!(out, "{}", list)?,
                OutputFormat::Json => {
                    print_json(out, &json!({ "sorted_list": list, "labels": set }))?
                }
            }
        }
        LabelCommand::Sum { labels } => {
            let set = label_set(&labels)?;
            let sum = set.sha256_sum();
            match format {
                OutputFormat::Text => writeln!(out, "{}", sum)?,
                OutputFormat::Json => print_json(out, &json!({ "sha256": sum, "labels": set }))?,
            }
        }
        LabelCommand::Merge { into, from } => {
            let mut set = label_set(&into)?;
            set.merge(&label_set(&from)?);
            match format {
                OutputFormat::Text => {
                    for line in set.model() {
                        writeln!(out, "{}", line)?;
                    }
                }
                OutputFormat::Json => print_json(out, &set)?,
            }
        }
    }
    Ok(())
}

/// Build a set from label texts, rejecting any that parse without a key.
fn label_set(texts: &[String]) -> Result<LabelSet> {
    let mut set = LabelSet::new();
    for text in texts {
        if let Some(previous) =
            set.insert(parse_label(text)).with_context(|| format!("invalid label '{}'", text))?
        {
            tracing::debug!(label = %previous, "replaced by later label with the same key");
        }
    }
    tracing::debug!(count = set.len(), "built label set");
    Ok(set)
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
