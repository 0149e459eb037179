// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;
use lbl_client::Endpoint;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const RULE_WIDTH: usize = 78;

/// Section title framed by dashed rules.
pub fn header(out: &mut impl Write, title: &str) -> std::io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out, "{}\n{}\n{}", rule, title, rule)
}

/// One fixed-width row of the endpoint table: id, container, IPv4, IPv6.
pub fn endpoint_row(ep: &Endpoint) -> String {
    let ipv4 = ep.ipv4_addrs().first().copied().unwrap_or_default();
    let ipv6 = ep.ipv6_addrs().first().copied().unwrap_or_default();
    format!("{:>8} {:>14} {:>16} {:>32}", ep.id, ep.container_name(), ipv4, ipv6)
}

/// Summary line of an endpoint's IPv4 addresses.
pub fn ip_summary(ep: &Endpoint) -> String {
    let addrs = ep.ipv4_addrs();
    if addrs.is_empty() {
        format!("EP ID {} does not have an IP address", ep.id)
    } else {
        format!("EP ID {} has IP addresses: {}", ep.id, addrs.join(", "))
    }
}

/// Pretty-printed JSON followed by a newline.
pub fn print_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Print `items` as JSON, or as text lines with `empty_msg` when there are none.
pub fn handle_list<T: Serialize>(
    out: &mut impl Write,
    format: OutputFormat,
    items: &[T],
    empty_msg: &str,
    render_line: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(out, items)?,
        OutputFormat::Text => {
            if items.is_empty() {
                writeln!(out, "{}", empty_msg)?;
            }
            for item in items {
                writeln!(out, "{}", render_line(item))?;
            }
        }
    }
    Ok(())
}
