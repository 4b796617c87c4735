//! `orgh tree` — render the organization hierarchy as of a date.

use std::io::Write;
use std::path::Path;

use clap::Args;
use orghier_core::{active_at, Forest, NodeId};

use crate::config::CliConfig;
use crate::output::OutputMode;

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Point-in-time date (YYYY-MM-DD).
    #[arg(long)]
    pub date: String,
}

pub fn run(
    args: &TreeArgs,
    snapshot_flag: Option<&Path>,
    config: &CliConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let as_of = super::parse_date_arg(&args.date, mode)?;
    let snapshot = super::load_snapshot(snapshot_flag, config, mode)?;

    let records = snapshot.attributes_with_expirations();
    let active = active_at(&records, as_of);
    let forest = Forest::build(&active, &snapshot.directory());

    if mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&forest.to_json())?);
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if forest.is_empty() {
        writeln!(out, "no organization data active on {as_of}")?;
        return Ok(());
    }
    for root in forest.roots() {
        write_subtree(&forest, *root, 0, &mut out)?;
    }
    Ok(())
}

/// Indented depth-first rendering. The forest's children links are acyclic
/// for any snapshot that passed move validation; depth is bounded by the
/// node count, so plain recursion is fine here.
fn write_subtree(
    forest: &Forest,
    id: NodeId,
    depth: usize,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    let node = forest.get(id);
    let indent = "  ".repeat(depth);
    let expires = node
        .expiration_date
        .map_or_else(|| "current".to_string(), |d| d.to_string());
    writeln!(
        out,
        "{indent}{} ({})  [effective: {} | expires: {}]",
        node.name, node.id, node.effective_date, expires
    )?;
    for child in &node.children {
        write_subtree(forest, *child, depth + 1, out)?;
    }
    Ok(())
}
