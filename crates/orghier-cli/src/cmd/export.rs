//! `orgh export` — dump the date-scoped hierarchy plus the department
//! directory as a single JSON document.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use clap::Args;
use orghier_core::{active_at, Forest};
use serde_json::json;

use crate::config::CliConfig;
use crate::output::OutputMode;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Point-in-time date (YYYY-MM-DD).
    #[arg(long)]
    pub date: String,

    /// Write to a file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn run(
    args: &ExportArgs,
    snapshot_flag: Option<&Path>,
    config: &CliConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let as_of = super::parse_date_arg(&args.date, mode)?;
    let snapshot = super::load_snapshot(snapshot_flag, config, mode)?;

    let records = snapshot.attributes_with_expirations();
    let active = active_at(&records, as_of);
    let forest = Forest::build(&active, &snapshot.directory());

    let document = json!({
        "export_date": Utc::now().to_rfc3339(),
        "hierarchy_date": as_of.to_string(),
        "departments": snapshot.departments,
        "hierarchy": forest.to_json(),
    });
    let rendered = serde_json::to_string_pretty(&document)?;

    match &args.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("write export to {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}
