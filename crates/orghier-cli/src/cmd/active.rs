//! `orgh active` — list attribute records active at a date.

use std::io::Write;
use std::path::Path;

use clap::Args;
use orghier_core::active_at;

use crate::config::CliConfig;
use crate::output::{render, OutputMode};

#[derive(Args, Debug)]
pub struct ActiveArgs {
    /// Point-in-time date (YYYY-MM-DD).
    #[arg(long)]
    pub date: String,
}

pub fn run(
    args: &ActiveArgs,
    snapshot_flag: Option<&Path>,
    config: &CliConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let as_of = super::parse_date_arg(&args.date, mode)?;
    let snapshot = super::load_snapshot(snapshot_flag, config, mode)?;

    let records = snapshot.attributes_with_expirations();
    let active = active_at(&records, as_of);
    let directory = snapshot.directory();

    render(mode, &active, |records, out| {
        if records.is_empty() {
            return writeln!(out, "no records active on {as_of}");
        }
        for record in records {
            let parent = record
                .parent_department_id
                .as_deref()
                .unwrap_or("(top level)");
            let expires = record
                .expiration_date
                .map_or_else(|| "current".to_string(), |d| d.to_string());
            writeln!(
                out,
                "{:<12} {:<24} parent: {:<12} effective: {} | expires: {}",
                record.department_id,
                directory.display_name(&record.department_id),
                parent,
                record.effective_date,
                expires
            )?;
        }
        Ok(())
    })
}
