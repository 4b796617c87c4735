//! `orgh history` — one department's versioned parent history, newest first.

use std::io::Write;
use std::path::Path;

use clap::Args;
use orghier_core::model::attribute::department_history;
use orghier_core::HierarchyError;

use crate::config::CliConfig;
use crate::output::{render, render_error, CliError, OutputMode};

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Department id.
    pub department_id: String,
}

pub fn run(
    args: &HistoryArgs,
    snapshot_flag: Option<&Path>,
    config: &CliConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let snapshot = super::load_snapshot(snapshot_flag, config, mode)?;

    let records = snapshot.attributes_with_expirations();
    let history = department_history(&records, &args.department_id);
    if history.is_empty() {
        let err = HierarchyError::DepartmentNotFound(args.department_id.clone());
        render_error(mode, &CliError::from(&err))?;
        anyhow::bail!("{err}");
    }

    let directory = snapshot.directory();
    let name = directory.display_name(&args.department_id).to_string();

    render(mode, &history, |records, out| {
        writeln!(out, "{name} ({})", args.department_id)?;
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
                "  {} .. {:<12} parent: {}",
                record.effective_date, expires, parent
            )?;
        }
        Ok(())
    })
}
