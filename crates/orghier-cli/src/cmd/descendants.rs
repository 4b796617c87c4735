//! `orgh descendants` — transitive descendant set of a department.
//!
//! Runs over the full record set, not a date-filtered view, matching the
//! semantics of the move pre-check.

use std::io::Write;
use std::path::Path;

use clap::Args;
use orghier_core::{descendants, HierarchyError};

use crate::config::CliConfig;
use crate::output::{render, render_error, CliError, OutputMode};

#[derive(Args, Debug)]
pub struct DescendantsArgs {
    /// Department id.
    pub department_id: String,
}

pub fn run(
    args: &DescendantsArgs,
    snapshot_flag: Option<&Path>,
    config: &CliConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let snapshot = super::load_snapshot(snapshot_flag, config, mode)?;

    if !snapshot.knows_department(&args.department_id) {
        let err = HierarchyError::DepartmentNotFound(args.department_id.clone());
        render_error(mode, &CliError::from(&err))?;
        anyhow::bail!("{err}");
    }

    let mut ids: Vec<String> = descendants(&snapshot.attributes, &args.department_id)
        .into_iter()
        .collect();
    ids.sort();

    let directory = snapshot.directory();
    render(mode, &ids, |ids, out| {
        if ids.is_empty() {
            return writeln!(out, "{} has no descendants", args.department_id);
        }
        for id in ids {
            writeln!(out, "{id}  {}", directory.display_name(id))?;
        }
        Ok(())
    })
}
