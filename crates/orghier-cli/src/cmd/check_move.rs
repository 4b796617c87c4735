//! `orgh check-move` — pre-commit check for a reparenting move.
//!
//! Exits zero when the move is safe, nonzero with a `CycleDetected` error
//! when parenting the department under the proposed target would make it
//! its own ancestor. Persisting the new attribute record is the backend's
//! job; this command only delivers the verdict.

use std::io::Write;
use std::path::Path;

use clap::Args;
use orghier_core::validate_move;
use serde::Serialize;

use crate::config::CliConfig;
use crate::output::{render, render_error, CliError, OutputMode};

#[derive(Args, Debug)]
pub struct CheckMoveArgs {
    /// Department id to move.
    pub department_id: String,

    /// Proposed new parent id. Use "--parent none" for top level.
    #[arg(long)]
    pub parent: String,
}

#[derive(Debug, Serialize)]
struct MoveVerdict {
    department_id: String,
    proposed_parent: Option<String>,
    ok: bool,
}

pub fn run(
    args: &CheckMoveArgs,
    snapshot_flag: Option<&Path>,
    config: &CliConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let snapshot = super::load_snapshot(snapshot_flag, config, mode)?;

    // "none" means move to top level (always safe).
    let proposed_parent: Option<&str> = if args.parent.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(args.parent.as_str())
    };

    if let Err(e) = validate_move(&snapshot.attributes, &args.department_id, proposed_parent) {
        render_error(mode, &CliError::from(&e))?;
        anyhow::bail!("{e}");
    }

    let verdict = MoveVerdict {
        department_id: args.department_id.clone(),
        proposed_parent: proposed_parent.map(str::to_string),
        ok: true,
    };
    render(mode, &verdict, |v, out| {
        let target = v.proposed_parent.as_deref().unwrap_or("top level");
        writeln!(
            out,
            "ok: moving {} under {} creates no cycle",
            v.department_id, target
        )
    })
}
