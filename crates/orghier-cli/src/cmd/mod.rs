//! One module per subcommand. Each exposes an `Args` struct and a `run`
//! function taking the snapshot flag, config, and output mode.

pub mod active;
pub mod check_move;
pub mod descendants;
pub mod export;
pub mod history;
pub mod tree;

use std::path::Path;

use chrono::NaiveDate;
use orghier_core::model::attribute;

use crate::config::CliConfig;
use crate::output::{render_error, CliError, OutputMode};
use crate::snapshot::{self, Snapshot};

/// Parse a `--date` argument, rendering a structured error on failure.
pub fn parse_date_arg(input: &str, mode: OutputMode) -> anyhow::Result<NaiveDate> {
    match attribute::parse_date(input) {
        Ok(date) => Ok(date),
        Err(e) => {
            render_error(mode, &CliError::from(&e))?;
            anyhow::bail!("{e}");
        }
    }
}

/// Resolve and load the snapshot, rendering a structured error on failure.
pub fn load_snapshot(
    flag: Option<&Path>,
    config: &CliConfig,
    mode: OutputMode,
) -> anyhow::Result<Snapshot> {
    let path = match snapshot::resolve_path(flag, config) {
        Ok(path) => path,
        Err(e) => {
            render_error(mode, &e)?;
            anyhow::bail!("{}", e.error);
        }
    };
    match snapshot::load(&path) {
        Ok(snapshot) => {
            tracing::debug!(
                path = %path.display(),
                departments = snapshot.departments.len(),
                attributes = snapshot.attributes.len(),
                "loaded snapshot"
            );
            Ok(snapshot)
        }
        Err(e) => {
            render_error(mode, &e)?;
            anyhow::bail!("{}", e.error);
        }
    }
}
