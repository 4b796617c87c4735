//! Snapshot loading.
//!
//! The CLI is the "external collaborator" of the core: it fetches a full
//! record snapshot once per invocation and hands plain slices to the
//! library. The snapshot is a JSON object:
//!
//! ```json
//! { "departments": [ ... ], "attributes": [ ... ] }
//! ```
//!
//! matching the export format of the upstream admin backend. Path
//! resolution: `--snapshot` flag, then `ORGH_SNAPSHOT`, then the
//! `snapshot` key of `.orgh.toml`.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use orghier_core::model::attribute;
use orghier_core::{Department, DepartmentDirectory, ErrorCode, OrgAttribute};
use serde::Deserialize;

use crate::config::CliConfig;
use crate::output::CliError;

/// One consistent snapshot of the upstream store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub attributes: Vec<OrgAttribute>,
}

impl Snapshot {
    /// Directory view over the snapshot's departments.
    pub fn directory(&self) -> DepartmentDirectory {
        DepartmentDirectory::from_departments(&self.departments)
    }

    /// Attribute records with expiration dates derived from successor
    /// effective dates, leaving the raw snapshot untouched.
    pub fn attributes_with_expirations(&self) -> Vec<OrgAttribute> {
        let mut records = self.attributes.clone();
        attribute::derive_expirations(&mut records);
        records
    }

    /// Returns `true` if the snapshot holds any record for the department,
    /// either as a subject or as somebody's parent.
    pub fn knows_department(&self, department_id: &str) -> bool {
        self.attributes.iter().any(|r| {
            r.department_id == department_id
                || r.parent_department_id.as_deref() == Some(department_id)
        })
    }
}

/// Resolve the snapshot path from flag, environment, then config.
pub fn resolve_path(flag: Option<&Path>, config: &CliConfig) -> Result<PathBuf, CliError> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env::var_os("ORGH_SNAPSHOT") {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = &config.snapshot {
        return Ok(path.clone());
    }
    Err(CliError::new(
        "no snapshot file configured",
        ErrorCode::SnapshotNotFound,
    ))
}

/// Load and parse a snapshot file.
pub fn load(path: &Path) -> Result<Snapshot, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        CliError::new(
            format!("cannot read snapshot {}: {e}", path.display()),
            ErrorCode::SnapshotNotFound,
        )
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        CliError::new(
            format!("cannot parse snapshot {}: {e}", path.display()),
            ErrorCode::SnapshotParseError,
        )
    })
}
