//! Versioned organization attribute records.
//!
//! An [`OrgAttribute`] is a time-versioned fact: "department X is parented
//! under Y from this effective date". For a well-formed department the
//! records partition time into non-overlapping `[effective, expiration)`
//! intervals; `expiration_date` of `None` means "still current".
//!
//! The non-overlap invariant is owned by whoever produces the snapshot.
//! Nothing in this crate enforces it, but every function here behaves
//! deterministically when it is violated.

#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::HierarchyError;

/// One versioned parent assignment for a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgAttribute {
    /// Opaque department identifier. The department entity itself (name,
    /// lifecycle) lives in the external directory.
    pub department_id: String,

    /// First day this assignment holds.
    pub effective_date: NaiveDate,

    /// Last day bound of the assignment; `None` means still current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,

    /// Containing department; `None` means top-level root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_department_id: Option<String>,
}

impl OrgAttribute {
    /// Convenience constructor for a still-current record.
    pub fn new(
        department_id: impl Into<String>,
        effective_date: NaiveDate,
        parent_department_id: Option<&str>,
    ) -> Self {
        Self {
            department_id: department_id.into(),
            effective_date,
            expiration_date: None,
            parent_department_id: parent_department_id.map(str::to_string),
        }
    }
}

/// Parse an ISO 8601 `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns [`HierarchyError::InvalidDate`] when the input does not parse.
pub fn parse_date(input: &str) -> Result<NaiveDate, HierarchyError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| HierarchyError::InvalidDate {
        input: input.to_string(),
    })
}

/// Fill in derived expiration dates, in place.
///
/// The expiration of a record is the department's next effective date
/// (the exclusive end of its `[effective, expiration)` interval), or `None`
/// when no later record exists. The backing store keeps only effective
/// dates and derives expirations on read; deriving the exclusive bound
/// keeps each department's records a gapless partition of time. Existing
/// `expiration_date` values are overwritten.
pub fn derive_expirations(records: &mut [OrgAttribute]) {
    let effectives: Vec<(String, NaiveDate)> = records
        .iter()
        .map(|r| (r.department_id.clone(), r.effective_date))
        .collect();

    for record in records.iter_mut() {
        let next_effective = effectives
            .iter()
            .filter(|(id, eff)| *id == record.department_id && *eff > record.effective_date)
            .map(|(_, eff)| *eff)
            .min();

        record.expiration_date = next_effective;
    }
}

/// All records for one department, most recent effective date first.
///
/// Returns an empty vec when the department has no records; existence
/// reporting is left to the caller.
pub fn department_history(records: &[OrgAttribute], department_id: &str) -> Vec<OrgAttribute> {
    let mut history: Vec<OrgAttribute> = records
        .iter()
        .filter(|r| r.department_id == department_id)
        .cloned()
        .collect();
    history.sort_by(|a, b| b.effective_date.cmp(&a.effective_date));
    history
}
