//! Point-in-time resolution of versioned attribute records.
//!
//! A record is active at date `d` iff `effective_date <= d` and the record
//! has no expiration date or `d < expiration_date`. One active record per
//! department is the expected shape; when the snapshot violates the
//! non-overlap invariant, every match is returned in input order — conflict
//! reporting belongs to the caller, not here.

#![allow(clippy::must_use_candidate)]

use chrono::NaiveDate;
use tracing::debug;

use crate::model::attribute::OrgAttribute;

/// The records active at `as_of`, in input order.
///
/// Empty input yields empty output; there are no error conditions.
pub fn active_at(records: &[OrgAttribute], as_of: NaiveDate) -> Vec<OrgAttribute> {
    let active: Vec<OrgAttribute> = records
        .iter()
        .filter(|r| is_active(r, as_of))
        .cloned()
        .collect();

    debug!(
        as_of = %as_of,
        total = records.len(),
        active = active.len(),
        "resolved active attributes"
    );

    active
}

/// The activity filter for a single record.
fn is_active(record: &OrgAttribute, as_of: NaiveDate) -> bool {
    record.effective_date <= as_of
        && record.expiration_date.is_none_or(|exp| as_of < exp)
}
