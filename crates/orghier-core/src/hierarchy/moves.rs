//! Reorganization pre-checks: descendant sets and cycle detection.
//!
//! # Overview
//!
//! A reorganization is recorded as a new versioned attribute giving a
//! department a new parent. Before such a record is persisted, the proposed
//! edge must be checked: parenting a department under its own descendant
//! (or under itself) would make it its own ancestor.
//!
//! # Design
//!
//! - **BFS over the full record set**: the check runs against every record,
//!   not a date-filtered view, so a move is rejected if it conflicts with
//!   any version of the hierarchy.
//! - **Visited-set guard**: malformed snapshots that already contain cycles
//!   (concurrent writers, manual edits) terminate safely; the descendant set
//!   then covers all nodes in the cycle rather than erroring.
//! - **Pure predicates**: nothing here writes or mutates records. The caller
//!   persists the new attribute only after a clean verdict.

#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::error::HierarchyError;
use crate::model::attribute::OrgAttribute;

/// All department ids transitively parented by `department_id`.
///
/// Breadth-first traversal over the parent pointers in `records`. The
/// starting id itself is excluded. Uses a visited set, so cyclic input
/// terminates and simply yields every id reachable through the cycle.
pub fn descendants(records: &[OrgAttribute], department_id: &str) -> HashSet<String> {
    let mut result: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(department_id);

    while let Some(current) = queue.pop_front() {
        for record in records {
            if record.parent_department_id.as_deref() == Some(current)
                && record.department_id != department_id
                && result.insert(record.department_id.clone())
            {
                queue.push_back(record.department_id.as_str());
            }
        }
    }

    debug!(
        department_id,
        count = result.len(),
        "computed descendant set"
    );
    result
}

/// Would parenting `department_id` under `proposed_parent` create a cycle?
///
/// - `true` when `proposed_parent` equals `department_id` (self-parenting).
/// - `false` when `proposed_parent` is `None` (moving to root is always safe).
/// - Otherwise, `true` iff `proposed_parent` lies in the descendant set of
///   `department_id`.
pub fn would_create_cycle(
    records: &[OrgAttribute],
    department_id: &str,
    proposed_parent: Option<&str>,
) -> bool {
    match proposed_parent {
        None => false,
        Some(parent) if parent == department_id => true,
        Some(parent) => descendants(records, department_id).contains(parent),
    }
}

/// [`would_create_cycle`] as a typed pre-commit check.
///
/// # Errors
///
/// Returns [`HierarchyError::CycleDetected`] when the move is unsafe; `Ok`
/// otherwise.
pub fn validate_move(
    records: &[OrgAttribute],
    department_id: &str,
    proposed_parent: Option<&str>,
) -> Result<(), HierarchyError> {
    if would_create_cycle(records, department_id, proposed_parent) {
        return Err(HierarchyError::CycleDetected {
            department_id: department_id.to_string(),
            proposed_parent: proposed_parent.unwrap_or_default().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{descendants, validate_move, would_create_cycle};
    use crate::error::HierarchyError;
    use crate::model::attribute::OrgAttribute;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
    }

    fn attr(id: &str, parent: Option<&str>) -> OrgAttribute {
        OrgAttribute::new(id, d("2024-01-01"), parent)
    }

    /// A → root, B → A, C → B, plus an unrelated X.
    fn chain() -> Vec<OrgAttribute> {
        vec![
            attr("A", None),
            attr("B", Some("A")),
            attr("C", Some("B")),
            attr("X", None),
        ]
    }

    // -----------------------------------------------------------------------
    // descendants
    // -----------------------------------------------------------------------

    #[test]
    fn descendants_of_chain_root() {
        let set = descendants(&chain(), "A");
        assert_eq!(set.len(), 2);
        assert!(set.contains("B"));
        assert!(set.contains("C"));
    }

    #[test]
    fn descendants_exclude_self() {
        assert!(!descendants(&chain(), "A").contains("A"));
    }

    #[test]
    fn descendants_of_leaf_is_empty() {
        assert!(descendants(&chain(), "C").is_empty());
    }

    #[test]
    fn descendants_of_unknown_id_is_empty() {
        assert!(descendants(&chain(), "nope").is_empty());
    }

    #[test]
    fn descendants_branching() {
        let records = vec![
            attr("A", None),
            attr("B1", Some("A")),
            attr("B2", Some("A")),
            attr("C1", Some("B1")),
        ];
        let set = descendants(&records, "A");
        assert_eq!(set.len(), 3);
        assert!(set.contains("C1"));
    }

    #[test]
    fn descendants_span_all_record_versions() {
        // Two versions of B with different parents; the check is not
        // date-filtered, so B counts as a descendant of both A and Z.
        let records = vec![
            OrgAttribute {
                department_id: "B".to_string(),
                effective_date: d("2023-01-01"),
                expiration_date: Some(d("2024-01-01")),
                parent_department_id: Some("A".to_string()),
            },
            OrgAttribute::new("B", d("2024-01-01"), Some("Z")),
        ];
        assert!(descendants(&records, "A").contains("B"));
        assert!(descendants(&records, "Z").contains("B"));
    }

    #[test]
    fn descendants_terminate_on_cyclic_input() {
        // Pre-existing cycle in raw data: A → B → A. The guard terminates
        // and the result covers the other node in the cycle.
        let records = vec![attr("A", Some("B")), attr("B", Some("A"))];
        let set = descendants(&records, "A");
        assert_eq!(set.len(), 1);
        assert!(set.contains("B"));
    }

    // -----------------------------------------------------------------------
    // would_create_cycle
    // -----------------------------------------------------------------------

    #[test]
    fn self_parenting_is_always_a_cycle() {
        assert!(would_create_cycle(&chain(), "A", Some("A")));
        assert!(would_create_cycle(&[], "lonely", Some("lonely")));
    }

    #[test]
    fn move_to_root_is_always_safe() {
        assert!(!would_create_cycle(&chain(), "A", None));
        assert!(!would_create_cycle(&[], "anything", None));
    }

    #[test]
    fn move_under_own_descendant_rejected() {
        assert!(would_create_cycle(&chain(), "A", Some("C")));
        assert!(would_create_cycle(&chain(), "A", Some("B")));
    }

    #[test]
    fn move_descendant_under_ancestor_allowed() {
        assert!(!would_create_cycle(&chain(), "C", Some("A")));
    }

    #[test]
    fn move_to_unrelated_department_allowed() {
        assert!(!would_create_cycle(&chain(), "B", Some("X")));
    }

    // -----------------------------------------------------------------------
    // validate_move
    // -----------------------------------------------------------------------

    #[test]
    fn validate_move_ok_for_safe_move() {
        assert!(validate_move(&chain(), "C", Some("X")).is_ok());
        assert!(validate_move(&chain(), "A", None).is_ok());
    }

    #[test]
    fn validate_move_reports_cycle_with_both_ids() {
        let err = validate_move(&chain(), "A", Some("C")).expect_err("cycle");
        match err {
            HierarchyError::CycleDetected {
                department_id,
                proposed_parent,
            } => {
                assert_eq!(department_id, "A");
                assert_eq!(proposed_parent, "C");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
