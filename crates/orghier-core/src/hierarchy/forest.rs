//! Arena-backed assembly of active records into a forest.
//!
//! # Overview
//!
//! [`Forest::build`] turns a consistent snapshot of active records into an
//! ordered forest of [`HierarchyNode`]s. Nodes live in a single arena
//! (`Vec`) and link children by index, so the built forest is cheap to
//! traverse and hands out only immutable views — callers cannot mutate one
//! request's tree into another's.
//!
//! # Policies
//!
//! - **Dangling parent = root.** A record whose `parent_department_id` is
//!   not present in the snapshot becomes a root. This is deliberate policy,
//!   not an error: a date-scoped snapshot can legitimately exclude the
//!   parent's record.
//! - **Structural assembly only.** No cycle detection happens here. A
//!   snapshot with cyclic parent references still yields one node per
//!   record; traversal helpers on [`Forest`] carry visited guards, and
//!   writers are expected to consult [`crate::hierarchy::moves`] before
//!   persisting any new edge.
//! - **Input order.** Children appear in record input order; nothing is
//!   sorted.

#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde_json::json;
use tracing::debug;

use crate::model::attribute::OrgAttribute;
use crate::model::department::DepartmentDirectory;

/// Index of a node within its [`Forest`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One department's position in the resolved hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyNode {
    /// Department id of the underlying record.
    pub id: String,
    /// Display name from the directory, or the raw id when unresolved.
    pub name: String,
    pub effective_date: NaiveDate,
    pub expiration_date: Option<NaiveDate>,
    /// Parent id as recorded, even when dangling.
    pub parent_id: Option<String>,
    /// Children in input record order.
    pub children: Vec<NodeId>,
}

/// An ordered forest of hierarchy nodes built fresh from one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    nodes: Vec<HierarchyNode>,
    roots: Vec<NodeId>,
}

impl Forest {
    /// Assemble a forest from active records.
    ///
    /// One node is created per record, in input order. A node attaches to
    /// the node of its `parent_department_id` when one exists in the same
    /// snapshot (first occurrence wins if the snapshot holds duplicate ids);
    /// otherwise it becomes a root. Every record appears exactly once.
    pub fn build(records: &[OrgAttribute], directory: &DepartmentDirectory) -> Self {
        let mut nodes: Vec<HierarchyNode> = Vec::with_capacity(records.len());
        let mut by_department: HashMap<&str, NodeId> = HashMap::new();

        for (index, record) in records.iter().enumerate() {
            nodes.push(HierarchyNode {
                id: record.department_id.clone(),
                name: directory.display_name(&record.department_id).to_string(),
                effective_date: record.effective_date,
                expiration_date: record.expiration_date,
                parent_id: record.parent_department_id.clone(),
                children: Vec::new(),
            });
            by_department
                .entry(record.department_id.as_str())
                .or_insert(NodeId(index));
        }

        let mut roots: Vec<NodeId> = Vec::new();
        for (index, record) in records.iter().enumerate() {
            let parent = record
                .parent_department_id
                .as_deref()
                .and_then(|pid| by_department.get(pid).copied());
            match parent {
                Some(parent_id) => nodes[parent_id.0].children.push(NodeId(index)),
                None => roots.push(NodeId(index)),
            }
        }

        debug!(nodes = nodes.len(), roots = roots.len(), "built forest");
        Self { nodes, roots }
    }

    /// Root nodes in input record order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Look up a node by arena index.
    pub fn get(&self, id: NodeId) -> &HierarchyNode {
        &self.nodes[id.0]
    }

    /// Total number of nodes (== number of input records).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in arena (input) order.
    pub fn iter(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.nodes.iter()
    }

    /// Depth-first flatten from the roots, children in input order.
    ///
    /// Guarded by a visited set so malformed (cyclic) snapshots terminate;
    /// on such input the result covers only root-reachable nodes.
    pub fn flatten(&self) -> Vec<NodeId> {
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut result: Vec<NodeId> = Vec::new();
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            result.push(id);
            for child in self.nodes[id.0].children.iter().rev() {
                if !visited.contains(child) {
                    stack.push(*child);
                }
            }
        }

        result
    }

    /// Nested JSON view of the forest (array of root trees).
    ///
    /// Shares the visited guard with [`Forest::flatten`]: a node already
    /// emitted is not emitted again under a cyclic snapshot.
    pub fn to_json(&self) -> serde_json::Value {
        let mut visited: HashSet<NodeId> = HashSet::new();
        let trees: Vec<serde_json::Value> = self
            .roots
            .iter()
            .map(|root| self.node_to_json(*root, &mut visited))
            .collect();
        serde_json::Value::Array(trees)
    }

    fn node_to_json(&self, id: NodeId, visited: &mut HashSet<NodeId>) -> serde_json::Value {
        visited.insert(id);
        let node = &self.nodes[id.0];
        let mut children: Vec<serde_json::Value> = Vec::with_capacity(node.children.len());
        for child in &node.children {
            if !visited.contains(child) {
                children.push(self.node_to_json(*child, visited));
            }
        }

        json!({
            "id": node.id,
            "name": node.name,
            "effective_date": node.effective_date.to_string(),
            "expiration_date": node.expiration_date.map(|d| d.to_string()),
            "parent_id": node.parent_id,
            "children": children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Forest, NodeId};
    use crate::model::attribute::OrgAttribute;
    use crate::model::department::{Department, DepartmentDirectory};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
    }

    fn attr(id: &str, parent: Option<&str>) -> OrgAttribute {
        OrgAttribute::new(id, d("2024-01-01"), parent)
    }

    fn directory(pairs: &[(&str, &str)]) -> DepartmentDirectory {
        let departments: Vec<Department> = pairs
            .iter()
            .map(|(id, name)| Department {
                department_id: (*id).to_string(),
                department_name: (*name).to_string(),
            })
            .collect();
        DepartmentDirectory::from_departments(&departments)
    }

    fn names(forest: &Forest, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|id| forest.get(*id).id.clone()).collect()
    }

    // -----------------------------------------------------------------------
    // Assembly
    // -----------------------------------------------------------------------

    #[test]
    fn empty_snapshot_builds_empty_forest() {
        let forest = Forest::build(&[], &DepartmentDirectory::default());
        assert!(forest.is_empty());
        assert!(forest.roots().is_empty());
        assert!(forest.flatten().is_empty());
    }

    #[test]
    fn spec_scenario_one_root_one_child() {
        let records = vec![attr("D1", None), attr("D2", Some("D1"))];
        let forest = Forest::build(&records, &DepartmentDirectory::default());

        assert_eq!(forest.len(), 2);
        assert_eq!(forest.roots().len(), 1);
        let root = forest.get(forest.roots()[0]);
        assert_eq!(root.id, "D1");
        assert_eq!(root.children.len(), 1);
        assert_eq!(forest.get(root.children[0]).id, "D2");
    }

    #[test]
    fn children_keep_input_order() {
        let records = vec![
            attr("root", None),
            attr("c", Some("root")),
            attr("a", Some("root")),
            attr("b", Some("root")),
        ];
        let forest = Forest::build(&records, &DepartmentDirectory::default());
        let root = forest.get(forest.roots()[0]);
        assert_eq!(names(&forest, &root.children), vec!["c", "a", "b"]);
    }

    #[test]
    fn dangling_parent_becomes_root() {
        let records = vec![attr("D1", Some("missing")), attr("D2", None)];
        let forest = Forest::build(&records, &DepartmentDirectory::default());
        assert_eq!(forest.roots().len(), 2);
        let d1 = forest.get(forest.roots()[0]);
        assert_eq!(d1.id, "D1");
        // The recorded parent id is preserved even though it is dangling.
        assert_eq!(d1.parent_id.as_deref(), Some("missing"));
    }

    #[test]
    fn multiple_roots_allowed() {
        let records = vec![attr("A", None), attr("B", None), attr("A1", Some("A"))];
        let forest = Forest::build(&records, &DepartmentDirectory::default());
        assert_eq!(names(&forest, forest.roots()), vec!["A", "B"]);
    }

    #[test]
    fn names_resolved_with_raw_id_fallback() {
        let records = vec![attr("D1", None), attr("D2", Some("D1"))];
        let dir = directory(&[("D1", "Head Office")]);
        let forest = Forest::build(&records, &dir);
        assert_eq!(forest.get(forest.roots()[0]).name, "Head Office");
        let child = forest.get(forest.roots()[0]).children[0];
        assert_eq!(forest.get(child).name, "D2");
    }

    #[test]
    fn size_preserved_with_duplicate_ids() {
        // Overlap violation: two active records for D1. Both get a node.
        let records = vec![attr("D1", None), attr("D1", None), attr("D2", Some("D1"))];
        let forest = Forest::build(&records, &DepartmentDirectory::default());
        assert_eq!(forest.len(), 3);
        assert_eq!(forest.flatten().len(), 3);
        // Children attach to the first node carrying the id.
        assert_eq!(forest.get(forest.roots()[0]).children.len(), 1);
        assert_eq!(forest.get(forest.roots()[1]).children.len(), 0);
    }

    #[test]
    fn deep_chain_flattens_depth_first() {
        let records = vec![
            attr("A", None),
            attr("B", Some("A")),
            attr("C", Some("B")),
            attr("X", None),
        ];
        let forest = Forest::build(&records, &DepartmentDirectory::default());
        assert_eq!(names(&forest, &forest.flatten()), vec!["A", "B", "C", "X"]);
    }

    #[test]
    fn cyclic_snapshot_still_one_node_per_record() {
        // A's parent is B and B's parent is A: no roots, but both nodes exist
        // and flatten terminates.
        let records = vec![attr("A", Some("B")), attr("B", Some("A"))];
        let forest = Forest::build(&records, &DepartmentDirectory::default());
        assert_eq!(forest.len(), 2);
        assert!(forest.roots().is_empty());
        assert!(forest.flatten().is_empty());
    }

    #[test]
    fn rebuild_is_deterministic() {
        let records = vec![
            attr("A", None),
            attr("B", Some("A")),
            attr("C", Some("A")),
            attr("D", Some("missing")),
        ];
        let dir = directory(&[("A", "Alpha"), ("B", "Beta")]);
        let first = Forest::build(&records, &dir);
        let second = Forest::build(&records, &dir);
        assert_eq!(first, second);
        assert_eq!(first.to_json(), second.to_json());
    }

    // -----------------------------------------------------------------------
    // JSON view
    // -----------------------------------------------------------------------

    #[test]
    fn json_view_nests_children() {
        let records = vec![attr("D1", None), attr("D2", Some("D1"))];
        let dir = directory(&[("D1", "Head Office"), ("D2", "Sales")]);
        let json = Forest::build(&records, &dir).to_json();

        assert_eq!(json.as_array().map(Vec::len), Some(1));
        assert_eq!(json[0]["id"], "D1");
        assert_eq!(json[0]["name"], "Head Office");
        assert_eq!(json[0]["effective_date"], "2024-01-01");
        assert!(json[0]["expiration_date"].is_null());
        assert_eq!(json[0]["children"][0]["id"], "D2");
        assert_eq!(json[0]["children"][0]["parent_id"], "D1");
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    proptest! {
        /// Size preservation: for acyclic snapshots every record appears in
        /// the flattened forest exactly once.
        #[test]
        fn flatten_is_size_preserving(parents in proptest::collection::vec(0usize..20, 1..40)) {
            // Index i may only point at an earlier index, so input is acyclic.
            let records: Vec<OrgAttribute> = parents
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let parent = (*p < i).then(|| format!("dept-{p}"));
                    OrgAttribute::new(
                        format!("dept-{i}"),
                        d("2024-01-01"),
                        parent.as_deref(),
                    )
                })
                .collect();

            let forest = Forest::build(&records, &DepartmentDirectory::default());
            prop_assert_eq!(forest.len(), records.len());
            prop_assert_eq!(forest.flatten().len(), records.len());
        }
    }
}
