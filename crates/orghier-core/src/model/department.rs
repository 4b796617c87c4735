//! Department directory lookup.
//!
//! Departments themselves (names, lifecycle, CRUD) are owned by an external
//! system. The core only needs id → display-name resolution, and tolerates
//! ids the directory has never heard of: an unresolved id is displayed as
//! the raw id, never treated as an error.

#![allow(clippy::must_use_candidate)]

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A business organizational unit, as the external directory describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub department_id: String,
    pub department_name: String,
}

/// Immutable id → name lookup built from a directory snapshot.
#[derive(Debug, Clone, Default)]
pub struct DepartmentDirectory {
    names: HashMap<String, String>,
}

impl DepartmentDirectory {
    /// Build a directory from a department snapshot.
    ///
    /// Later entries win on duplicate ids, matching last-write semantics of
    /// the upstream store.
    pub fn from_departments(departments: &[Department]) -> Self {
        let names = departments
            .iter()
            .map(|dept| (dept.department_id.clone(), dept.department_name.clone()))
            .collect();
        Self { names }
    }

    /// Resolve a department id to its display name.
    ///
    /// Falls back to the raw id when the directory has no entry.
    pub fn display_name<'a>(&'a self, department_id: &'a str) -> &'a str {
        self.names
            .get(department_id)
            .map_or(department_id, String::as_str)
    }

    /// Returns `true` if the directory has an entry for the id.
    pub fn contains(&self, department_id: &str) -> bool {
        self.names.contains_key(department_id)
    }
}
