//! Typed errors and machine-readable error codes.
//!
//! [`HierarchyError`] is the library error type. [`ErrorCode`] gives every
//! failure a stable `E####` identifier with a short message and an optional
//! remediation hint, so scripted callers of the CLI can branch on the code
//! instead of parsing prose.

use thiserror::Error;

/// Errors surfaced by the hierarchy core.
#[derive(Debug, Error)]
pub enum HierarchyError {
    /// A date string did not parse as ISO 8601 `YYYY-MM-DD`.
    #[error("invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// The proposed reparenting would make the department its own ancestor.
    #[error("moving '{department_id}' under '{proposed_parent}' would create a cycle")]
    CycleDetected {
        department_id: String,
        proposed_parent: String,
    },

    /// The snapshot has no record at all for the requested department.
    #[error("department not found: '{0}'")]
    DepartmentNotFound(String),
}

impl HierarchyError {
    /// Map this error to its stable machine code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidDate { .. } => ErrorCode::InvalidDate,
            Self::CycleDetected { .. } => ErrorCode::CycleDetected,
            Self::DepartmentNotFound(_) => ErrorCode::DepartmentNotFound,
        }
    }
}

/// Machine-readable error codes for scripted callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidDate,
    DepartmentNotFound,
    CycleDetected,
    SnapshotParseError,
    SnapshotNotFound,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidDate => "E1001",
            Self::DepartmentNotFound => "E2001",
            Self::CycleDetected => "E2002",
            Self::SnapshotParseError => "E3001",
            Self::SnapshotNotFound => "E3002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidDate => "Invalid date",
            Self::DepartmentNotFound => "Department not found",
            Self::CycleDetected => "Cycle would be created",
            Self::SnapshotParseError => "Snapshot file parse error",
            Self::SnapshotNotFound => "Snapshot file not found",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::InvalidDate => Some("Use ISO 8601 dates: YYYY-MM-DD."),
            Self::DepartmentNotFound => None,
            Self::CycleDetected => {
                Some("Pick a parent outside the department's own subtree.")
            }
            Self::SnapshotParseError => {
                Some("Check the snapshot JSON: {\"departments\": [...], \"attributes\": [...]}.")
            }
            Self::SnapshotNotFound => {
                Some("Pass --snapshot, set ORGH_SNAPSHOT, or add `snapshot` to .orgh.toml.")
            }
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
