//! Hierarchy operations over attribute-record snapshots.
//!
//! ## Submodules
//!
//! - [`resolve`] — which record is active for each department at a date.
//! - [`forest`] — assembly of active records into an arena-backed forest.
//! - [`moves`] — descendant computation and reorganization cycle checks.

pub mod forest;
pub mod moves;
pub mod resolve;
