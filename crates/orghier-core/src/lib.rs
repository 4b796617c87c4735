//! orghier-core library.
//!
//! Pure, snapshot-in/value-out logic for time-versioned organization
//! hierarchies: which parent assignment is active at a date, how the active
//! assignments form a forest, and whether a proposed reorganization would
//! make a department its own ancestor.
//!
//! # Conventions
//!
//! - **Errors**: typed [`error::HierarchyError`] in the library; callers at
//!   the binary boundary may wrap in `anyhow`.
//! - **Logging**: `tracing` macros (`debug!`, `warn!`); no output layer here.
//! - **State**: none. Every function takes the record snapshot it operates
//!   on; nothing is cached across calls.

pub mod error;
pub mod hierarchy;
pub mod model;

pub use error::{ErrorCode, HierarchyError};
pub use hierarchy::forest::{Forest, HierarchyNode, NodeId};
pub use hierarchy::moves::{descendants, validate_move, would_create_cycle};
pub use hierarchy::resolve::active_at;
pub use model::attribute::OrgAttribute;
pub use model::department::{Department, DepartmentDirectory};
