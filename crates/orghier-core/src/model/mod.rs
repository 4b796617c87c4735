//! Data model: versioned parent-assignment records and the department
//! directory they reference.

pub mod attribute;
pub mod department;
