//! Project tracker domain model.
//!
//! # Responsibility
//! - Define the record shape shared by the store and every view.
//!
//! # Invariants
//! - Every record is identified by a stable `ProjectId`.
//! - Views only ever hold cloned snapshots of records.

pub mod project;
