//! In-memory application state and change notification.
//!
//! # Responsibility
//! - Own the single authoritative collection of project records.
//! - Fan every mutation out to subscribed views as a full snapshot.
//!
//! # Invariants
//! - Listeners are invoked synchronously, in registration order.
//! - Listeners receive copies; they cannot reach the store's own collection.

pub mod listeners;
pub mod project_store;
