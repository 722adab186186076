//! Core logic for the project tracker.
//! The store in this crate is the single source of truth for project state;
//! views only render snapshots of it.

pub mod app;
pub mod component;
pub mod config;
pub mod dom;
pub mod drag;
pub mod logging;
pub mod model;
pub mod state;
pub mod validation;

pub use app::{App, AppError, AppResult, DropOutcome};
pub use component::alert::{AlertSink, RecordedAlerts, INVALID_INPUT_MESSAGE};
pub use component::base::{Component, ComponentHost};
pub use component::project_input::{InputField, ProjectInput, SubmitOutcome};
pub use component::project_item::ProjectItem;
pub use component::project_list::{ProjectList, DROPPABLE_CLASS};
pub use component::{SharedDocument, ViewError, ViewResult};
pub use config::TrackerConfig;
pub use dom::{Document, DomError, InsertPosition, NodeId};
pub use drag::{DataTransfer, DragEvent, DragTarget, Draggable, DropEffect, PLAIN_TEXT_MEDIA_TYPE};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status, LoggingError};
pub use model::project::{
    parse_project_status, people_label, ProjectId, ProjectRecord, ProjectStatus,
};
pub use state::listeners::{ListenerResult, NotifyError};
pub use state::project_store::{MoveOutcome, ProjectStore, StoreError, StoreResult};
pub use validation::{validate, FieldValue, Validatable};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
