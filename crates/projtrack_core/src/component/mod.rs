//! Views over the project store.
//!
//! # Responsibility
//! - Mount template-backed views into the shared document.
//! - Translate submit and drag gestures into store mutations.
//! - Re-render list views from store snapshots.
//!
//! # Invariants
//! - Views never hold a record past one render cycle; they keep snapshots.
//! - Every view is mounted, then configured, then rendered, in that order.

pub mod alert;
pub mod base;
pub mod project_input;
pub mod project_item;
pub mod project_list;

use crate::dom::{DomError, Document};
use crate::model::project::ProjectId;
use crate::state::project_store::StoreError;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Document handle shared by every view and store listener.
pub type SharedDocument = Rc<RefCell<Document>>;

pub type ViewResult<T> = Result<T, ViewError>;

/// View-level failures.
#[derive(Debug)]
pub enum ViewError {
    /// Template, host or child element missing.
    Dom(DomError),
    /// Store mutation reported a listener failure.
    Store(StoreError),
    /// A drag-start event arrived without a transfer channel.
    MissingDataTransfer(ProjectId),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dom(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::MissingDataTransfer(id) => {
                write!(f, "drag start for project {id} has no data transfer")
            }
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Dom(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::MissingDataTransfer(_) => None,
        }
    }
}

impl From<DomError> for ViewError {
    fn from(value: DomError) -> Self {
        Self::Dom(value)
    }
}

impl From<StoreError> for ViewError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
