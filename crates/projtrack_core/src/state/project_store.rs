//! Authoritative project store.
//!
//! # Responsibility
//! - Hold project records in creation order.
//! - Apply add/move mutations and notify listeners with a full snapshot.
//!
//! # Invariants
//! - Records are never reordered or removed.
//! - Ids are unique for the life of the store.
//! - A move to an unknown id or to the current status mutates nothing and
//!   notifies nobody.
//! - The record borrow is released before listeners run.

use crate::model::project::{ProjectId, ProjectRecord, ProjectStatus};
use crate::state::listeners::{Listener, ListenerRegistry, ListenerResult, NotifyError};
use log::{debug, info};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store mutation errors.
///
/// The only failure source is a listener; the mutation itself has already
/// been applied when this is returned.
#[derive(Debug)]
pub enum StoreError {
    ListenerFailed(NotifyError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListenerFailed(err) => write!(f, "project listener failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ListenerFailed(err) => Some(err),
        }
    }
}

impl From<NotifyError> for StoreError {
    fn from(value: NotifyError) -> Self {
        Self::ListenerFailed(value)
    }
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Status changed and listeners were notified.
    Moved,
    /// Record already had the requested status.
    Unchanged,
    /// No record with that id.
    NotFound,
}

/// Single source of truth for project records.
///
/// Constructed once by the composition root and shared with views through
/// `Rc<ProjectStore>`.
#[derive(Default)]
pub struct ProjectStore {
    projects: RefCell<Vec<ProjectRecord>>,
    listeners: ListenerRegistry<ProjectRecord>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for the shared handle views expect.
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Adds an active project and notifies listeners.
    ///
    /// Input is trusted; validation happens in the input view.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> StoreResult<ProjectId> {
        let record = ProjectRecord::new(title, description, people);
        let id = record.id;
        self.projects.borrow_mut().push(record);
        info!(
            "event=project_added module=store status=ok id={} people={} total={}",
            id,
            people,
            self.len()
        );

        self.notify()?;
        Ok(id)
    }

    /// Moves one project to `new_status`.
    ///
    /// Unknown ids and same-status moves are silent no-ops so stale or
    /// repeated drop events are harmless.
    pub fn move_project(&self, id: ProjectId, new_status: ProjectStatus) -> StoreResult<MoveOutcome> {
        let previous = {
            let mut projects = self.projects.borrow_mut();
            let Some(project) = projects.iter_mut().find(|project| project.id == id) else {
                debug!("event=project_move_skipped module=store reason=not_found id={id}");
                return Ok(MoveOutcome::NotFound);
            };
            if project.status == new_status {
                debug!(
                    "event=project_move_skipped module=store reason=unchanged id={id} status={new_status}"
                );
                return Ok(MoveOutcome::Unchanged);
            }
            std::mem::replace(&mut project.status, new_status)
        };
        info!(
            "event=project_moved module=store status=ok id={id} from={previous} to={new_status}"
        );

        self.notify()?;
        Ok(MoveOutcome::Moved)
    }

    /// Registers a snapshot listener. There is no way to remove it.
    pub fn add_listener(&self, listener: impl Fn(&[ProjectRecord]) -> ListenerResult + 'static) {
        let listener: Listener<ProjectRecord> = Rc::new(listener);
        self.listeners.add(listener);
    }

    /// Copy of all records in creation order.
    pub fn snapshot(&self) -> Vec<ProjectRecord> {
        self.projects.borrow().clone()
    }

    /// Copy of one record.
    pub fn get(&self, id: ProjectId) -> Option<ProjectRecord> {
        self.projects
            .borrow()
            .iter()
            .find(|project| project.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&self) -> Result<(), NotifyError> {
        let snapshot = self.snapshot();
        self.listeners.notify(&snapshot)
    }
}
