//! Composition root for the tracker page.
//!
//! # Responsibility
//! - Create the one store and the document, then mount the form and both
//!   lists against them.
//! - Route simulated submit and drag gestures to the views wired for them.
//!
//! # Invariants
//! - Exactly one `ProjectStore` exists per `App`; every view shares it.
//! - Mount order is form, active list, finished list.

use crate::component::alert::AlertSink;
use crate::component::project_input::{InputField, ProjectInput, SubmitOutcome};
use crate::component::project_list::ProjectList;
use crate::component::{SharedDocument, ViewError};
use crate::dom::templates::tracker_document;
use crate::dom::{DomError, NodeId};
use crate::drag::{DataTransfer, DragEvent, DragTarget, Draggable};
use crate::model::project::{ProjectId, ProjectRecord, ProjectStatus};
use crate::state::project_store::ProjectStore;
use log::info;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by the composition root.
#[derive(Debug)]
pub enum AppError {
    View(ViewError),
    /// The dragged project is not rendered in any list.
    ItemNotRendered(ProjectId),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::View(err) => write!(f, "{err}"),
            Self::ItemNotRendered(id) => write!(f, "project is not rendered: {id}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::View(err) => Some(err),
            Self::ItemNotRendered(_) => None,
        }
    }
}

impl From<ViewError> for AppError {
    fn from(value: ViewError) -> Self {
        Self::View(value)
    }
}

impl From<DomError> for AppError {
    fn from(value: DomError) -> Self {
        Self::View(ViewError::Dom(value))
    }
}

/// How a drop gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The target accepted the payload and handled the drop.
    Dropped,
    /// The target did not accept the payload; only drag-leave fired.
    Rejected,
}

/// The mounted tracker page.
pub struct App {
    doc: SharedDocument,
    store: Rc<ProjectStore>,
    input: ProjectInput,
    active: ProjectList,
    finished: ProjectList,
}

impl App {
    /// Builds the document and mounts every view.
    pub fn new(alerts: Rc<dyn AlertSink>) -> AppResult<Self> {
        let doc: SharedDocument = Rc::new(RefCell::new(tracker_document()?));
        let store = ProjectStore::shared();

        let input = ProjectInput::mount(&doc, &store, alerts)?;
        let active = ProjectList::mount(&doc, &store, ProjectStatus::Active)?;
        let finished = ProjectList::mount(&doc, &store, ProjectStatus::Finished)?;
        info!(
            "event=app_mounted module=app status=ok listeners={}",
            store.listener_count()
        );

        Ok(Self {
            doc,
            store,
            input,
            active,
            finished,
        })
    }

    pub fn store(&self) -> &Rc<ProjectStore> {
        &self.store
    }

    pub fn document(&self) -> &SharedDocument {
        &self.doc
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    pub fn list(&self, status: ProjectStatus) -> &ProjectList {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    pub fn snapshot(&self) -> Vec<ProjectRecord> {
        self.store.snapshot()
    }

    /// Types the three values into the form and submits it.
    pub fn submit(&self, title: &str, description: &str, people: &str) -> AppResult<SubmitOutcome> {
        self.input.set_field(InputField::Title, title)?;
        self.input.set_field(InputField::Description, description)?;
        self.input.set_field(InputField::People, people)?;
        Ok(self.input.submit()?)
    }

    /// Drags the rendered row for `id` onto the list for `target`.
    pub fn drag_project(&self, id: ProjectId, target: ProjectStatus) -> AppResult<DropOutcome> {
        let item = [&self.active, &self.finished]
            .into_iter()
            .find_map(|list| list.item(id))
            .ok_or(AppError::ItemNotRendered(id))?;

        let mut start = DragEvent::new(DataTransfer::new());
        if self.is_wired(item.element(), "dragstart")? {
            item.on_drag_start(&mut start)?;
        }
        // The drop re-renders the lists and frees the source row's node.
        let end_wired = self.is_wired(item.element(), "dragend")?;
        let transfer = start.into_data_transfer().unwrap_or_default();
        let outcome = self.drop_on(target, transfer.clone())?;
        if end_wired {
            item.on_drag_end(&DragEvent::new(transfer))?;
        }
        Ok(outcome)
    }

    /// Delivers a payload to the list for `target`: drag-over, then drop if
    /// the list accepted it, otherwise drag-leave.
    pub fn drop_on(&self, target: ProjectStatus, transfer: DataTransfer) -> AppResult<DropOutcome> {
        let list = self.list(target);
        let element = list.element();

        let mut over = DragEvent::new(transfer.clone());
        if self.is_wired(element, "dragover")? {
            list.on_drag_over(&mut over)?;
        }
        if !over.default_prevented() {
            if self.is_wired(element, "dragleave")? {
                list.on_drag_leave(&over)?;
            }
            return Ok(DropOutcome::Rejected);
        }

        if self.is_wired(element, "drop")? {
            list.on_drop(&mut DragEvent::new(transfer))?;
        }
        Ok(DropOutcome::Dropped)
    }

    /// Textual outline of the rendered page.
    pub fn render_text(&self) -> String {
        self.doc.borrow().render_text()
    }

    fn is_wired(&self, node: NodeId, event_type: &str) -> AppResult<bool> {
        Ok(self.doc.borrow().has_event_listener(node, event_type)?)
    }
}
