//! Status-filtered project list; the drop target.
//!
//! # Invariants
//! - The rendered rows always match the last snapshot filtered by status,
//!   in snapshot order.
//! - Rendering is a full clear-and-rebuild of the list element.
//! - A drop never renders directly; the store notification does.

use crate::component::base::{finish_mount, Component, ComponentHost};
use crate::component::project_item::ProjectItem;
use crate::component::{SharedDocument, ViewResult};
use crate::dom::templates::{APP_HOST_ID, PROJECT_LIST_TEMPLATE_ID};
use crate::dom::{InsertPosition, NodeId};
use crate::drag::{DragEvent, DragTarget, PLAIN_TEXT_MEDIA_TYPE};
use crate::model::project::{ProjectId, ProjectRecord, ProjectStatus};
use crate::state::project_store::ProjectStore;
use log::debug;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use uuid::Uuid;

/// Class marking the list as a visual drop candidate.
pub const DROPPABLE_CLASS: &str = "droppable";

struct ListState {
    doc: SharedDocument,
    store: Rc<ProjectStore>,
    status: ProjectStatus,
    mounted: ComponentHost,
    assigned: RefCell<Vec<ProjectRecord>>,
    items: RefCell<Vec<ProjectItem>>,
}

/// One of the two project lists.
#[derive(Clone)]
pub struct ProjectList {
    state: Rc<ListState>,
}

impl ProjectList {
    /// Mounts the list for `status` at the end of `#app` and subscribes it
    /// to `store`.
    pub fn mount(
        doc: &SharedDocument,
        store: &Rc<ProjectStore>,
        status: ProjectStatus,
    ) -> ViewResult<Self> {
        let element_id = format!("{status}-projects");
        let mounted = ComponentHost::mount(
            &mut doc.borrow_mut(),
            PROJECT_LIST_TEMPLATE_ID,
            APP_HOST_ID,
            InsertPosition::BeforeEnd,
            Some(element_id.as_str()),
        )?;
        finish_mount(Self {
            state: Rc::new(ListState {
                doc: doc.clone(),
                store: Rc::clone(store),
                status,
                mounted,
                assigned: RefCell::new(Vec::new()),
                items: RefCell::new(Vec::new()),
            }),
        })
    }

    pub fn element(&self) -> NodeId {
        self.state.mounted.element
    }

    /// Records shown by this list, as of the last notification.
    pub fn assigned_projects(&self) -> Vec<ProjectRecord> {
        self.state.assigned.borrow().clone()
    }

    pub fn item_count(&self) -> usize {
        self.state.items.borrow().len()
    }

    /// Rendered row for `id`, if this list currently shows it.
    pub fn item(&self, id: ProjectId) -> Option<ProjectItem> {
        self.state
            .items
            .borrow()
            .iter()
            .find(|item| item.project().id == id)
            .cloned()
    }

    /// Whether the list is currently marked as a drop candidate.
    pub fn is_drop_candidate(&self) -> ViewResult<bool> {
        let doc = self.state.doc.borrow();
        let list = doc.query_tag(self.state.mounted.element, "ul")?;
        Ok(doc.has_class(list, DROPPABLE_CLASS)?)
    }

    fn set_drop_candidate(&self, candidate: bool) -> ViewResult<()> {
        let mut doc = self.state.doc.borrow_mut();
        let list = doc.query_tag(self.state.mounted.element, "ul")?;
        if candidate {
            doc.add_class(list, DROPPABLE_CLASS)?;
        } else {
            doc.remove_class(list, DROPPABLE_CLASS)?;
        }
        Ok(())
    }
}

impl ListState {
    fn assign(&self, snapshot: &[ProjectRecord]) -> ViewResult<()> {
        let relevant = snapshot
            .iter()
            .filter(|project| project.status == self.status)
            .cloned()
            .collect::<Vec<_>>();
        *self.assigned.borrow_mut() = relevant;
        self.render_projects()
    }

    fn render_projects(&self) -> ViewResult<()> {
        let list_id = list_element_id(self.status);
        {
            let mut doc = self.doc.borrow_mut();
            let list = doc.require_element(&list_id)?;
            doc.clear_children(list)?;
        }
        self.items.borrow_mut().clear();

        let assigned = self.assigned.borrow().clone();
        let mut items = Vec::with_capacity(assigned.len());
        for project in assigned {
            items.push(ProjectItem::mount(&self.doc, &list_id, project)?);
        }
        debug!(
            "event=list_rendered module=view status={} items={}",
            self.status,
            items.len()
        );
        *self.items.borrow_mut() = items;
        Ok(())
    }
}

impl Component for ProjectList {
    fn configure(&self) -> ViewResult<()> {
        {
            let mut doc = self.state.doc.borrow_mut();
            let element = self.state.mounted.element;
            doc.add_event_listener(element, "dragover")?;
            doc.add_event_listener(element, "dragleave")?;
            doc.add_event_listener(element, "drop")?;
        }

        let weak: Weak<ListState> = Rc::downgrade(&self.state);
        self.state.store.add_listener(move |projects| {
            let Some(state) = weak.upgrade() else {
                return Ok(());
            };
            state.assign(projects).map_err(Into::into)
        });
        Ok(())
    }

    fn render_content(&self) -> ViewResult<()> {
        let mut doc = self.state.doc.borrow_mut();
        let element = self.state.mounted.element;
        let list = doc.query_tag(element, "ul")?;
        doc.set_id(list, list_element_id(self.state.status))?;
        let heading = doc.query_tag(element, "h2")?;
        doc.set_text(
            heading,
            format!("{} PROJECTS", self.state.status.as_str().to_uppercase()),
        )?;
        Ok(())
    }
}

impl DragTarget for ProjectList {
    fn on_drag_over(&self, event: &mut DragEvent) -> ViewResult<()> {
        let accepts = event
            .data_transfer()
            .and_then(|transfer| transfer.types().first().copied())
            == Some(PLAIN_TEXT_MEDIA_TYPE);
        if accepts {
            event.prevent_default();
            self.set_drop_candidate(true)?;
        }
        Ok(())
    }

    fn on_drop(&self, event: &mut DragEvent) -> ViewResult<()> {
        let payload = event
            .data_transfer()
            .and_then(|transfer| transfer.get_data(PLAIN_TEXT_MEDIA_TYPE))
            .unwrap_or_default()
            .to_string();
        let moved = match Uuid::parse_str(payload.trim()) {
            Ok(id) => self.state.store.move_project(id, self.state.status).map(|_| ()),
            Err(_) => {
                debug!(
                    "event=drop_ignored module=view reason=invalid_id target={}",
                    self.state.status
                );
                Ok(())
            }
        };
        // The marker is cleared even when a listener failed; the error still propagates.
        self.set_drop_candidate(false)?;
        Ok(moved?)
    }

    fn on_drag_leave(&self, _event: &DragEvent) -> ViewResult<()> {
        self.set_drop_candidate(false)
    }
}

fn list_element_id(status: ProjectStatus) -> String {
    format!("{status}-projects-list")
}

#[cfg(test)]
mod tests {
    use super::{ProjectList, DROPPABLE_CLASS};
    use crate::component::{SharedDocument, ViewError};
    use crate::dom::templates::tracker_document;
    use crate::drag::{DataTransfer, DragEvent, DragTarget, PLAIN_TEXT_MEDIA_TYPE};
    use crate::model::project::ProjectStatus;
    use crate::state::project_store::ProjectStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() -> (SharedDocument, Rc<ProjectStore>) {
        let doc = Rc::new(RefCell::new(tracker_document().expect("document")));
        (doc, ProjectStore::shared())
    }

    fn plain_text_event(value: &str) -> DragEvent {
        let mut transfer = DataTransfer::new();
        transfer.set_data(PLAIN_TEXT_MEDIA_TYPE, value);
        DragEvent::new(transfer)
    }

    #[test]
    fn render_content_sets_ids_and_heading() {
        let (doc, store) = setup();
        let list = ProjectList::mount(&doc, &store, ProjectStatus::Finished).expect("mount");

        let doc = doc.borrow();
        assert_eq!(doc.element_by_id("finished-projects"), Some(list.element()));
        let ul = doc.require_element("finished-projects-list").expect("ul");
        assert_eq!(doc.tag(ul).expect("tag"), "ul");
        let heading = doc.query_tag(list.element(), "h2").expect("h2");
        assert_eq!(doc.text(heading).expect("text"), "FINISHED PROJECTS");
    }

    #[test]
    fn notification_rebuilds_filtered_rows() {
        let (doc, store) = setup();
        let active = ProjectList::mount(&doc, &store, ProjectStatus::Active).expect("mount");

        let first = store.add_project("First", "first project", 1).expect("add");
        let second = store.add_project("Second", "second project", 2).expect("add");
        assert_eq!(active.item_count(), 2);
        let ids = active
            .assigned_projects()
            .iter()
            .map(|project| project.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![first, second]);

        store
            .move_project(first, ProjectStatus::Finished)
            .expect("move");
        assert_eq!(active.item_count(), 1);
        assert!(active.item(first).is_none());

        let doc = doc.borrow();
        let ul = doc.require_element("active-projects-list").expect("ul");
        assert_eq!(doc.children(ul).expect("children").len(), 1);
    }

    #[test]
    fn drag_over_accepts_only_plain_text_first() {
        let (doc, store) = setup();
        let list = ProjectList::mount(&doc, &store, ProjectStatus::Active).expect("mount");

        let mut foreign = DragEvent::new({
            let mut transfer = DataTransfer::new();
            transfer.set_data("text/uri-list", "https://example.invalid");
            transfer.set_data(PLAIN_TEXT_MEDIA_TYPE, "x");
            transfer
        });
        list.on_drag_over(&mut foreign).expect("drag over");
        assert!(!foreign.default_prevented());
        assert!(!list.is_drop_candidate().expect("class"));

        let mut empty = DragEvent::without_data();
        list.on_drag_over(&mut empty).expect("drag over");
        assert!(!empty.default_prevented());

        let mut accepted = plain_text_event("x");
        list.on_drag_over(&mut accepted).expect("drag over");
        assert!(accepted.default_prevented());
        assert!(list.is_drop_candidate().expect("class"));

        list.on_drag_leave(&accepted).expect("drag leave");
        assert!(!list.is_drop_candidate().expect("class"));
    }

    #[test]
    fn drop_moves_project_and_clears_marker() {
        let (doc, store) = setup();
        let finished = ProjectList::mount(&doc, &store, ProjectStatus::Finished).expect("mount");
        let id = store.add_project("Ship", "ship the release", 4).expect("add");

        let mut over = plain_text_event(&id.to_string());
        finished.on_drag_over(&mut over).expect("drag over");
        let mut drop_event = plain_text_event(&id.to_string());
        finished.on_drop(&mut drop_event).expect("drop");

        assert_eq!(store.get(id).expect("record").status, ProjectStatus::Finished);
        assert_eq!(finished.item_count(), 1);
        assert!(!finished.is_drop_candidate().expect("class"));
        let doc = doc.borrow();
        let ul = doc.require_element("finished-projects-list").expect("ul");
        assert!(!doc.has_class(ul, DROPPABLE_CLASS).expect("class"));
    }

    #[test]
    fn failed_drop_still_clears_marker() {
        let (doc, store) = setup();
        let finished = ProjectList::mount(&doc, &store, ProjectStatus::Finished).expect("mount");
        let id = store.add_project("Ship", "ship the release", 4).expect("add");
        store.add_listener(|_| Err("broken view".into()));

        finished
            .on_drag_over(&mut plain_text_event(&id.to_string()))
            .expect("drag over");
        assert!(finished.is_drop_candidate().expect("class"));

        let err = finished
            .on_drop(&mut plain_text_event(&id.to_string()))
            .expect_err("listener failure propagates");
        assert!(matches!(err, ViewError::Store(_)));
        assert!(!finished.is_drop_candidate().expect("class"));
        assert_eq!(store.get(id).expect("record").status, ProjectStatus::Finished);
    }

    #[test]
    fn drop_with_garbage_payload_is_ignored() {
        let (doc, store) = setup();
        let active = ProjectList::mount(&doc, &store, ProjectStatus::Active).expect("mount");
        store.add_project("Keep", "stays active", 2).expect("add");
        let before = store.snapshot();

        active
            .on_drop(&mut plain_text_event("not-a-project-id"))
            .expect("drop");
        active
            .on_drop(&mut DragEvent::without_data())
            .expect("drop");
        assert_eq!(store.snapshot(), before);
    }
}
