//! Single project row; the drag source.

use crate::component::base::{finish_mount, Component, ComponentHost};
use crate::component::{SharedDocument, ViewError, ViewResult};
use crate::dom::templates::PROJECT_ITEM_TEMPLATE_ID;
use crate::dom::{InsertPosition, NodeId};
use crate::drag::{DragEvent, Draggable, DropEffect, PLAIN_TEXT_MEDIA_TYPE};
use crate::model::project::ProjectRecord;
use log::debug;

/// Rendered row for one project snapshot.
///
/// The snapshot is not live: the row is stale after a store mutation until
/// the owning list rebuilds it.
#[derive(Clone)]
pub struct ProjectItem {
    doc: SharedDocument,
    mounted: ComponentHost,
    project: ProjectRecord,
}

impl ProjectItem {
    /// Mounts a row at the end of the element with id `host_id`.
    pub fn mount(doc: &SharedDocument, host_id: &str, project: ProjectRecord) -> ViewResult<Self> {
        let element_id = project.id.to_string();
        let mounted = ComponentHost::mount(
            &mut doc.borrow_mut(),
            PROJECT_ITEM_TEMPLATE_ID,
            host_id,
            InsertPosition::BeforeEnd,
            Some(element_id.as_str()),
        )?;
        finish_mount(Self {
            doc: doc.clone(),
            mounted,
            project,
        })
    }

    pub fn project(&self) -> &ProjectRecord {
        &self.project
    }

    pub fn element(&self) -> NodeId {
        self.mounted.element
    }
}

impl Component for ProjectItem {
    fn configure(&self) -> ViewResult<()> {
        let mut doc = self.doc.borrow_mut();
        doc.add_event_listener(self.mounted.element, "dragstart")?;
        doc.add_event_listener(self.mounted.element, "dragend")?;
        Ok(())
    }

    fn render_content(&self) -> ViewResult<()> {
        let mut doc = self.doc.borrow_mut();
        let element = self.mounted.element;
        let title = doc.query_tag(element, "h2")?;
        doc.set_text(title, self.project.title.as_str())?;
        let people = doc.query_tag(element, "h3")?;
        doc.set_text(people, self.project.people_label())?;
        let description = doc.query_tag(element, "p")?;
        doc.set_text(description, self.project.description.as_str())?;
        Ok(())
    }
}

impl Draggable for ProjectItem {
    fn on_drag_start(&self, event: &mut DragEvent) -> ViewResult<()> {
        let transfer = event
            .data_transfer_mut()
            .ok_or(ViewError::MissingDataTransfer(self.project.id))?;
        transfer.set_data(PLAIN_TEXT_MEDIA_TYPE, self.project.id.to_string());
        transfer.effect_allowed = DropEffect::Move;
        debug!(
            "event=drag_start module=view status=ok id={}",
            self.project.id
        );
        Ok(())
    }

    fn on_drag_end(&self, _event: &DragEvent) -> ViewResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectItem;
    use crate::component::{SharedDocument, ViewError};
    use crate::dom::templates::tracker_document;
    use crate::drag::{DataTransfer, DragEvent, Draggable, DropEffect, PLAIN_TEXT_MEDIA_TYPE};
    use crate::model::project::ProjectRecord;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn shared_doc() -> SharedDocument {
        Rc::new(RefCell::new(tracker_document().expect("document")))
    }

    #[test]
    fn renders_title_people_and_description() {
        let doc = shared_doc();
        let record = ProjectRecord::new("Solo", "One person job", 1);
        let item = ProjectItem::mount(&doc, "app", record.clone()).expect("mount");

        let doc = doc.borrow();
        assert_eq!(doc.element_by_id(&record.id.to_string()), Some(item.element()));
        let people = doc.query_tag(item.element(), "h3").expect("h3");
        assert_eq!(doc.text(people).expect("text"), "1 person assigned");
        let title = doc.query_tag(item.element(), "h2").expect("h2");
        assert_eq!(doc.text(title).expect("text"), "Solo");
        assert!(doc
            .has_event_listener(item.element(), "dragstart")
            .expect("listener"));
    }

    #[test]
    fn drag_start_sets_plain_text_payload_and_move_effect() {
        let doc = shared_doc();
        let record = ProjectRecord::new("Build API", "Design the REST API", 3);
        let item = ProjectItem::mount(&doc, "app", record.clone()).expect("mount");

        let mut event = DragEvent::new(DataTransfer::new());
        item.on_drag_start(&mut event).expect("drag start");
        let transfer = event.data_transfer().expect("transfer");
        assert_eq!(
            transfer.get_data(PLAIN_TEXT_MEDIA_TYPE),
            Some(record.id.to_string().as_str())
        );
        assert_eq!(transfer.effect_allowed, DropEffect::Move);
    }

    #[test]
    fn drag_start_without_transfer_is_an_error() {
        let doc = shared_doc();
        let item = ProjectItem::mount(&doc, "app", ProjectRecord::new("t", "desc!", 2))
            .expect("mount");

        let err = item
            .on_drag_start(&mut DragEvent::without_data())
            .expect_err("no transfer");
        assert!(matches!(err, ViewError::MissingDataTransfer(_)));
    }
}
