//! New-project form.
//!
//! # Responsibility
//! - Hold the raw title/description/people field values.
//! - Validate all three on submit and hand valid input to the store.
//!
//! # Invariants
//! - A rejected submit mutates nothing and leaves the fields as typed.
//! - An accepted submit adds exactly one project, then clears every field.

use crate::component::alert::{AlertSink, INVALID_INPUT_MESSAGE};
use crate::component::base::{finish_mount, Component, ComponentHost};
use crate::component::{SharedDocument, ViewResult};
use crate::dom::templates::{APP_HOST_ID, PROJECT_INPUT_TEMPLATE_ID};
use crate::dom::{InsertPosition, NodeId};
use crate::model::project::ProjectId;
use crate::state::project_store::ProjectStore;
use crate::validation::{coerce_number, validate, Validatable};
use log::{debug, info};
use std::rc::Rc;

pub const FORM_ELEMENT_ID: &str = "user-input";
pub const DESCRIPTION_MIN_LENGTH: usize = 5;
pub const PEOPLE_MIN: f64 = 1.0;
pub const PEOPLE_MAX: f64 = 5.0;

/// Form fields, addressed by their element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Title,
    Description,
    People,
}

impl InputField {
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Result of one submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was valid; the new project id.
    Created(ProjectId),
    /// Input failed validation; the user was alerted.
    Rejected,
}

/// Validated form values.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInputValues {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Checks raw field text and converts it into project input.
///
/// Returns `None` when any field fails; every field is still checked.
pub fn gather_project_input(
    title: &str,
    description: &str,
    people: &str,
) -> Option<ProjectInputValues> {
    let people_number = coerce_number(people);
    let checks = [
        Validatable::new(title).required(),
        Validatable::new(description)
            .required()
            .min_length(DESCRIPTION_MIN_LENGTH),
        Validatable::new(people_number)
            .required()
            .min(PEOPLE_MIN)
            .max(PEOPLE_MAX),
    ];
    let all_valid = checks.iter().fold(true, |valid, check| valid & validate(check));
    // Team size is stored as a whole count.
    if !all_valid || people_number.fract() != 0.0 {
        return None;
    }

    Some(ProjectInputValues {
        title: title.to_string(),
        description: description.to_string(),
        people: people_number as u32,
    })
}

/// The form view.
pub struct ProjectInput {
    doc: SharedDocument,
    store: Rc<ProjectStore>,
    alerts: Rc<dyn AlertSink>,
    mounted: ComponentHost,
    title_input: NodeId,
    description_input: NodeId,
    people_input: NodeId,
}

impl ProjectInput {
    /// Mounts the form at the start of `#app`.
    pub fn mount(
        doc: &SharedDocument,
        store: &Rc<ProjectStore>,
        alerts: Rc<dyn AlertSink>,
    ) -> ViewResult<Self> {
        let (mounted, title_input, description_input, people_input) = {
            let mut doc = doc.borrow_mut();
            let mounted = ComponentHost::mount(
                &mut doc,
                PROJECT_INPUT_TEMPLATE_ID,
                APP_HOST_ID,
                InsertPosition::AfterBegin,
                Some(FORM_ELEMENT_ID),
            )?;
            let form = mounted.element;
            (
                mounted,
                doc.query_id(form, InputField::Title.element_id())?,
                doc.query_id(form, InputField::Description.element_id())?,
                doc.query_id(form, InputField::People.element_id())?,
            )
        };
        finish_mount(Self {
            doc: doc.clone(),
            store: Rc::clone(store),
            alerts,
            mounted,
            title_input,
            description_input,
            people_input,
        })
    }

    pub fn element(&self) -> NodeId {
        self.mounted.element
    }

    /// Replaces one field's raw text, as typing would.
    pub fn set_field(&self, field: InputField, value: &str) -> ViewResult<()> {
        let node = self.field_node(field);
        self.doc.borrow_mut().set_value(node, value)?;
        Ok(())
    }

    pub fn field(&self, field: InputField) -> ViewResult<String> {
        let node = self.field_node(field);
        Ok(self.doc.borrow().value(node)?.to_string())
    }

    /// Handles a form submit.
    pub fn submit(&self) -> ViewResult<SubmitOutcome> {
        let gathered = gather_project_input(
            &self.field(InputField::Title)?,
            &self.field(InputField::Description)?,
            &self.field(InputField::People)?,
        );
        let Some(values) = gathered else {
            debug!("event=submit_rejected module=view reason=validation");
            self.alerts.alert(INVALID_INPUT_MESSAGE);
            return Ok(SubmitOutcome::Rejected);
        };

        let id = self
            .store
            .add_project(values.title, values.description, values.people)?;
        self.clear_inputs()?;
        info!("event=submit_accepted module=view status=ok id={id}");
        Ok(SubmitOutcome::Created(id))
    }

    fn clear_inputs(&self) -> ViewResult<()> {
        let mut doc = self.doc.borrow_mut();
        for node in [self.title_input, self.description_input, self.people_input] {
            doc.set_value(node, "")?;
        }
        Ok(())
    }

    fn field_node(&self, field: InputField) -> NodeId {
        match field {
            InputField::Title => self.title_input,
            InputField::Description => self.description_input,
            InputField::People => self.people_input,
        }
    }
}

impl Component for ProjectInput {
    fn configure(&self) -> ViewResult<()> {
        self.doc
            .borrow_mut()
            .add_event_listener(self.mounted.element, "submit")?;
        Ok(())
    }

    fn render_content(&self) -> ViewResult<()> {
        Ok(())
    }
}
