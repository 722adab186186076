//! Markup for the tracker page: one host element and three templates.

use super::{Document, DomResult, TemplateNode};

pub const APP_HOST_ID: &str = "app";
pub const PROJECT_INPUT_TEMPLATE_ID: &str = "project-input";
pub const PROJECT_LIST_TEMPLATE_ID: &str = "project-list";
pub const PROJECT_ITEM_TEMPLATE_ID: &str = "single-project";

/// Builds a document containing the `#app` host and all tracker templates.
pub fn tracker_document() -> DomResult<Document> {
    let mut doc = Document::new();
    doc.register_template(PROJECT_INPUT_TEMPLATE_ID, vec![project_input_form()]);
    doc.register_template(PROJECT_LIST_TEMPLATE_ID, vec![project_list_section()]);
    doc.register_template(PROJECT_ITEM_TEMPLATE_ID, vec![project_item()]);
    doc.append_host("div", APP_HOST_ID)?;
    Ok(doc)
}

fn form_control(label: &str, control_tag: &str, control_id: &str) -> TemplateNode {
    TemplateNode::new("div")
        .class("form-control")
        .child(TemplateNode::new("label").text(label))
        .child(TemplateNode::new(control_tag).id(control_id))
}

fn project_input_form() -> TemplateNode {
    TemplateNode::new("form")
        .child(form_control("Title", "input", "title"))
        .child(form_control("Description", "textarea", "description"))
        .child(form_control("People", "input", "people"))
        .child(TemplateNode::new("button").text("ADD PROJECT"))
}

fn project_list_section() -> TemplateNode {
    TemplateNode::new("section")
        .class("projects")
        .child(TemplateNode::new("header").child(TemplateNode::new("h2")))
        .child(TemplateNode::new("ul"))
}

fn project_item() -> TemplateNode {
    TemplateNode::new("li")
        .child(TemplateNode::new("h2"))
        .child(TemplateNode::new("h3"))
        .child(TemplateNode::new("p"))
}

#[cfg(test)]
mod tests {
    use super::{tracker_document, APP_HOST_ID, PROJECT_ITEM_TEMPLATE_ID};

    #[test]
    fn tracker_document_has_host_and_templates() {
        let mut doc = tracker_document().expect("document");
        assert!(doc.element_by_id(APP_HOST_ID).is_some());

        let item = doc
            .import_template(PROJECT_ITEM_TEMPLATE_ID)
            .expect("item template");
        for tag in ["h2", "h3", "p"] {
            doc.query_tag(item, tag).expect("item child");
        }
    }
}
