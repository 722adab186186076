//! Template-backed component mounting.

use crate::component::ViewResult;
use crate::dom::{Document, DomResult, InsertPosition, NodeId};

/// Lifecycle hooks every view implements.
pub trait Component {
    /// Wires event listeners and store subscriptions.
    fn configure(&self) -> ViewResult<()>;
    /// Fills static content into the mounted element.
    fn render_content(&self) -> ViewResult<()>;
}

/// Runs the post-mount sequence and hands the component back.
pub fn finish_mount<C: Component>(component: C) -> ViewResult<C> {
    component.configure()?;
    component.render_content()?;
    Ok(component)
}

/// Element created from a template and attached to a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentHost {
    pub host: NodeId,
    pub element: NodeId,
}

impl ComponentHost {
    /// Clones `template_id`, optionally assigns `new_element_id`, and attaches
    /// it to the element with id `host_id`.
    pub fn mount(
        doc: &mut Document,
        template_id: &str,
        host_id: &str,
        position: InsertPosition,
        new_element_id: Option<&str>,
    ) -> DomResult<Self> {
        let host = doc.require_element(host_id)?;
        let element = doc.import_template(template_id)?;
        if let Some(id) = new_element_id {
            doc.set_id(element, id)?;
        }
        doc.insert_adjacent(host, element, position)?;
        Ok(Self { host, element })
    }
}

#[cfg(test)]
mod tests {
    use super::ComponentHost;
    use crate::dom::{Document, DomError, InsertPosition, TemplateNode};

    #[test]
    fn mount_assigns_id_and_attaches() {
        let mut doc = Document::new();
        doc.register_template("box", vec![TemplateNode::new("section")]);
        let host = doc.append_host("div", "app").expect("host");

        let mounted = ComponentHost::mount(
            &mut doc,
            "box",
            "app",
            InsertPosition::BeforeEnd,
            Some("boxed"),
        )
        .expect("mount");
        assert_eq!(mounted.host, host);
        assert_eq!(doc.element_by_id("boxed"), Some(mounted.element));
    }

    #[test]
    fn mount_requires_existing_host() {
        let mut doc = Document::new();
        doc.register_template("box", vec![TemplateNode::new("section")]);

        let err = ComponentHost::mount(&mut doc, "box", "app", InsertPosition::BeforeEnd, None)
            .expect_err("missing host");
        assert_eq!(err, DomError::ElementNotFound("app".to_string()));
    }
}
