use super::{DomError, DomResult};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter, Write};

/// Handle to one element in a `Document`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "node({}@{})", self.index, self.generation)
    }
}

/// Where to attach a node relative to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Before the host's first child.
    AfterBegin,
    /// After the host's last child.
    BeforeEnd,
}

/// Declarative element tree used as template content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateNode {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub text: String,
    pub children: Vec<TemplateNode>,
}

impl TemplateNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn child(mut self, child: TemplateNode) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug)]
struct Element {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    text: String,
    value: String,
    event_listeners: BTreeSet<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

/// In-memory element tree with registered templates.
#[derive(Debug)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    templates: BTreeMap<String, Vec<TemplateNode>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document with an empty `body` root.
    pub fn new() -> Self {
        let mut doc = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
            templates: BTreeMap::new(),
        };
        doc.root = doc.alloc(&TemplateNode::new("body"), None);
        doc
    }

    /// Registers template content under `template_id`, replacing any previous one.
    pub fn register_template(&mut self, template_id: impl Into<String>, content: Vec<TemplateNode>) {
        self.templates.insert(template_id.into(), content);
    }

    /// Creates an element with `id` and appends it to the root.
    pub fn append_host(&mut self, tag: &str, id: &str) -> DomResult<NodeId> {
        let node = self.alloc(&TemplateNode::new(tag).id(id), None);
        self.insert_adjacent(self.root, node, InsertPosition::BeforeEnd)?;
        Ok(node)
    }

    /// Finds an attached element by id.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_in(self.root, &|element| element.id.as_deref() == Some(id))
    }

    /// Like `element_by_id`, but a miss is an error.
    pub fn require_element(&self, id: &str) -> DomResult<NodeId> {
        self.element_by_id(id)
            .ok_or_else(|| DomError::ElementNotFound(id.to_string()))
    }

    /// Deep-clones the first element of a template's content as a detached node.
    pub fn import_template(&mut self, template_id: &str) -> DomResult<NodeId> {
        let first = self
            .templates
            .get(template_id)
            .ok_or_else(|| DomError::TemplateNotFound(template_id.to_string()))?
            .first()
            .cloned()
            .ok_or_else(|| DomError::EmptyTemplate(template_id.to_string()))?;
        Ok(self.alloc(&first, None))
    }

    /// Attaches a detached `node` to `host`.
    pub fn insert_adjacent(
        &mut self,
        host: NodeId,
        node: NodeId,
        position: InsertPosition,
    ) -> DomResult<()> {
        self.element(node)?;
        let host_element = self.element_mut(host)?;
        match position {
            InsertPosition::AfterBegin => host_element.children.insert(0, node),
            InsertPosition::BeforeEnd => host_element.children.push(node),
        }
        self.element_mut(node)?.parent = Some(host);
        Ok(())
    }

    /// First descendant of `scope` with tag `tag`, depth-first.
    pub fn query_tag(&self, scope: NodeId, tag: &str) -> DomResult<NodeId> {
        self.element(scope)?;
        self.find_descendant(scope, &|element| element.tag == tag)
            .ok_or_else(|| DomError::SelectorNotFound {
                scope,
                selector: tag.to_string(),
            })
    }

    /// First descendant of `scope` with id `id`, depth-first.
    pub fn query_id(&self, scope: NodeId, id: &str) -> DomResult<NodeId> {
        self.element(scope)?;
        self.find_descendant(scope, &|element| element.id.as_deref() == Some(id))
            .ok_or_else(|| DomError::SelectorNotFound {
                scope,
                selector: format!("#{id}"),
            })
    }

    pub fn set_id(&mut self, node: NodeId, id: impl Into<String>) -> DomResult<()> {
        self.element_mut(node)?.id = Some(id.into());
        Ok(())
    }

    pub fn id(&self, node: NodeId) -> DomResult<Option<&str>> {
        Ok(self.element(node)?.id.as_deref())
    }

    pub fn tag(&self, node: NodeId) -> DomResult<&str> {
        Ok(self.element(node)?.tag.as_str())
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) -> DomResult<()> {
        self.element_mut(node)?.text = text.into();
        Ok(())
    }

    pub fn text(&self, node: NodeId) -> DomResult<&str> {
        Ok(self.element(node)?.text.as_str())
    }

    /// Sets a form control value.
    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) -> DomResult<()> {
        self.element_mut(node)?.value = value.into();
        Ok(())
    }

    pub fn value(&self, node: NodeId) -> DomResult<&str> {
        Ok(self.element(node)?.value.as_str())
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) -> DomResult<()> {
        self.element_mut(node)?.classes.insert(class.to_string());
        Ok(())
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) -> DomResult<()> {
        self.element_mut(node)?.classes.remove(class);
        Ok(())
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> DomResult<bool> {
        Ok(self.element(node)?.classes.contains(class))
    }

    /// Marks `node` as handling `event_type`. Dispatchers only route wired events.
    pub fn add_event_listener(&mut self, node: NodeId, event_type: &str) -> DomResult<()> {
        self.element_mut(node)?
            .event_listeners
            .insert(event_type.to_string());
        Ok(())
    }

    pub fn has_event_listener(&self, node: NodeId, event_type: &str) -> DomResult<bool> {
        Ok(self.element(node)?.event_listeners.contains(event_type))
    }

    pub fn parent(&self, node: NodeId) -> DomResult<Option<NodeId>> {
        Ok(self.element(node)?.parent)
    }

    pub fn children(&self, node: NodeId) -> DomResult<&[NodeId]> {
        Ok(self.element(node)?.children.as_slice())
    }

    /// Removes and frees every descendant of `node`.
    pub fn clear_children(&mut self, node: NodeId) -> DomResult<()> {
        let children = std::mem::take(&mut self.element_mut(node)?.children);
        for child in children {
            self.free_subtree(child);
        }
        Ok(())
    }

    /// Number of live elements, including detached ones.
    pub fn live_nodes(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.element.is_some())
            .count()
    }

    /// Indented outline of the attached tree.
    ///
    /// One line per element: `tag#id.class1.class2 "text" [value]`.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        self.render_node(self.root, 0, &mut out);
        out
    }

    fn render_node(&self, node: NodeId, depth: usize, out: &mut String) {
        let Ok(element) = self.element(node) else {
            return;
        };
        let _ = write!(out, "{}{}", "  ".repeat(depth), element.tag);
        if let Some(id) = &element.id {
            let _ = write!(out, "#{id}");
        }
        for class in &element.classes {
            let _ = write!(out, ".{class}");
        }
        if !element.text.is_empty() {
            let _ = write!(out, " {:?}", element.text);
        }
        if !element.value.is_empty() {
            let _ = write!(out, " [{}]", element.value);
        }
        out.push('\n');
        for child in &element.children {
            self.render_node(*child, depth + 1, out);
        }
    }

    fn alloc(&mut self, template: &TemplateNode, parent: Option<NodeId>) -> NodeId {
        let element = Element {
            tag: template.tag.clone(),
            id: template.id.clone(),
            classes: template.classes.iter().cloned().collect(),
            text: template.text.clone(),
            value: String::new(),
            event_listeners: BTreeSet::new(),
            parent,
            children: Vec::new(),
        };
        let node = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.generation = slot.generation.wrapping_add(1);
                slot.element = Some(element);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    element: Some(element),
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        };

        let children = template
            .children
            .iter()
            .map(|child| self.alloc(child, Some(node)))
            .collect::<Vec<_>>();
        if let Some(element) = self.slots[node.index].element.as_mut() {
            element.children = children;
        }
        node
    }

    fn free_subtree(&mut self, node: NodeId) {
        let Some(slot) = self.slots.get_mut(node.index) else {
            return;
        };
        if slot.generation != node.generation {
            return;
        }
        if let Some(element) = slot.element.take() {
            self.free.push(node.index);
            for child in element.children {
                self.free_subtree(child);
            }
        }
    }

    fn element(&self, node: NodeId) -> DomResult<&Element> {
        self.slots
            .get(node.index)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.element.as_ref())
            .ok_or(DomError::StaleNode(node))
    }

    fn element_mut(&mut self, node: NodeId) -> DomResult<&mut Element> {
        self.slots
            .get_mut(node.index)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.element.as_mut())
            .ok_or(DomError::StaleNode(node))
    }

    fn find_in(&self, node: NodeId, predicate: &dyn Fn(&Element) -> bool) -> Option<NodeId> {
        let element = self.element(node).ok()?;
        if predicate(element) {
            return Some(node);
        }
        self.find_descendant(node, predicate)
    }

    fn find_descendant(
        &self,
        node: NodeId,
        predicate: &dyn Fn(&Element) -> bool,
    ) -> Option<NodeId> {
        let element = self.element(node).ok()?;
        element
            .children
            .iter()
            .find_map(|child| self.find_in(*child, predicate))
    }
}
