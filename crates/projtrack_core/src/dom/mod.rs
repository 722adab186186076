//! Headless document surface that views render into.
//!
//! # Responsibility
//! - Provide element lookup by id, template cloning and node insertion.
//! - Keep a textual dump for CLI output and assertions.
//!
//! # Invariants
//! - Lookup by id only finds nodes attached under the document root.
//! - Cleared subtrees are freed; their `NodeId`s become stale, never reused
//!   silently.

mod document;
pub mod templates;

pub use document::{Document, InsertPosition, NodeId, TemplateNode};

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DomResult<T> = Result<T, DomError>;

/// Document access errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// No template registered under this id.
    TemplateNotFound(String),
    /// Template exists but has no element content.
    EmptyTemplate(String),
    /// No attached element carries this id.
    ElementNotFound(String),
    /// Selector matched nothing inside the given subtree.
    SelectorNotFound { scope: NodeId, selector: String },
    /// Node handle refers to a freed node.
    StaleNode(NodeId),
}

impl Display for DomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TemplateNotFound(id) => write!(f, "template not found: {id}"),
            Self::EmptyTemplate(id) => write!(f, "template has no element content: {id}"),
            Self::ElementNotFound(id) => write!(f, "element not found: #{id}"),
            Self::SelectorNotFound { scope, selector } => {
                write!(f, "selector `{selector}` matched nothing under {scope}")
            }
            Self::StaleNode(node) => write!(f, "node handle is stale: {node}"),
        }
    }
}

impl Error for DomError {}
