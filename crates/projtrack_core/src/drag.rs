//! Drag-and-drop payload protocol.
//!
//! # Responsibility
//! - Model the per-gesture transfer channel (typed string entries plus the
//!   allowed effect) shared by a drag source and a drop target.
//! - Declare the two independent capabilities a view may implement.
//!
//! # Invariants
//! - A `DataTransfer` lives for exactly one gesture.
//! - A drop only fires on a target whose drag-over handler prevented the
//!   default; callers replaying gestures must honour `default_prevented`.

use crate::component::ViewResult;

/// Media type used for the dragged project id.
pub const PLAIN_TEXT_MEDIA_TYPE: &str = "text/plain";

/// Effects a drag source permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    /// Nothing declared yet by the drag source.
    #[default]
    Uninitialized,
    Move,
}

/// Typed key/value payload scoped to one drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `media_type`, keeping the type's original position
    /// when it is already present.
    pub fn set_data(&mut self, media_type: &str, data: impl Into<String>) {
        let data = data.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing == media_type)
        {
            Some((_, value)) => *value = data,
            None => self.entries.push((media_type.to_string(), data)),
        }
    }

    pub fn get_data(&self, media_type: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == media_type)
            .map(|(_, value)| value.as_str())
    }

    /// Declared media types in insertion order.
    pub fn types(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|(media_type, _)| media_type.as_str())
            .collect()
    }
}

/// One dispatched drag event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DragEvent {
    data_transfer: Option<DataTransfer>,
    default_prevented: bool,
}

impl DragEvent {
    pub fn new(data_transfer: DataTransfer) -> Self {
        Self {
            data_transfer: Some(data_transfer),
            default_prevented: false,
        }
    }

    /// Event with no transfer channel attached.
    pub fn without_data() -> Self {
        Self::default()
    }

    pub fn data_transfer(&self) -> Option<&DataTransfer> {
        self.data_transfer.as_ref()
    }

    pub fn data_transfer_mut(&mut self) -> Option<&mut DataTransfer> {
        self.data_transfer.as_mut()
    }

    pub fn into_data_transfer(self) -> Option<DataTransfer> {
        self.data_transfer
    }

    /// Suppresses the default rejection; on drag-over this permits a drop.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Drag source capability.
pub trait Draggable {
    fn on_drag_start(&self, event: &mut DragEvent) -> ViewResult<()>;
    fn on_drag_end(&self, event: &DragEvent) -> ViewResult<()>;
}

/// Drop target capability.
pub trait DragTarget {
    fn on_drag_over(&self, event: &mut DragEvent) -> ViewResult<()>;
    fn on_drop(&self, event: &mut DragEvent) -> ViewResult<()>;
    fn on_drag_leave(&self, event: &DragEvent) -> ViewResult<()>;
}
