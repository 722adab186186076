//! Blocking user-facing alerts.

use std::cell::RefCell;

/// Message shown when submitted input fails validation.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input, please try again.";

/// Sink for modal alerts. Implementations block until acknowledged, if at all.
pub trait AlertSink {
    fn alert(&self, message: &str);
}

/// Alert sink that keeps every message, in order.
#[derive(Debug, Default)]
pub struct RecordedAlerts {
    messages: RefCell<Vec<String>>,
}

impl RecordedAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl AlertSink for RecordedAlerts {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
