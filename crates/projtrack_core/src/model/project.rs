//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record owned by the store.
//! - Provide status parsing and people-count labelling helpers.
//!
//! # Invariants
//! - `id` is generated once at creation and never reassigned.
//! - `status` is one of two values; moving to the current status is a no-op.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a tracked project.
pub type ProjectId = Uuid;

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Still being worked on.
    Active,
    /// Done.
    Finished,
}

impl ProjectStatus {
    /// Stable lowercase name, also used for element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// The status a project would move to when dragged to the other list.
    pub fn other(self) -> Self {
        match self {
            Self::Active => Self::Finished,
            Self::Finished => Self::Active,
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(pub String);

impl Display for ParseStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported project status `{}`; expected active|finished",
            self.0
        )
    }
}

impl Error for ParseStatusError {}

/// Parses `active` / `finished` (case-insensitive, surrounding whitespace ignored).
pub fn parse_project_status(value: &str) -> Result<ProjectStatus, ParseStatusError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "active" => Ok(ProjectStatus::Active),
        "finished" => Ok(ProjectStatus::Finished),
        other => Err(ParseStatusError(other.to_string())),
    }
}

/// One tracked project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned. Input validation keeps this in `1..=5`.
    pub people: u32,
    pub status: ProjectStatus,
}

impl ProjectRecord {
    /// Creates an active project with a freshly generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, people)
    }

    /// Creates an active project with a caller-provided id.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Human-readable assignment label, e.g. `1 person assigned`.
    pub fn people_label(&self) -> String {
        people_label(self.people)
    }
}

/// Pluralized people-count label.
pub fn people_label(people: u32) -> String {
    if people == 1 {
        "1 person assigned".to_string()
    } else {
        format!("{people} people assigned")
    }
}
