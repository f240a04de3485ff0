//! Entity scope types.
//!
//! Every folder and document belongs to exactly one business entity; the
//! `(kind, id)` pair scopes one independent tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of business entity that owns a document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// An event (conference, workshop, ...).
    Event,
    /// An event participant.
    Participant,
    /// A speaker.
    Speaker,
    /// A course enrollment.
    Enrollment,
    /// A task.
    Task,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event => write!(f, "event"),
            Self::Participant => write!(f, "participant"),
            Self::Speaker => write!(f, "speaker"),
            Self::Enrollment => write!(f, "enrollment"),
            Self::Task => write!(f, "task"),
        }
    }
}

/// Reference to the business entity owning a folder/document tree.
///
/// All folders indexed together share the same `EntityRef`; mixing scopes
/// in one tree is a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    /// The entity kind.
    pub kind: EntityKind,
    /// The entity's own identifier.
    pub id: i64,
}

impl EntityRef {
    /// Creates a new entity reference.
    pub fn new(kind: EntityKind, id: i64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}
