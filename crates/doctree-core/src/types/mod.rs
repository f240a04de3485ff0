//! Shared type definitions: typed identifiers and entity scopes.

pub mod entity;
pub mod id;

pub use entity::{EntityKind, EntityRef};
pub use id::{DocumentId, FolderId};
