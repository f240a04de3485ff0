//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use doctree_core::types::{EntityRef, FolderId};

use crate::document::Document;

/// A folder in one entity's document hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier, assigned by the remote store.
    pub id: FolderId,
    /// Parent folder ID (`None` for the entity's root folder).
    pub parent_id: Option<FolderId>,
    /// Stored folder name. The root folder's name is overridden by the
    /// owning entity's name in UI display, never in storage.
    pub name: String,
    /// The entity scope this folder belongs to.
    pub scope: EntityRef,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// The entity scope.
    pub scope: EntityRef,
    /// Parent folder (`None` only for the auto-provisioned root).
    pub parent_id: Option<FolderId>,
    /// Folder name.
    pub name: String,
}

/// A folder together with its direct subfolders and attached documents,
/// as returned by one contents call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderContents {
    /// The folder itself.
    pub folder: Folder,
    /// Direct subfolders.
    pub subfolders: Vec<Folder>,
    /// Documents attached directly to this folder.
    pub documents: Vec<Document>,
}
