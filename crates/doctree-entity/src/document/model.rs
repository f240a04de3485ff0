//! Document entity model.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use doctree_core::types::{DocumentId, EntityRef, FolderId};

/// A document stored for one entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier, assigned by the remote store.
    pub id: DocumentId,
    /// The folder containing this document; `None` means unfiled
    /// (a legacy flat document not yet placed into the hierarchy).
    pub folder_id: Option<FolderId>,
    /// The file name (including extension).
    pub file_name: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// MIME type of the file.
    pub mime_type: Option<String>,
    /// Free-form tags attached at upload time.
    pub tags: Vec<String>,
    /// The entity scope this document belongs to.
    pub scope: EntityRef,
    /// When the document was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    /// Check if the document has not been placed into the hierarchy.
    pub fn is_unfiled(&self) -> bool {
        self.folder_id.is_none()
    }

    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.file_name)
            .map(|ext| ext.to_lowercase())
    }
}

/// Data required to upload a new document.
#[derive(Debug, Clone)]
pub struct UploadDocument {
    /// The entity scope.
    pub scope: EntityRef,
    /// Target folder; `None` uploads the document as unfiled.
    pub folder_id: Option<FolderId>,
    /// The file name.
    pub file_name: String,
    /// MIME type, when known.
    pub mime_type: Option<String>,
    /// Tags to attach.
    pub tags: Vec<String>,
    /// File content bytes.
    pub data: Bytes,
}
