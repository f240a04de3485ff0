//! The remote document store boundary.
//!
//! Everything behind this trait — HTTP calls, authentication headers,
//! multipart encoding, request timeouts — is outside this crate. The
//! core only ever sees `AppResult` values; a failed call surfaces as an
//! [`AppError`](doctree_core::AppError) and never leaves partially
//! committed local state behind.

use async_trait::async_trait;

use doctree_core::AppResult;
use doctree_core::types::{DocumentId, EntityRef, FolderId};
use doctree_entity::{CreateFolder, Document, Folder, FolderContents, UploadDocument};

/// Remote store operations consumed by the tree core.
///
/// The store is authoritative: in-memory state derived from these calls
/// is a read cache, refetched after every mutation rather than patched
/// optimistically.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Returns the full flat folder list for one entity, unordered.
    async fn list_folders(&self, scope: EntityRef) -> AppResult<Vec<Folder>>;

    /// Returns a folder together with its direct subfolders and documents.
    async fn folder_contents(&self, folder_id: FolderId) -> AppResult<FolderContents>;

    /// Creates a folder and returns the stored record.
    async fn create_folder(&self, req: &CreateFolder) -> AppResult<Folder>;

    /// Reparents a folder and returns the updated record.
    async fn move_folder(&self, folder_id: FolderId, new_parent_id: FolderId) -> AppResult<Folder>;

    /// Deletes a folder; `force = true` cascades to descendants and
    /// contained documents.
    async fn delete_folder(&self, folder_id: FolderId, force: bool) -> AppResult<()>;

    /// Uploads one document and returns the stored record.
    async fn upload_document(&self, req: &UploadDocument) -> AppResult<Document>;

    /// Moves a document into a folder, or unfiles it with `None`.
    async fn move_document(
        &self,
        document_id: DocumentId,
        new_folder_id: Option<FolderId>,
    ) -> AppResult<Document>;

    /// Deletes a single document.
    async fn delete_document(&self, document_id: DocumentId) -> AppResult<()>;
}
