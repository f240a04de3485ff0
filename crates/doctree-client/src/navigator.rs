//! Current-folder state machine and tree-view expansion state.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use doctree_core::{AppError, AppResult};
use doctree_core::types::{DocumentId, EntityRef, FolderId};
use doctree_entity::{CreateFolder, Folder, FolderContents};

use crate::store::RemoteStore;
use crate::tree::{MoveCheck, MoveItem, MoveValidator, PathResolver, TreeIndex};
use crate::upload::{PendingUpload, UploadOutcome, UploadQueue, UploadRequest};

/// Tracks the current folder of one entity's tree, its fetched
/// contents, and the per-folder expanded/collapsed view state.
///
/// All fields are read caches over the remote store. Mutating
/// operations refetch the affected state instead of patching it; a
/// failed fetch leaves every field exactly as it was.
pub struct Navigator {
    /// Remote store boundary.
    store: Arc<dyn RemoteStore>,
    /// The entity whose tree is being browsed.
    scope: EntityRef,
    /// Human name of the entity, shown in place of the root folder's
    /// stored name.
    entity_name: String,
    /// Index over the last-fetched flat folder list.
    index: TreeIndex,
    /// Contents of the current folder.
    current: FolderContents,
    /// Folder ids currently expanded in the tree view.
    expanded: HashSet<FolderId>,
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("scope", &self.scope)
            .field("current", &self.current.folder.id)
            .finish()
    }
}

impl Navigator {
    /// Opens an entity's tree at its root folder.
    ///
    /// Fails if the entity has no root folder in the store (the root is
    /// auto-provisioned server-side, so this indicates a setup problem).
    pub async fn open_entity(
        store: Arc<dyn RemoteStore>,
        scope: EntityRef,
        entity_name: impl Into<String>,
    ) -> AppResult<Self> {
        let folders = store.list_folders(scope).await?;
        let index = TreeIndex::build(folders);
        let root_id = index
            .root()
            .ok_or_else(|| AppError::not_found(format!("No root folder for entity {scope}")))?
            .id;
        let current = store.folder_contents(root_id).await?;

        info!(scope = %scope, root_id = %root_id, "Opened entity tree");

        Ok(Self {
            store,
            scope,
            entity_name: entity_name.into(),
            index,
            current,
            expanded: HashSet::from([root_id]),
        })
    }

    /// Makes `folder_id` the current folder.
    ///
    /// Refetches the flat folder list and the folder's contents, then
    /// commits both together. Every ancestor of the opened folder is
    /// added to the expanded set (merged with, not replacing, the
    /// previously expanded ids) so the view reveals the path without
    /// collapsing unrelated branches. On any fetch failure the previous
    /// state is left untouched and the error is surfaced.
    pub async fn open(&mut self, folder_id: FolderId) -> AppResult<()> {
        let folders = self.store.list_folders(self.scope).await?;
        let index = TreeIndex::build(folders);
        let contents = self.store.folder_contents(folder_id).await?;

        self.expanded.extend(index.ancestor_ids(folder_id));
        self.expanded.insert(folder_id);
        self.index = index;
        self.current = contents;

        info!(scope = %self.scope, folder_id = %folder_id, "Opened folder");
        Ok(())
    }

    /// Re-opens the current folder; used after any mutation.
    pub async fn refresh(&mut self) -> AppResult<()> {
        self.open(self.current.folder.id).await
    }

    /// Flips a folder's expanded/collapsed state in the tree view.
    pub fn toggle_expand(&mut self, folder_id: FolderId) {
        if !self.expanded.remove(&folder_id) {
            self.expanded.insert(folder_id);
        }
    }

    /// Whether a folder is currently expanded.
    pub fn is_expanded(&self, folder_id: FolderId) -> bool {
        self.expanded.contains(&folder_id)
    }

    /// The current folder.
    pub fn current_folder(&self) -> &Folder {
        &self.current.folder
    }

    /// The current folder's fetched contents.
    pub fn contents(&self) -> &FolderContents {
        &self.current
    }

    /// The entity scope being browsed.
    pub fn scope(&self) -> EntityRef {
        self.scope
    }

    /// Breadcrumb trail from the root to the current folder.
    pub fn breadcrumbs(&self) -> Vec<Folder> {
        PathResolver::new(&self.index).breadcrumb_of(&self.current.folder)
    }

    /// The name to display for a folder: the entity's own name for the
    /// root, the stored name otherwise. Display-only; the stored name
    /// is never rewritten.
    pub fn display_name<'a>(&'a self, folder: &'a Folder) -> &'a str {
        if folder.is_root() {
            &self.entity_name
        } else {
            &folder.name
        }
    }

    /// Ordered child folders for tree-view rendering; `None` selects
    /// the root level.
    pub fn children_of(&self, parent: Option<FolderId>) -> Vec<&Folder> {
        self.index.children_of(parent)
    }

    /// Whether a folder has subfolders (drives the expand affordance).
    pub fn has_children(&self, folder_id: FolderId) -> bool {
        self.index.has_children(folder_id)
    }

    /// Validates a proposed reparenting against the current tree.
    pub fn can_move(&self, item: MoveItem, destination: FolderId) -> MoveCheck {
        MoveValidator::new(&self.index).can_move(item, destination)
    }

    /// Creates a folder and refetches the tree.
    ///
    /// The parent defaults to the current folder when not given.
    pub async fn create_folder(
        &mut self,
        name: &str,
        parent_id: Option<FolderId>,
    ) -> AppResult<Folder> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        let parent_id = parent_id.unwrap_or(self.current.folder.id);
        let req = CreateFolder {
            scope: self.scope,
            parent_id: Some(parent_id),
            name: name.to_string(),
        };
        let folder = self.store.create_folder(&req).await?;

        info!(
            scope = %self.scope,
            folder_id = %folder.id,
            parent_id = %parent_id,
            "Folder created"
        );

        self.refresh().await?;
        Ok(folder)
    }

    /// Deletes a folder and refetches the tree.
    ///
    /// `force = true` cascades to descendants and contained documents;
    /// the caller is expected to have confirmed the cascade with the
    /// user beforehand. When the deleted folder was the current folder
    /// or one of its ancestors, navigation falls back to the deleted
    /// folder's parent.
    pub async fn delete_folder(&mut self, folder_id: FolderId, force: bool) -> AppResult<()> {
        let fallback = self.index.find_by_id(folder_id).and_then(|f| f.parent_id);

        self.store.delete_folder(folder_id, force).await?;

        info!(scope = %self.scope, folder_id = %folder_id, force, "Folder deleted");

        let current_id = self.current.folder.id;
        let current_gone =
            current_id == folder_id || self.index.ancestor_ids(current_id).contains(&folder_id);

        match (current_gone, fallback) {
            (true, Some(parent_id)) => self.open(parent_id).await,
            (true, None) => Err(AppError::internal(
                "The root folder of an open tree was deleted",
            )),
            (false, _) => self.refresh().await,
        }
    }

    /// Deletes a single document and refetches the current contents.
    pub async fn delete_document(&mut self, document_id: DocumentId) -> AppResult<()> {
        self.store.delete_document(document_id).await?;
        info!(scope = %self.scope, document_id = %document_id, "Document deleted");
        self.refresh().await
    }

    /// Runs an upload batch into the current folder, then refetches
    /// once for the whole batch (never per file).
    pub async fn upload(
        &mut self,
        queue: &UploadQueue,
        files: Vec<PendingUpload>,
    ) -> AppResult<Vec<UploadOutcome>> {
        let request = UploadRequest {
            files,
            target_folder: self.current.folder.id,
        };
        let outcomes = queue.process(self.scope, request).await;
        self.refresh().await?;
        Ok(outcomes)
    }
}
