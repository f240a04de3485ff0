//! Shared test helpers: an in-memory remote store with failure injection.

// Each integration test binary compiles its own copy of this module and
// uses only a subset of the helpers.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use doctree_client::RemoteStore;
use doctree_core::{AppError, AppResult};
use doctree_core::types::{DocumentId, EntityKind, EntityRef, FolderId};
use doctree_entity::{CreateFolder, Document, Folder, FolderContents, UploadDocument};

/// In-memory stand-in for the remote document store.
///
/// Tracks call counts per operation so tests can assert which remote
/// calls were (not) issued, and supports injecting failures for the
/// next contents fetch, the next move, or uploads of specific files.
pub struct MockStore {
    scope: EntityRef,
    state: Mutex<State>,
    pub list_calls: AtomicUsize,
    pub contents_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub upload_calls: AtomicUsize,
    pub move_calls: AtomicUsize,
}

#[derive(Default)]
struct State {
    folders: HashMap<FolderId, Folder>,
    documents: HashMap<DocumentId, Document>,
    next_folder_id: i64,
    next_document_id: i64,
    fail_next_contents: bool,
    fail_next_move: bool,
    failing_uploads: Vec<String>,
}

impl MockStore {
    /// Creates a store for one event entity with an auto-provisioned
    /// root folder (id 1, name "Documents").
    pub fn new() -> Self {
        let scope = EntityRef::new(EntityKind::Event, 1);
        let mut state = State {
            next_folder_id: 2,
            next_document_id: 1,
            ..State::default()
        };
        let root_id = FolderId::from_i64(1);
        state.folders.insert(root_id, mk_folder(root_id, None, "Documents", scope));

        Self {
            scope,
            state: Mutex::new(state),
            list_calls: AtomicUsize::new(0),
            contents_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            upload_calls: AtomicUsize::new(0),
            move_calls: AtomicUsize::new(0),
        }
    }

    pub fn scope(&self) -> EntityRef {
        self.scope
    }

    pub fn root_id(&self) -> FolderId {
        FolderId::from_i64(1)
    }

    /// Seeds a folder under `parent` and returns its id.
    pub fn add_folder(&self, parent: FolderId, name: &str) -> FolderId {
        let mut state = self.state.lock().unwrap();
        let id = FolderId::from_i64(state.next_folder_id);
        state.next_folder_id += 1;
        let folder = mk_folder(id, Some(parent), name, self.scope);
        state.folders.insert(id, folder);
        id
    }

    /// Seeds a document and returns its id.
    pub fn add_document(&self, folder_id: Option<FolderId>, name: &str, size: u64) -> DocumentId {
        let mut state = self.state.lock().unwrap();
        let id = DocumentId::from_i64(state.next_document_id);
        state.next_document_id += 1;
        state.documents.insert(
            id,
            Document {
                id,
                folder_id,
                file_name: name.to_string(),
                size_bytes: size,
                mime_type: None,
                tags: Vec::new(),
                scope: self.scope,
                uploaded_at: Utc::now(),
            },
        );
        id
    }

    /// Makes the next `folder_contents` call fail.
    pub fn fail_next_contents(&self) {
        self.state.lock().unwrap().fail_next_contents = true;
    }

    /// Makes the next move (folder or document) call fail.
    pub fn fail_next_move(&self) {
        self.state.lock().unwrap().fail_next_move = true;
    }

    /// Makes uploads of the named file fail remotely.
    pub fn fail_upload_of(&self, file_name: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_uploads
            .push(file_name.to_string());
    }

    /// Current parent of a stored folder (assertion helper).
    pub fn folder_parent(&self, folder_id: FolderId) -> Option<FolderId> {
        self.state
            .lock()
            .unwrap()
            .folders
            .get(&folder_id)
            .and_then(|f| f.parent_id)
    }

    /// Current folder of a stored document (assertion helper).
    pub fn document_folder(&self, document_id: DocumentId) -> Option<FolderId> {
        self.state
            .lock()
            .unwrap()
            .documents
            .get(&document_id)
            .and_then(|d| d.folder_id)
    }

    /// Number of stored folders (assertion helper).
    pub fn folder_count(&self) -> usize {
        self.state.lock().unwrap().folders.len()
    }

    /// Number of stored documents (assertion helper).
    pub fn document_count(&self) -> usize {
        self.state.lock().unwrap().documents.len()
    }

    fn descendant_ids(state: &State, folder_id: FolderId) -> Vec<FolderId> {
        let mut out = Vec::new();
        let mut frontier = vec![folder_id];
        while let Some(parent) = frontier.pop() {
            for folder in state.folders.values() {
                if folder.parent_id == Some(parent) {
                    out.push(folder.id);
                    frontier.push(folder.id);
                }
            }
        }
        out
    }
}

fn mk_folder(id: FolderId, parent_id: Option<FolderId>, name: &str, scope: EntityRef) -> Folder {
    Folder {
        id,
        parent_id,
        name: name.to_string(),
        scope,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[async_trait]
impl RemoteStore for MockStore {
    async fn list_folders(&self, scope: EntityRef) -> AppResult<Vec<Folder>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(state
            .folders
            .values()
            .filter(|f| f.scope == scope)
            .cloned()
            .collect())
    }

    async fn folder_contents(&self, folder_id: FolderId) -> AppResult<FolderContents> {
        self.contents_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        if state.fail_next_contents {
            state.fail_next_contents = false;
            return Err(AppError::remote("injected contents failure"));
        }
        let folder = state
            .folders
            .get(&folder_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Folder not found"))?;
        let mut subfolders: Vec<Folder> = state
            .folders
            .values()
            .filter(|f| f.parent_id == Some(folder_id))
            .cloned()
            .collect();
        subfolders.sort_by_key(|f| f.id);
        let mut documents: Vec<Document> = state
            .documents
            .values()
            .filter(|d| d.folder_id == Some(folder_id))
            .cloned()
            .collect();
        documents.sort_by_key(|d| d.id);
        Ok(FolderContents {
            folder,
            subfolders,
            documents,
        })
    }

    async fn create_folder(&self, req: &CreateFolder) -> AppResult<Folder> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        let id = FolderId::from_i64(state.next_folder_id);
        state.next_folder_id += 1;
        let folder = mk_folder(id, req.parent_id, &req.name, req.scope);
        state.folders.insert(id, folder.clone());
        Ok(folder)
    }

    async fn move_folder(&self, folder_id: FolderId, new_parent_id: FolderId) -> AppResult<Folder> {
        self.move_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        if state.fail_next_move {
            state.fail_next_move = false;
            return Err(AppError::remote("injected move failure"));
        }
        let folder = state
            .folders
            .get_mut(&folder_id)
            .ok_or_else(|| AppError::not_found("Folder not found"))?;
        folder.parent_id = Some(new_parent_id);
        folder.updated_at = Utc::now();
        Ok(folder.clone())
    }

    async fn delete_folder(&self, folder_id: FolderId, force: bool) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        let descendants = Self::descendant_ids(&state, folder_id);
        let has_documents = state
            .documents
            .values()
            .any(|d| d.folder_id == Some(folder_id));
        if !force && (!descendants.is_empty() || has_documents) {
            return Err(AppError::conflict("Folder is not empty"));
        }
        let mut doomed = descendants;
        doomed.push(folder_id);
        for id in &doomed {
            state.folders.remove(id);
        }
        state
            .documents
            .retain(|_, d| !d.folder_id.is_some_and(|f| doomed.contains(&f)));
        Ok(())
    }

    async fn upload_document(&self, req: &UploadDocument) -> AppResult<Document> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        if state.failing_uploads.contains(&req.file_name) {
            return Err(AppError::remote(format!(
                "injected upload failure for '{}'",
                req.file_name
            )));
        }
        let id = DocumentId::from_i64(state.next_document_id);
        state.next_document_id += 1;
        let document = Document {
            id,
            folder_id: req.folder_id,
            file_name: req.file_name.clone(),
            size_bytes: req.data.len() as u64,
            mime_type: req.mime_type.clone(),
            tags: req.tags.clone(),
            scope: req.scope,
            uploaded_at: Utc::now(),
        };
        state.documents.insert(id, document.clone());
        Ok(document)
    }

    async fn move_document(
        &self,
        document_id: DocumentId,
        new_folder_id: Option<FolderId>,
    ) -> AppResult<Document> {
        self.move_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        if state.fail_next_move {
            state.fail_next_move = false;
            return Err(AppError::remote("injected move failure"));
        }
        let document = state
            .documents
            .get_mut(&document_id)
            .ok_or_else(|| AppError::not_found("Document not found"))?;
        document.folder_id = new_folder_id;
        Ok(document.clone())
    }

    async fn delete_document(&self, document_id: DocumentId) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .documents
            .remove(&document_id)
            .ok_or_else(|| AppError::not_found("Document not found"))?;
        Ok(())
    }
}
