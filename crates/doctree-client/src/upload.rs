//! Multi-file upload batches with per-file validation and outcomes.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use doctree_core::AppError;
use doctree_core::config::UploadConfig;
use doctree_core::types::{EntityRef, FolderId};
use doctree_entity::{Document, UploadDocument};

use crate::store::RemoteStore;

/// One file selected for upload, before validation.
#[derive(Debug, Clone)]
pub struct PendingUpload {
    /// The file name.
    pub file_name: String,
    /// MIME type, when known.
    pub mime_type: Option<String>,
    /// Tags to attach to the stored document.
    pub tags: Vec<String>,
    /// File content bytes.
    pub data: Bytes,
}

/// An upload batch aimed at one target folder.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// The files to upload, in selection order.
    pub files: Vec<PendingUpload>,
    /// The folder receiving the batch.
    pub target_folder: FolderId,
}

/// Per-file result of an upload batch, in input order.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// The file name, for attribution in UI messages.
    pub file_name: String,
    /// What happened to this file.
    pub status: UploadStatus,
}

/// What happened to one file of a batch.
#[derive(Debug, Clone)]
pub enum UploadStatus {
    /// The file was stored; the created document record.
    Uploaded(Document),
    /// Pre-flight validation excluded the file; no network call was made.
    Rejected {
        /// Human-readable rejection reason.
        reason: String,
    },
    /// The remote store failed this file's upload call.
    Failed {
        /// The surfaced remote error.
        error: AppError,
    },
}

impl UploadStatus {
    /// Whether the file was stored.
    pub fn is_uploaded(&self) -> bool {
        matches!(self, Self::Uploaded(_))
    }

    /// Whether pre-flight validation excluded the file.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Whether the remote upload call failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Validates and executes upload batches, one file at a time.
///
/// Sequential execution is a deliberate backpressure choice: it bounds
/// outbound transfers to one and keeps error attribution per file
/// unambiguous. The queue always attempts every valid file; a failure
/// never aborts the remainder of the batch.
#[derive(Clone)]
pub struct UploadQueue {
    /// Remote store boundary.
    store: Arc<dyn RemoteStore>,
    /// Validation limits.
    config: UploadConfig,
}

impl std::fmt::Debug for UploadQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadQueue")
            .field("max_size_bytes", &self.config.max_size_bytes)
            .finish()
    }
}

impl UploadQueue {
    /// Creates a new upload queue.
    pub fn new(store: Arc<dyn RemoteStore>, config: UploadConfig) -> Self {
        Self { store, config }
    }

    /// Processes a batch and returns one outcome per input file, in
    /// input order.
    ///
    /// Validation runs for the whole batch before any network call;
    /// files failing it are reported individually and never block the
    /// valid files. Valid files then upload strictly sequentially.
    /// The caller refreshes the navigator once after the batch, not per
    /// file.
    pub async fn process(&self, scope: EntityRef, request: UploadRequest) -> Vec<UploadOutcome> {
        let target_folder = request.target_folder;

        // Pre-flight pass over the whole batch before any network call.
        let validated: Vec<(PendingUpload, Option<UploadStatus>)> = request
            .files
            .into_iter()
            .map(|file| {
                let preflight = self.validate(&file);
                (file, preflight)
            })
            .collect();

        let mut outcomes = Vec::with_capacity(validated.len());
        for (file, preflight) in validated {
            let file_name = file.file_name.clone();
            let status = match preflight {
                Some(rejected) => rejected,
                None => {
                    let req = UploadDocument {
                        scope,
                        folder_id: Some(target_folder),
                        file_name: file.file_name,
                        mime_type: file.mime_type,
                        tags: file.tags,
                        data: file.data,
                    };
                    match self.store.upload_document(&req).await {
                        Ok(document) => {
                            info!(
                                scope = %scope,
                                document_id = %document.id,
                                file_name = %document.file_name,
                                size = document.size_bytes,
                                "Document uploaded"
                            );
                            UploadStatus::Uploaded(document)
                        }
                        Err(error) => {
                            warn!(
                                scope = %scope,
                                file_name = %file_name,
                                error = %error,
                                "Upload failed"
                            );
                            UploadStatus::Failed { error }
                        }
                    }
                }
            };
            outcomes.push(UploadOutcome { file_name, status });
        }

        outcomes
    }

    fn validate(&self, file: &PendingUpload) -> Option<UploadStatus> {
        if file.data.len() as u64 > self.config.max_size_bytes {
            warn!(
                file_name = %file.file_name,
                size = file.data.len(),
                limit = self.config.max_size_bytes,
                "Upload rejected before transfer"
            );
            return Some(UploadStatus::Rejected {
                reason: format!(
                    "File exceeds maximum upload size of {} MB",
                    self.config.max_size_mb()
                ),
            });
        }
        if !self.config.accepts_mime_type(file.mime_type.as_deref()) {
            warn!(
                file_name = %file.file_name,
                mime_type = file.mime_type.as_deref().unwrap_or("unknown"),
                "Upload rejected before transfer"
            );
            return Some(UploadStatus::Rejected {
                reason: format!(
                    "File type '{}' is not accepted",
                    file.mime_type.as_deref().unwrap_or("unknown")
                ),
            });
        }
        None
    }
}
