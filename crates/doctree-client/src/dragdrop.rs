//! Drag-and-drop coordination: validation, remote move, refresh.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use doctree_core::AppResult;
use doctree_core::types::FolderId;

use crate::navigator::Navigator;
use crate::store::RemoteStore;
use crate::tree::{MoveCheck, MoveItem, MoveRejection};

/// The payload carried by an in-progress drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    /// What is being dragged.
    pub item: MoveItem,
    /// The folder currently holding the item; `None` for an unfiled
    /// document or a root-level folder.
    pub source: Option<FolderId>,
}

/// What a drop resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The item was moved and the navigator refreshed.
    Moved,
    /// The drop was a no-op (dropped onto the item's current folder, or
    /// no drag was in progress); nothing was called.
    Ignored,
    /// The validator rejected the move; no remote call was made.
    Rejected(MoveRejection),
}

/// Wires drag gestures to move validation, the remote move call, and
/// the navigator refresh.
///
/// Hover highlighting and the drag payload are transient UI feedback:
/// they are reset when the gesture ends, whatever its outcome, and are
/// never treated as committed state.
pub struct DragDropController {
    /// Remote store boundary.
    store: Arc<dyn RemoteStore>,
    /// Payload of the drag in progress, if any.
    dragging: Option<DragPayload>,
    /// Candidate drop target currently highlighted, if any.
    hover_target: Option<FolderId>,
}

impl std::fmt::Debug for DragDropController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragDropController")
            .field("dragging", &self.dragging)
            .field("hover_target", &self.hover_target)
            .finish()
    }
}

impl DragDropController {
    /// Creates a new controller over the given store.
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            dragging: None,
            hover_target: None,
        }
    }

    /// Starts a drag gesture.
    pub fn begin_drag(&mut self, payload: DragPayload) {
        self.dragging = Some(payload);
        self.hover_target = None;
    }

    /// The payload currently being dragged, if any.
    pub fn dragging(&self) -> Option<DragPayload> {
        self.dragging
    }

    /// Highlights (or clears) the candidate drop target under the
    /// pointer.
    pub fn hover(&mut self, target: Option<FolderId>) {
        self.hover_target = target;
    }

    /// The currently highlighted candidate target, if any.
    pub fn hover_target(&self) -> Option<FolderId> {
        self.hover_target
    }

    /// Ends the gesture, clearing all transient drag state.
    pub fn end_drag(&mut self) {
        self.dragging = None;
        self.hover_target = None;
    }

    /// Resolves a drop over `target`.
    ///
    /// A drop onto the folder already holding the item is ignored
    /// without consulting the validator. Validation rejections are
    /// resolved locally and returned as [`DropOutcome::Rejected`];
    /// remote failures propagate as errors with no local state change.
    pub async fn drop_on(
        &mut self,
        navigator: &mut Navigator,
        target: FolderId,
    ) -> AppResult<DropOutcome> {
        let payload = self.dragging;
        self.end_drag();

        let Some(payload) = payload else {
            return Ok(DropOutcome::Ignored);
        };

        if payload.source == Some(target) {
            debug!(item = ?payload.item, target = %target, "Drop onto current folder ignored");
            return Ok(DropOutcome::Ignored);
        }

        match navigator.can_move(payload.item, target) {
            MoveCheck::Rejected(reason) => {
                warn!(item = ?payload.item, target = %target, %reason, "Move rejected");
                return Ok(DropOutcome::Rejected(reason));
            }
            MoveCheck::Allowed => {}
        }

        match payload.item {
            MoveItem::Folder(folder_id) => {
                self.store.move_folder(folder_id, target).await?;
            }
            MoveItem::Document(document_id) => {
                self.store.move_document(document_id, Some(target)).await?;
            }
        }

        info!(item = ?payload.item, destination = %target, "Item moved");

        navigator.refresh().await?;
        Ok(DropOutcome::Moved)
    }
}
