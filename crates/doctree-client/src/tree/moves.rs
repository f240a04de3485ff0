//! Reparenting validation: the cycle-safety core.
//!
//! Every move is validated by an explicit ancestor walk from the
//! proposed destination upward through the [`TreeIndex`]; server state
//! is never trusted to be acyclic on its own.

use std::fmt;

use serde::{Deserialize, Serialize};

use doctree_core::types::{DocumentId, FolderId};

use super::TreeIndex;

/// The item being reparented, a closed set of two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum MoveItem {
    /// A folder and its whole subtree.
    Folder(FolderId),
    /// A single document.
    Document(DocumentId),
}

/// Why a proposed move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveRejection {
    /// The destination is the folder being moved.
    IntoItself,
    /// The destination lies inside the moved folder's subtree.
    IntoOwnSubtree,
    /// The destination folder is not part of this entity's tree.
    UnknownDestination,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntoItself => write!(f, "Cannot move a folder into itself"),
            Self::IntoOwnSubtree => {
                write!(f, "Cannot move a folder into its own subtree")
            }
            Self::UnknownDestination => write!(f, "Destination folder no longer exists"),
        }
    }
}

/// Outcome of a [`MoveValidator::can_move`] query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCheck {
    /// The move is legal; the caller may issue the remote call.
    Allowed,
    /// The move is illegal; no remote call must be made.
    Rejected(MoveRejection),
}

impl MoveCheck {
    /// Whether the move may proceed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Validates reparenting operations against the current tree.
#[derive(Debug, Clone, Copy)]
pub struct MoveValidator<'a> {
    index: &'a TreeIndex,
}

impl<'a> MoveValidator<'a> {
    /// Creates a validator over the given index.
    pub fn new(index: &'a TreeIndex) -> Self {
        Self { index }
    }

    /// Decides whether moving `item` into `destination` is legal.
    ///
    /// Folder moves walk the destination's ancestor chain, bounded by
    /// tree depth, comparing each visited id against the moved folder;
    /// a hit means the destination sits inside the moved subtree.
    /// Documents cannot contain other items, so they carry no
    /// descendant restriction.
    pub fn can_move(&self, item: MoveItem, destination: FolderId) -> MoveCheck {
        match item {
            MoveItem::Folder(folder_id) => {
                if folder_id == destination {
                    return MoveCheck::Rejected(MoveRejection::IntoItself);
                }
                if self.index.find_by_id(destination).is_none() {
                    return MoveCheck::Rejected(MoveRejection::UnknownDestination);
                }
                if self.index.ancestor_ids(destination).contains(&folder_id) {
                    return MoveCheck::Rejected(MoveRejection::IntoOwnSubtree);
                }
                MoveCheck::Allowed
            }
            MoveItem::Document(_) => {
                if self.index.find_by_id(destination).is_none() {
                    return MoveCheck::Rejected(MoveRejection::UnknownDestination);
                }
                MoveCheck::Allowed
            }
        }
    }
}
