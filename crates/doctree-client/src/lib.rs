//! # doctree-client
//!
//! Client-side tree management and move-safety core for Doctree. The
//! crate reconstructs a navigable folder hierarchy from the remote
//! store's flat folder list, derives breadcrumbs, validates reparenting
//! operations so the tree can never become cyclic, and coordinates
//! multi-file upload batches with per-file outcomes.
//!
//! The UI layer renders exclusively from [`Navigator`], the
//! [`Navigator::can_move`] query, and [`UploadQueue`] outcomes; it never
//! talks to the remote store or the tree index directly. Components
//! follow constructor injection — the store boundary is provided as an
//! `Arc<dyn RemoteStore>` at construction time.

pub mod dragdrop;
pub mod navigator;
pub mod store;
pub mod tree;
pub mod upload;

pub use dragdrop::{DragDropController, DragPayload, DropOutcome};
pub use navigator::Navigator;
pub use store::RemoteStore;
pub use tree::{MoveCheck, MoveItem, MoveRejection, MoveValidator, PathResolver, TreeIndex};
pub use upload::{PendingUpload, UploadOutcome, UploadQueue, UploadRequest, UploadStatus};
