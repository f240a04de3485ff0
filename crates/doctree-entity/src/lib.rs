//! # doctree-entity
//!
//! Domain entity models for Doctree. Every struct in this crate
//! represents a record held by the remote document store or a request
//! payload sent to it. All entities derive `Debug`, `Clone`,
//! `Serialize`, and `Deserialize`.

pub mod document;
pub mod folder;

pub use document::{Document, UploadDocument};
pub use folder::{CreateFolder, Folder, FolderContents};
