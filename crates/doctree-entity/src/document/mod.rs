//! Document domain entities.

pub mod model;

pub use model::{Document, UploadDocument};
