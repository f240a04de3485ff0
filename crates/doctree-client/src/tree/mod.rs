//! Tree reconstruction, path resolution, and move validation.

pub mod index;
pub mod moves;
pub mod path;

pub use index::TreeIndex;
pub use moves::{MoveCheck, MoveItem, MoveRejection, MoveValidator};
pub use path::PathResolver;
