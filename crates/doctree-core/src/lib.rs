//! # doctree-core
//!
//! Core crate for Doctree. Contains configuration schemas, typed
//! identifiers, entity scope types, logging setup, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Doctree crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
