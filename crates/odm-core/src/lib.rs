#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # odm-core
//!
//! Field paths, value-tree navigation, and the schema model for the
//! object-document mapping layer.
//!
//! This crate provides the primitives the rest of the workspace builds on:
//! dotted field paths kept as segment sequences, navigation helpers over
//! `serde_json::Value` trees, an ordered schema of field declarations with
//! computed virtual accessors, and a concurrent registry mapping model names
//! to their schemas.

/// Field declaration attributes and type tags.
pub mod field;
/// Dotted field paths kept as segment sequences.
pub mod path;
/// Concurrent model-name to schema registry.
pub mod registry;
/// Ordered field declarations, virtual accessors, and plugin data.
pub mod schema;
/// Navigation helpers over `serde_json::Value` trees.
pub mod tree;

/// Field configuration and the supported field types.
pub use field::{FieldConfig, FieldType};
/// Segment-sequence representation of a dotted field path.
pub use path::FieldPath;
/// Shared schema lookup for reference resolution.
pub use registry::SchemaRegistry;
/// Schema container and computed accessors.
pub use schema::{Schema, VirtualField};

use thiserror::Error;

/// Errors that can occur when working with paths and schemas
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

impl Error {
    /// Build an invalid-path error with input path and parsing reason.
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, Error>;
