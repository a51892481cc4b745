//! # odm-document
//!
//! The materialized document container for the ODM layer.
//!
//! A [`Document`] owns a `serde_json::Value` data tree shaped by its schema:
//! creation casts the input down to the declared paths, validation checks the
//! declared rules, and snapshot calls hand out deep copies for serialization.
//! Reference fields can be resolved by embedding another document's snapshot,
//! keeping track of the referenced schema for downstream consumers.

pub mod cast;
pub mod document;
pub mod metadata;
pub mod snapshot;
pub mod validate;

pub use document::{Document, PopulatedRef};
pub use metadata::DocumentMetadata;
pub use snapshot::SnapshotOptions;
pub use validate::{ValidationError, ValidationResult};

use thiserror::Error;

/// Errors that can occur when working with documents
#[derive(Error, Debug)]
pub enum Error {
    #[error("Snapshot options must not be empty; pass no options instead")]
    EmptyOptions,

    #[error("Field '{0}' is not declared in the schema")]
    UnknownField(String),
}

/// Crate-local result type for document operations.
pub type Result<T> = std::result::Result<T, Error>;
