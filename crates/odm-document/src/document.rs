//! The materialized document container

use crate::cast::cast;
use crate::metadata::DocumentMetadata;
use crate::snapshot::SnapshotOptions;
use crate::validate::{validate_document, ValidationResult};
use crate::{Error, Result};
use odm_core::{tree, FieldPath, Schema};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Record of one resolved reference field
#[derive(Debug, Clone)]
pub struct PopulatedRef {
    /// The referenced document's schema, when available
    pub schema: Option<Arc<Schema>>,
}

/// A document shaped by a schema
#[derive(Debug, Clone)]
pub struct Document {
    schema: Arc<Schema>,
    data: Value,
    metadata: DocumentMetadata,
    populated: HashMap<String, PopulatedRef>,
}

impl Document {
    /// Create a document from caller input, casting it down to the paths the
    /// schema declares. Undeclared keys are dropped.
    #[must_use]
    pub fn new(schema: Arc<Schema>, input: &Value) -> Self {
        let data = cast(&schema, input);
        Self {
            schema,
            data,
            metadata: DocumentMetadata::now(),
            populated: HashMap::new(),
        }
    }

    /// The schema this document was created through.
    #[must_use]
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// The stored data tree.
    #[must_use]
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Document metadata.
    #[must_use]
    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Resolved reference records, keyed by field name.
    #[must_use]
    pub fn populated(&self) -> &HashMap<String, PopulatedRef> {
        &self.populated
    }

    /// Read a value by path. Virtual accessors take precedence over stored
    /// values.
    #[must_use]
    pub fn get(&self, path: &FieldPath) -> Option<Value> {
        if let Some(accessor) = self.schema.virtual_at(path) {
            return accessor.get(&self.data);
        }
        tree::get_path(&self.data, path).cloned()
    }

    /// Write a value by path. A virtual accessor with a setter takes
    /// precedence over direct storage.
    pub fn set(&mut self, path: &FieldPath, value: Value) {
        if let Some(accessor) = self.schema.virtual_at(path) {
            if accessor.set(&mut self.data, value.clone()) {
                return;
            }
        }
        tree::set_path(&mut self.data, path, value);
    }

    /// Validate the stored tree against the schema's declared rules.
    #[must_use]
    pub fn validate(&self) -> ValidationResult {
        validate_document(&self.schema, &self.data)
    }

    /// Produce a plain-object snapshot of the document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyOptions`] when `options` is `Some` of an
    /// all-default value; pass `None` in that case.
    pub fn to_object(&self, options: Option<&SnapshotOptions>) -> Result<Value> {
        if let Some(options) = options {
            if options.is_empty() {
                return Err(Error::EmptyOptions);
            }
        }
        let mut snapshot = self.data.clone();
        if options.is_some_and(|options| options.virtuals) {
            for accessor in self.schema.virtuals() {
                if let Some(value) = accessor.get(&self.data) {
                    tree::set_path(&mut snapshot, accessor.path(), value);
                }
            }
        }
        Ok(snapshot)
    }

    /// Produce the JSON-serialization snapshot of the document. Shares shape
    /// and option handling with [`Document::to_object`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyOptions`] when `options` is `Some` of an
    /// all-default value.
    pub fn to_json(&self, options: Option<&SnapshotOptions>) -> Result<Value> {
        self.to_object(options)
    }

    /// Resolve a reference field by embedding another document's snapshot at
    /// `field`, recording the referenced schema.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] when `field` is not declared.
    pub fn attach_reference(&mut self, field: &str, referenced: &Document) -> Result<()> {
        let path = self.declared_field(field)?;
        let snapshot = referenced.to_object(None)?;
        tree::set_path(&mut self.data, &path, snapshot);
        debug!(field, "resolved single reference");
        self.populated.insert(
            field.to_string(),
            PopulatedRef {
                schema: Some(Arc::clone(referenced.schema())),
            },
        );
        Ok(())
    }

    /// Resolve a reference field holding an array of linked documents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] when `field` is not declared.
    pub fn attach_references(&mut self, field: &str, referenced: &[Document]) -> Result<()> {
        let path = self.declared_field(field)?;
        let mut snapshots = Vec::with_capacity(referenced.len());
        for document in referenced {
            snapshots.push(document.to_object(None)?);
        }
        tree::set_path(&mut self.data, &path, Value::Array(snapshots));
        debug!(field, count = referenced.len(), "resolved reference array");
        let schema = referenced.first().map(|doc| Arc::clone(doc.schema()));
        self.populated
            .insert(field.to_string(), PopulatedRef { schema });
        Ok(())
    }

    /// Record a populated entry without (or with) a referenced schema, for
    /// callers that embedded the data themselves.
    pub fn mark_populated(&mut self, field: impl Into<String>, schema: Option<Arc<Schema>>) {
        self.populated.insert(field.into(), PopulatedRef { schema });
    }

    fn declared_field(&self, field: &str) -> Result<FieldPath> {
        let path =
            FieldPath::parse(field).map_err(|_| Error::UnknownField(field.to_string()))?;
        if !self.schema.contains(&path) {
            return Err(Error::UnknownField(field.to_string()));
        }
        Ok(path)
    }
}
