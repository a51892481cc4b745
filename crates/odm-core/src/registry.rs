//! Concurrent model-name to schema registry
//!
//! Reference fields name the model they point at; the registry resolves that
//! name to the referenced schema when a document is materialized alongside
//! its linked documents.

use crate::schema::Schema;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Shared lookup of schemas by model name
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: DashMap<String, Arc<Schema>>,
}

impl SchemaRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under a model name, replacing any previous entry.
    pub fn register(&self, name: impl Into<String>, schema: Arc<Schema>) {
        let name = name.into();
        debug!(model = %name, fields = schema.len(), "registering schema");
        self.schemas.insert(name, schema);
    }

    /// Get a schema by model name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Schema>> {
        self.schemas.get(name).map(|entry| Arc::clone(&entry))
    }

    /// Check if a model name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }
}
