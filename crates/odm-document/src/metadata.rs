//! Metadata attached to materialized documents

use serde::{Deserialize, Serialize};

/// Metadata associated with a document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Creation timestamp
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl DocumentMetadata {
    /// Metadata stamped with the current time.
    #[must_use]
    pub fn now() -> Self {
        Self {
            created_at: Some(chrono::Utc::now()),
        }
    }
}
