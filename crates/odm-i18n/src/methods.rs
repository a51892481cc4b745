//! Translated snapshot methods for documents
//!
//! Thin wrappers over the document's native snapshot calls: they strip the
//! `language` option, delegate, then flatten the result and every resolved
//! reference's sub-tree.

use crate::plugin::metadata;
use crate::translate::translate_object;
use crate::Result;
use odm_document::{Document, SnapshotOptions};
use serde_json::Value;

/// Options accepted by the translated snapshot methods.
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// Language to flatten to. Falls back to the schema's configured default
    /// when absent.
    pub language: Option<String>,
    /// Options forwarded to the underlying snapshot call.
    pub snapshot: SnapshotOptions,
}

impl TranslateOptions {
    /// Create all-default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Forward options to the underlying snapshot call.
    #[must_use]
    pub fn snapshot(mut self, snapshot: SnapshotOptions) -> Self {
        self.snapshot = snapshot;
        self
    }
}

/// Translated counterparts of the native snapshot calls.
pub trait TranslatedSnapshots {
    /// Like `to_object`, flattening every localized field to the effective
    /// language. Without an explicit language and without a configured
    /// default, behaves exactly like the untranslated call.
    ///
    /// # Errors
    ///
    /// Propagates snapshot and plugin-metadata errors.
    fn to_object_translated(&self, options: Option<TranslateOptions>) -> Result<Value>;

    /// Like `to_json`, flattening every localized field to the effective
    /// language.
    ///
    /// # Errors
    ///
    /// Propagates snapshot and plugin-metadata errors.
    fn to_json_translated(&self, options: Option<TranslateOptions>) -> Result<Value>;
}

impl TranslatedSnapshots for Document {
    fn to_object_translated(&self, options: Option<TranslateOptions>) -> Result<Value> {
        translated(self, options, Document::to_object)
    }

    fn to_json_translated(&self, options: Option<TranslateOptions>) -> Result<Value> {
        translated(self, options, Document::to_json)
    }
}

fn translated<F>(document: &Document, options: Option<TranslateOptions>, snapshot: F) -> Result<Value>
where
    F: Fn(&Document, Option<&SnapshotOptions>) -> odm_document::Result<Value>,
{
    let (language, snapshot_options) = split_options(options);
    let meta = metadata(document.schema())?;
    let language =
        language.or_else(|| meta.as_ref().and_then(|m| m.default_language.clone()));

    // the native call rejects an options value that became empty after the
    // language was stripped out
    let mut value = snapshot(document, snapshot_options.as_ref())?;

    if let Some(language) = language {
        let default_language = meta.as_ref().and_then(|m| m.default_language.as_deref());
        translate_object(&mut value, document.schema(), &language, default_language)?;

        // flatten resolved references with their own schemas; entries without
        // an accessible schema are skipped
        for (field, record) in document.populated() {
            let Some(ref_schema) = &record.schema else {
                continue;
            };
            if let Some(subtree) = value.get_mut(field.as_str()) {
                translate_object(subtree, ref_schema, &language, default_language)?;
            }
        }
    }
    Ok(value)
}

fn split_options(options: Option<TranslateOptions>) -> (Option<String>, Option<SnapshotOptions>) {
    match options {
        None => (None, None),
        Some(mut options) => {
            let language = options.language.take();
            let snapshot = (!options.snapshot.is_empty()).then_some(options.snapshot);
            (language, snapshot)
        }
    }
}
