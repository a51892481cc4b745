//! # odm-i18n
//!
//! Schema plugin that turns fields marked for localization into one sub-field
//! per configured language, installs a default-language accessor, and
//! provides translated snapshot methods that collapse a multi-language
//! document into a single-language view.
//!
//! ## Example
//!
//! ```
//! use odm_core::{FieldConfig, FieldPath, Schema};
//! use odm_document::Document;
//! use odm_i18n::{attach, I18nOptions, TranslateOptions, TranslatedSnapshots};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut schema = Schema::new();
//! schema.add(FieldPath::parse("value")?, FieldConfig::string().localized());
//! attach(
//!     &mut schema,
//!     &I18nOptions::new(["en_US", "es_ES", "fr_FR"]).with_default("en_US"),
//! )?;
//!
//! let doc = Document::new(
//!     Arc::new(schema),
//!     &json!({"value": {"en_US": "Hello", "es_ES": "Hola", "fr_FR": "Bonjour"}}),
//! );
//! let view = doc.to_object_translated(Some(TranslateOptions::new().language("fr_FR")))?;
//! assert_eq!(view["value"], json!("Bonjour"));
//! # Ok(())
//! # }
//! ```

pub mod methods;
pub mod plugin;
pub mod translate;

pub use methods::{TranslateOptions, TranslatedSnapshots};
pub use plugin::{attach, I18nOptions};
pub use translate::translate_object;

use thiserror::Error;

/// Errors that can occur when attaching the plugin or translating documents
#[derive(Error, Debug)]
pub enum Error {
    #[error("Must pass an array of languages.")]
    MissingLanguages,

    #[error("Plugin metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error(transparent)]
    Document(#[from] odm_document::Error),
}

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, Error>;
