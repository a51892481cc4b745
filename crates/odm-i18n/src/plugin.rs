//! Plugin attachment: per-language expansion of localized fields
//!
//! Expansion runs in two phases: a read-only pass collects the localized
//! field descriptors, then a mutation pass replaces each one with one
//! sub-field per configured language. The list of expanded paths is recorded
//! in the schema's plugin data so the flattener can find them later; the
//! localization marker itself is stripped from the sub-fields and never
//! recurses.

use crate::{Error, Result};
use odm_core::{tree, FieldConfig, FieldPath, Schema, VirtualField};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Key under which the plugin stores its side table in the schema.
pub const PLUGIN_KEY: &str = "i18n";

/// Name of the default-language convenience accessor sub-path.
pub const VIRTUAL_SEGMENT: &str = "i18n";

/// Plugin options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct I18nOptions {
    /// Languages every localized field is expanded into. Must be non-empty.
    pub languages: Vec<String>,
    /// Language backing the convenience accessor and translation fallback.
    pub default_language: Option<String>,
}

impl I18nOptions {
    /// Options for the given languages, with no default language.
    #[must_use]
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
            default_language: None,
        }
    }

    /// Set the default language.
    #[must_use]
    pub fn with_default(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }
}

/// Side table the expander leaves on the schema.
///
/// `localized_paths` holds the expanded per-language paths in declaration
/// order; the flattener walks it instead of re-deriving localization from the
/// mutated field configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nMetadata {
    /// Configured languages.
    pub languages: Vec<String>,
    /// Configured default language, if any.
    pub default_language: Option<String>,
    /// Expanded per-language field paths, in declaration order.
    pub localized_paths: Vec<FieldPath>,
}

/// Read the plugin's side table from a schema.
///
/// # Errors
///
/// Returns an error if the stored plugin data does not deserialize.
pub fn metadata(schema: &Schema) -> Result<Option<I18nMetadata>> {
    match schema.plugin_data(PLUGIN_KEY) {
        None => Ok(None),
        Some(raw) => Ok(Some(serde_json::from_value(raw.clone())?)),
    }
}

/// Attach the plugin: expand every localized field into per-language
/// sub-fields and record the side table.
///
/// Re-attachment is harmless: the first pass strips the localization marker
/// from the sub-fields it creates, so a later pass finds nothing to expand
/// and the recorded side table is kept.
///
/// # Errors
///
/// Returns [`Error::MissingLanguages`] when no languages are configured.
/// The check runs before any field is processed.
pub fn attach(schema: &mut Schema, options: &I18nOptions) -> Result<()> {
    if options.languages.is_empty() {
        return Err(Error::MissingLanguages);
    }

    // phase 1: read-only collection of the localized field descriptors
    let descriptors: Vec<(FieldPath, FieldConfig)> = schema
        .iter()
        .filter(|(_, config)| config.localized)
        .map(|(path, config)| (path.clone(), config.clone()))
        .collect();

    let mut meta = match metadata(schema)? {
        Some(existing) => existing,
        None => I18nMetadata {
            languages: options.languages.clone(),
            default_language: options.default_language.clone(),
            localized_paths: Vec::new(),
        },
    };

    // phase 2: replace each descriptor with its per-language sub-fields
    for (path, config) in descriptors {
        debug!(path = %path, "expanding localized field");
        schema.remove(&path);

        for language in &options.languages {
            let mut sub = config.clone();
            sub.localized = false;
            if sub.required {
                if let Some(default) = &options.default_language {
                    if language != default {
                        sub.required = false;
                    }
                }
            }
            schema.add_child(&path, language, sub);
            meta.localized_paths.push(path.child(language));
        }

        if let Some(default) = &options.default_language {
            install_default_accessor(schema, &path, default);
        }
    }

    schema.set_plugin_data(PLUGIN_KEY, serde_json::to_value(&meta)?);
    Ok(())
}

/// Register the `<path>.i18n` accessor aliasing `<path>.<default>`.
fn install_default_accessor(schema: &mut Schema, path: &FieldPath, default: &str) {
    let read_target = path.child(default);
    let write_target = read_target.clone();
    schema.add_virtual(
        VirtualField::new(path.child(VIRTUAL_SEGMENT))
            .with_getter(Arc::new(move |data| {
                tree::get_path(data, &read_target).cloned()
            }))
            .with_setter(Arc::new(move |data, value| {
                tree::set_path(data, &write_target, value);
            })),
    );
}
