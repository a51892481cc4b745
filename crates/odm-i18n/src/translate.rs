//! Object flattening: collapsing language objects to single scalars
//!
//! The flattener walks the side table the expander recorded, resolves the
//! container each language object lives on, and replaces the object with the
//! value selected for the requested language, falling back to the default
//! language and then to the empty string. A flattened field is always a
//! scalar afterwards, never a nested object.

use crate::plugin::metadata;
use crate::Result;
use odm_core::{tree, FieldPath, Schema};
use serde_json::Value;
use tracing::trace;

/// Flatten every localized field of `value` in place.
///
/// Sub-paths of the most recently flattened field are skipped: the side table
/// lists one expanded path per language, and once the parent field has been
/// collapsed its remaining language siblings point into the value that was
/// just replaced. This relies on expanded paths for one field being adjacent
/// in declaration order.
///
/// # Errors
///
/// Returns an error if the schema's plugin data does not deserialize. A
/// schema without plugin data is left untouched.
pub fn translate_object(
    value: &mut Value,
    schema: &Schema,
    language: &str,
    default_language: Option<&str>,
) -> Result<()> {
    let Some(meta) = metadata(schema)? else {
        return Ok(());
    };

    let mut last_flattened: Option<FieldPath> = None;
    for path in &meta.localized_paths {
        if last_flattened
            .as_ref()
            .is_some_and(|parent| path.is_child_of(parent))
        {
            continue;
        }
        let segments = path.segments();
        if segments.len() < 2 {
            continue;
        }
        // the final segment is the language key; the one before it names the
        // field on its container
        let parents = &segments[..segments.len() - 2];
        let key = &segments[segments.len() - 2];
        for container in tree::resolve_containers_mut(value, parents) {
            translate_scalar(container, key, language, default_language);
        }
        trace!(path = %path, language, "flattened localized field");
        last_flattened = path.parent();
    }
    Ok(())
}

/// Collapse `container[key]` to the value selected for `language`.
fn translate_scalar(container: &mut Value, key: &str, language: &str, default_language: Option<&str>) {
    let Some(map) = container.as_object_mut() else {
        return;
    };
    let selected = map
        .get(key)
        .map_or_else(|| Value::String(String::new()), |item| {
            select_language(item, language, default_language)
        });
    map.insert(key.to_string(), selected);
}

fn select_language(item: &Value, language: &str, default_language: Option<&str>) -> Value {
    if let Some(candidate) = item.get(language) {
        if is_truthy(candidate) {
            return candidate.clone();
        }
    }
    if let Some(default) = default_language {
        if let Some(candidate) = item.get(default) {
            if is_truthy(candidate) {
                return candidate.clone();
            }
        }
    }
    Value::String(String::new())
}

/// Empty strings, nulls, `false` and zero count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
