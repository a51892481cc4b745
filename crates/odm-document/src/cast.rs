//! Casting input data onto a schema's declared shape
//!
//! Document creation projects the caller's input tree onto the schema: only
//! declared paths are copied into the stored tree, so keys outside the
//! declaration (for a localized field, a language outside the configured set)
//! are dropped. An array met along a path is mirrored element-wise, which
//! covers fields declared inside arrays of embedded sub-documents.

use odm_core::Schema;
use serde_json::{Map, Value};

/// Project `input` onto the paths declared by `schema`.
#[must_use]
pub fn cast(schema: &Schema, input: &Value) -> Value {
    let mut out = Value::Object(Map::new());
    for (path, _config) in schema.iter() {
        copy_path(input, &mut out, path.segments());
    }
    out
}

fn copy_path(input: &Value, out: &mut Value, segments: &[String]) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };
    match input {
        Value::Array(items) => {
            if !out.is_array() {
                *out = Value::Array(vec![Value::Object(Map::new()); items.len()]);
            }
            if let Some(slots) = out.as_array_mut() {
                for (item, slot) in items.iter().zip(slots.iter_mut()) {
                    copy_path(item, slot, segments);
                }
            }
        }
        Value::Object(map) => {
            let Some(child) = map.get(head) else {
                return;
            };
            if !out.is_object() {
                *out = Value::Object(Map::new());
            }
            let Some(out_map) = out.as_object_mut() else {
                return;
            };
            if rest.is_empty() {
                out_map.insert(head.clone(), child.clone());
            } else {
                // copy into a detached slot first: an intermediate key is only
                // materialized when something below it was actually copied
                let mut slot = out_map.get(head).cloned().unwrap_or(Value::Null);
                copy_path(child, &mut slot, rest);
                if !slot.is_null() {
                    out_map.insert(head.clone(), slot);
                }
            }
        }
        _ => {}
    }
}
