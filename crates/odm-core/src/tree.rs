//! Navigation helpers over `serde_json::Value` trees
//!
//! Materialized documents are plain JSON trees. These helpers read, write and
//! remove values by [`FieldPath`], and resolve the container objects a field
//! lives on, stepping through arrays of embedded sub-documents element-wise.

use crate::path::FieldPath;
use serde_json::{Map, Value};

/// Read the value at `path`, if every intermediate container exists.
#[must_use]
pub fn get_path<'a>(root: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.segments() {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Write `value` at `path`, creating intermediate objects as needed.
///
/// Intermediate nodes that are not objects are replaced by objects; the
/// caller owns the tree and has asked for this shape.
pub fn set_path(root: &mut Value, path: &FieldPath, value: Value) {
    let Some((last, parents)) = path.segments().split_last() else {
        return;
    };
    let mut current = root;
    for segment in parents {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        let Some(map) = current.as_object_mut() else {
            return;
        };
        current = map.entry(segment.clone()).or_insert(Value::Null);
    }
    if !current.is_object() {
        *current = Value::Object(Map::new());
    }
    if let Some(map) = current.as_object_mut() {
        map.insert(last.clone(), value);
    }
}

/// Remove and return the value at `path`, if present.
pub fn remove_path(root: &mut Value, path: &FieldPath) -> Option<Value> {
    let (last, parents) = path.segments().split_last()?;
    let mut current = root;
    for segment in parents {
        current = current.as_object_mut()?.get_mut(segment)?;
    }
    current.as_object_mut()?.remove(last)
}

/// Resolve the containers reached by walking `parents` from `root`.
///
/// An array anywhere along the walk fans out over its elements, so a field
/// declared inside an array of embedded sub-documents resolves to one
/// container per element. A missing intermediate yields no containers.
#[must_use]
pub fn resolve_containers<'a>(root: &'a Value, parents: &[String]) -> Vec<&'a Value> {
    match root {
        Value::Array(items) => items
            .iter()
            .flat_map(|item| resolve_containers(item, parents))
            .collect(),
        Value::Object(map) => match parents.split_first() {
            None => vec![root],
            Some((head, rest)) => map
                .get(head)
                .map(|child| resolve_containers(child, rest))
                .unwrap_or_default(),
        },
        _ => Vec::new(),
    }
}

/// Mutable counterpart of [`resolve_containers`].
pub fn resolve_containers_mut<'a>(root: &'a mut Value, parents: &[String]) -> Vec<&'a mut Value> {
    match root {
        Value::Array(items) => items
            .iter_mut()
            .flat_map(|item| resolve_containers_mut(item, parents))
            .collect(),
        Value::Object(_) => match parents.split_first() {
            None => vec![root],
            Some((head, rest)) => root
                .as_object_mut()
                .and_then(|map| map.get_mut(head))
                .map(|child| resolve_containers_mut(child, rest))
                .unwrap_or_default(),
        },
        _ => Vec::new(),
    }
}
