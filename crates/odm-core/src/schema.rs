//! Schema container: ordered field declarations, virtual accessors, and
//! plugin extension data
//!
//! Fields keep their declaration order, which plugins rely on when they walk
//! the schema: sub-fields added for one parent stay adjacent. A cached path
//! index backs constant-time lookup and is kept in sync on removal.

use crate::field::FieldConfig;
use crate::path::FieldPath;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Read accessor of a virtual field, computed from the document's data tree.
pub type VirtualGetter = Arc<dyn Fn(&Value) -> Option<Value> + Send + Sync>;

/// Write accessor of a virtual field, storing into the document's data tree.
pub type VirtualSetter = Arc<dyn Fn(&mut Value, Value) + Send + Sync>;

/// A computed accessor bound to a named virtual path.
///
/// Virtuals have no storage of their own; both accessors operate on the
/// backing data tree.
#[derive(Clone)]
pub struct VirtualField {
    path: FieldPath,
    getter: Option<VirtualGetter>,
    setter: Option<VirtualSetter>,
}

impl VirtualField {
    /// Create a virtual with no accessors yet.
    #[must_use]
    pub fn new(path: FieldPath) -> Self {
        Self {
            path,
            getter: None,
            setter: None,
        }
    }

    /// Attach the read accessor.
    #[must_use]
    pub fn with_getter(mut self, getter: VirtualGetter) -> Self {
        self.getter = Some(getter);
        self
    }

    /// Attach the write accessor.
    #[must_use]
    pub fn with_setter(mut self, setter: VirtualSetter) -> Self {
        self.setter = Some(setter);
        self
    }

    /// The virtual path this accessor is bound to.
    #[must_use]
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Compute the virtual's value from `data`.
    #[must_use]
    pub fn get(&self, data: &Value) -> Option<Value> {
        self.getter.as_ref().and_then(|getter| getter(data))
    }

    /// Store `value` through the virtual into `data`. Returns false when the
    /// virtual has no setter.
    pub fn set(&self, data: &mut Value, value: Value) -> bool {
        match &self.setter {
            Some(setter) => {
                setter(data, value);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for VirtualField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualField")
            .field("path", &self.path)
            .field("getter", &self.getter.is_some())
            .field("setter", &self.setter.is_some())
            .finish()
    }
}

/// An ordered mapping from field path to field configuration
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(FieldPath, FieldConfig)>,
    index: HashMap<String, usize>,
    virtuals: Vec<VirtualField>,
    plugin_data: HashMap<String, Value>,
}

impl Schema {
    /// Create an empty schema
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Re-declaring an existing path replaces its
    /// configuration in place, keeping the original declaration position.
    pub fn add(&mut self, path: FieldPath, config: FieldConfig) {
        if let Some(&position) = self.index.get(&path.to_string()) {
            self.fields[position].1 = config;
            return;
        }
        self.index.insert(path.to_string(), self.fields.len());
        self.fields.push((path, config));
    }

    /// Declare a field one segment below `prefix`.
    pub fn add_child(&mut self, prefix: &FieldPath, segment: &str, config: FieldConfig) {
        self.add(prefix.child(segment), config);
    }

    /// Remove a field declaration, returning its configuration if present.
    /// Clears the cached path index entry as well.
    pub fn remove(&mut self, path: &FieldPath) -> Option<FieldConfig> {
        let position = self.index.remove(&path.to_string())?;
        let (_, config) = self.fields.remove(position);
        // positions after the removed entry shifted down by one
        for entry in self.index.values_mut() {
            if *entry > position {
                *entry -= 1;
            }
        }
        Some(config)
    }

    /// Look up a field's configuration.
    #[must_use]
    pub fn field(&self, path: &FieldPath) -> Option<&FieldConfig> {
        let &position = self.index.get(&path.to_string())?;
        Some(&self.fields[position].1)
    }

    /// True if the path is declared.
    #[must_use]
    pub fn contains(&self, path: &FieldPath) -> bool {
        self.index.contains_key(&path.to_string())
    }

    /// Iterate `(path, configuration)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &FieldConfig)> {
        self.fields.iter().map(|(path, config)| (path, config))
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Register a computed accessor. A virtual already bound to the same path
    /// is replaced.
    pub fn add_virtual(&mut self, virtual_field: VirtualField) {
        if let Some(existing) = self
            .virtuals
            .iter_mut()
            .find(|v| v.path() == virtual_field.path())
        {
            *existing = virtual_field;
            return;
        }
        self.virtuals.push(virtual_field);
    }

    /// Look up the virtual bound to `path`.
    #[must_use]
    pub fn virtual_at(&self, path: &FieldPath) -> Option<&VirtualField> {
        self.virtuals.iter().find(|v| v.path() == path)
    }

    /// All registered virtuals, in registration order.
    #[must_use]
    pub fn virtuals(&self) -> &[VirtualField] {
        &self.virtuals
    }

    /// Attach plugin extension data under `key`, replacing any previous value.
    pub fn set_plugin_data(&mut self, key: impl Into<String>, data: Value) {
        self.plugin_data.insert(key.into(), data);
    }

    /// Read plugin extension data stored under `key`.
    #[must_use]
    pub fn plugin_data(&self, key: &str) -> Option<&Value> {
        self.plugin_data.get(key)
    }
}
