//! Field declaration attributes

/// Data types a field declaration can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    String,
    Number,
    Boolean,
    Date,
    /// Foreign-key-like reference to another model's document.
    ObjectId,
    /// Free-form subtree, stored as-is.
    Mixed,
}

/// Configuration attached to a single field declaration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldConfig {
    /// Declared data type
    pub field_type: FieldType,
    /// Whether a value must be present for validation to pass
    pub required: bool,
    /// Marks the field for per-language expansion
    pub localized: bool,
    /// Minimum string length (if applicable)
    pub min_length: Option<usize>,
    /// Maximum string length (if applicable)
    pub max_length: Option<usize>,
    /// Model name a reference field points at
    pub ref_model: Option<String>,
}

impl FieldConfig {
    /// Create a configuration for the given type
    #[must_use]
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            ..Self::default()
        }
    }

    /// Shorthand for a plain string field
    #[must_use]
    pub fn string() -> Self {
        Self::new(FieldType::String)
    }

    /// Mark the field as required
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the field for per-language expansion
    #[must_use]
    pub fn localized(mut self) -> Self {
        self.localized = true;
        self
    }

    /// Set minimum length
    #[must_use]
    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    /// Set maximum length
    #[must_use]
    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    /// Declare a reference to another model
    #[must_use]
    pub fn reference(model: impl Into<String>) -> Self {
        Self {
            field_type: FieldType::ObjectId,
            ref_model: Some(model.into()),
            ..Self::default()
        }
    }
}
