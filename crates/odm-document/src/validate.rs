//! Validation of a document tree against its schema
//!
//! Each declared field is checked on every container it resolves to, so a
//! field inside an array of embedded sub-documents is validated once per
//! element. Error messages carry the full dotted path.

use odm_core::{tree, FieldConfig, FieldPath, FieldType, Schema};
use serde_json::Value;

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Dotted path of the offending field
    pub path: String,
    /// Human-readable message
    pub message: String,
}

impl ValidationError {
    fn new(path: &FieldPath, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

/// Validation outcome
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed
    pub is_valid: bool,
    /// List of errors found
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a passing result
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Record an error and mark the result failed.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.is_valid = false;
    }

    /// Check if any error was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True if some recorded error message contains `needle`
    /// (case-insensitive).
    #[must_use]
    pub fn cites(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.errors
            .iter()
            .any(|error| error.message.to_lowercase().contains(&needle))
    }
}

/// Validate `data` against every field `schema` declares.
#[must_use]
pub fn validate_document(schema: &Schema, data: &Value) -> ValidationResult {
    let mut result = ValidationResult::valid();
    for (path, config) in schema.iter() {
        let Some((last, parents)) = path.segments().split_last() else {
            continue;
        };
        let containers = tree::resolve_containers(data, parents);
        if containers.is_empty() {
            if config.required {
                result.add_error(required_error(path));
            }
            continue;
        }
        for container in containers {
            let value = container.as_object().and_then(|map| map.get(last));
            check_field(path, config, value, &mut result);
        }
    }
    result
}

fn required_error(path: &FieldPath) -> ValidationError {
    ValidationError::new(path, format!("Path '{path}' is required"))
}

fn check_field(
    path: &FieldPath,
    config: &FieldConfig,
    value: Option<&Value>,
    result: &mut ValidationResult,
) {
    let present = match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    };
    if !present {
        if config.required {
            result.add_error(required_error(path));
        }
        return;
    }
    let Some(value) = value else {
        return;
    };

    let type_ok = match config.field_type {
        FieldType::String => value.is_string(),
        FieldType::Number => value.is_number(),
        FieldType::Boolean => value.is_boolean(),
        // dates and ids travel as strings in the JSON tree
        FieldType::Date | FieldType::ObjectId => value.is_string(),
        FieldType::Mixed => true,
    };
    if !type_ok {
        result.add_error(ValidationError::new(
            path,
            format!("Cast to {:?} failed for path '{path}'", config.field_type),
        ));
        return;
    }

    if let Some(text) = value.as_str() {
        if let Some(min) = config.min_length {
            if text.chars().count() < min {
                result.add_error(ValidationError::new(
                    path,
                    format!("Path '{path}' is shorter than the minimum length {min}"),
                ));
            }
        }
        if let Some(max) = config.max_length {
            if text.chars().count() > max {
                result.add_error(ValidationError::new(
                    path,
                    format!("Path '{path}' is longer than the maximum length {max}"),
                ));
            }
        }
    }
}
