//! Dotted field paths kept as segment sequences
//!
//! Paths are parsed once and carried as a list of segments afterwards, so
//! traversal code never re-splits a delimited string or slices it by offset.

use crate::{Error, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A non-empty sequence of path segments addressing a field in a schema or
/// a value in a document tree (e.g. `value.en_US` or `items.name`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path string.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or contains an empty segment.
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(Error::invalid_path(path, "path must not be empty"));
        }
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(Error::invalid_path(path, "path segment must not be empty"));
        }
        Ok(Self { segments })
    }

    /// Build a path from pre-split segments.
    ///
    /// # Errors
    ///
    /// Returns an error if no segments are given or any segment is empty.
    pub fn from_segments(segments: Vec<String>) -> Result<Self> {
        if segments.is_empty() {
            return Err(Error::invalid_path("", "path must not be empty"));
        }
        if segments.iter().any(String::is_empty) {
            return Err(Error::invalid_path(
                segments.join("."),
                "path segment must not be empty",
            ));
        }
        Ok(Self { segments })
    }

    /// The path's segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a path has at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The final segment (the field name on its container).
    #[must_use]
    pub fn last(&self) -> &str {
        // construction rejects empty paths, so a final segment always exists
        &self.segments[self.segments.len() - 1]
    }

    /// Extend the path by one trailing segment.
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// The path with the final segment removed, or `None` for a single-segment
    /// path.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// True if `other` is a prefix of this path (including equality).
    #[must_use]
    pub fn starts_with(&self, other: &Self) -> bool {
        self.segments.len() >= other.segments.len()
            && self.segments[..other.segments.len()] == other.segments[..]
    }

    /// True if this path is `other` plus exactly one more trailing segment.
    #[must_use]
    pub fn is_child_of(&self, other: &Self) -> bool {
        self.segments.len() == other.segments.len() + 1 && self.starts_with(other)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for FieldPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}
