//! Snapshot options for `to_object` / `to_json`

/// Options accepted by the snapshot calls.
///
/// The snapshot primitives reject `Some` of an all-default options value;
/// callers that end up with nothing to ask for must pass `None` instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotOptions {
    /// Include computed virtual values in the snapshot
    pub virtuals: bool,
}

impl SnapshotOptions {
    /// Create all-default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request computed virtual values
    #[must_use]
    pub fn with_virtuals(mut self) -> Self {
        self.virtuals = true;
        self
    }

    /// True when every option is at its default, i.e. the value carries no
    /// request at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
