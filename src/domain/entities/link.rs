//! Link entity representing a shorthand-to-URL mapping.

/// One shorthand-to-URL association.
///
/// The shorthand is the unique key; the target URL is stored as an opaque
/// string with no normalization or scheme validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub shorthand: String,
    pub target_url: String,
}

impl LinkEntry {
    /// Creates a new LinkEntry instance.
    pub fn new(shorthand: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            shorthand: shorthand.into(),
            target_url: target_url.into(),
        }
    }
}
