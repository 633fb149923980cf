//! Navigation entries.

use serde::{Deserialize, Serialize};

/// Single navigable link: display label plus root-relative target path.
///
/// Serializes to the `{ "text": ..., "link": ... }` shape the rendering
/// framework expects for both top-nav and sidebar items.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display label.
    pub text: String,
    /// Root-relative target path (e.g. `/base/css`).
    pub link: String,
}

impl NavEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Whether the target path starts with `/`.
    pub(crate) fn is_root_relative(&self) -> bool {
        self.link.starts_with('/')
    }
}
